use std::cmp::Ordering;
use std::fmt;

/// A cell's sortable, filterable value as produced by a column accessor.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Bool(_) => 0,
            CellValue::Number(_) => 1,
            CellValue::Text(_) => 2,
            CellValue::Empty => 3,
        }
    }

    /// Total order: booleans, then numbers, then text (natural order, so
    /// `item2` sorts before `item10`), with empties last.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => natural_cmp(a, b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Case-insensitive substring match against the display text.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.to_string().to_lowercase().contains(needle)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", if *b { "Yes" } else { "No" }),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::Text(value.clone())
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<f32> for CellValue {
    fn from(value: f32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Number(value as f64)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

/// Compare strings case-insensitively, treating digit runs as numbers.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();
    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let ln = take_number(&mut left);
                let rn = take_number(&mut right);
                // Compare by magnitude: strip leading zeros, then length, then digits.
                let (lt, rt) = (ln.trim_start_matches('0'), rn.trim_start_matches('0'));
                let ord = lt.len().cmp(&rt.len()).then_with(|| lt.cmp(rt));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                let ord = l.to_lowercase().cmp(r.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        digits.push(c);
        chars.next();
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(CellValue::from(2).compare(&CellValue::from(10)), Ordering::Less);
        assert_eq!(CellValue::from(-1.5).compare(&CellValue::from(-1.5)), Ordering::Equal);
    }

    #[test]
    fn text_uses_natural_order() {
        assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
        assert_eq!(natural_cmp("Apple", "banana"), Ordering::Less);
        assert_eq!(natural_cmp("v1.9", "v1.10"), Ordering::Less);
        assert_eq!(natural_cmp("a", "a1"), Ordering::Less);
    }

    #[test]
    fn empty_sorts_after_everything() {
        for value in [CellValue::from(true), CellValue::from(3), CellValue::from("z")] {
            assert_eq!(CellValue::Empty.compare(&value), Ordering::Greater);
        }
    }

    #[test]
    fn display_formats() {
        assert_eq!(CellValue::from(42).to_string(), "42");
        assert_eq!(CellValue::from(2.5).to_string(), "2.5");
        assert_eq!(CellValue::from(true).to_string(), "Yes");
        assert_eq!(CellValue::from(None::<i32>).to_string(), "");
    }

    #[test]
    fn matches_is_case_insensitive() {
        assert!(CellValue::from("Ada Lovelace").matches("love"));
        assert!(!CellValue::from("Ada").matches("grace"));
        assert!(CellValue::Empty.matches(""));
    }
}
