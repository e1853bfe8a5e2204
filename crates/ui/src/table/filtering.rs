use super::column::{column, ColumnDef};

/// Global search text plus per-column filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub global: String,
    pub columns: Vec<(String, String)>,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        !self.global.trim().is_empty() || !self.columns.is_empty()
    }

    pub fn with_global(&self, text: impl Into<String>) -> Self {
        Self {
            global: text.into(),
            columns: self.columns.clone(),
        }
    }

    pub fn column(&self, id: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(c, _)| c == id)
            .map(|(_, v)| v.as_str())
    }

    /// Set the filter for one column; blank text removes it.
    pub fn with_column(&self, id: &str, text: impl Into<String>) -> Self {
        let text = text.into();
        let mut columns: Vec<_> = self
            .columns
            .iter()
            .filter(|(c, _)| c != id)
            .cloned()
            .collect();
        if !text.trim().is_empty() {
            columns.push((id.to_string(), text));
        }
        Self {
            global: self.global.clone(),
            columns,
        }
    }
}

/// Whether `row` passes every column filter and, when set, the global one.
///
/// The global filter matches if any filterable column contains the text.
pub fn row_matches<T>(row: &T, columns: &[ColumnDef<T>], filters: &FilterState) -> bool {
    for (id, text) in &filters.columns {
        let needle = text.trim().to_lowercase();
        // A filter on an unknown column cannot exclude anything.
        if let Some(col) = column(columns, id) {
            if !col.value(row).matches(&needle) {
                return false;
            }
        }
    }

    let global = filters.global.trim().to_lowercase();
    if global.is_empty() {
        return true;
    }
    columns
        .iter()
        .filter(|c| c.filterable)
        .any(|c| c.value(row).matches(&global))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_column_filter_is_removed() {
        let f = FilterState::default().with_column("name", "ada");
        assert_eq!(f.column("name"), Some("ada"));
        let f = f.with_column("name", "  ");
        assert_eq!(f.column("name"), None);
        assert!(!f.is_active());
    }

    #[test]
    fn with_column_replaces_existing() {
        let f = FilterState::default()
            .with_column("name", "a")
            .with_column("name", "b");
        assert_eq!(f.columns.len(), 1);
        assert_eq!(f.column("name"), Some("b"));
    }

    #[test]
    fn global_text_marks_active() {
        assert!(FilterState::default().with_global("x").is_active());
        assert!(!FilterState::default().with_global("   ").is_active());
    }
}
