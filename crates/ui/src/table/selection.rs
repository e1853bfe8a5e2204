use std::collections::BTreeSet;

/// Selected rows, identified by their index in the source data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowSelection(pub BTreeSet<usize>);

/// Aggregate selection of a set of rows, for a "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSummary {
    None,
    Some,
    All,
}

impl SelectionSummary {
    /// Value for `aria-checked`.
    pub fn aria_checked(&self) -> &'static str {
        match self {
            SelectionSummary::None => "false",
            SelectionSummary::Some => "mixed",
            SelectionSummary::All => "true",
        }
    }
}

impl RowSelection {
    pub fn is_selected(&self, row: usize) -> bool {
        self.0.contains(&row)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn toggled(&self, row: usize) -> Self {
        let mut rows = self.0.clone();
        if !rows.remove(&row) {
            rows.insert(row);
        }
        Self(rows)
    }

    /// Select every row in `rows`, or clear them if all already are.
    /// Rows outside `rows` keep their state.
    pub fn toggled_all(&self, rows: &[usize]) -> Self {
        let mut next = self.0.clone();
        if self.summary(rows) == SelectionSummary::All {
            for row in rows {
                next.remove(row);
            }
        } else {
            next.extend(rows.iter().copied());
        }
        Self(next)
    }

    /// How many of `rows` are selected.
    pub fn count_in(&self, rows: &[usize]) -> usize {
        rows.iter().filter(|r| self.0.contains(*r)).count()
    }

    pub fn summary(&self, rows: &[usize]) -> SelectionSummary {
        match self.count_in(rows) {
            0 => SelectionSummary::None,
            n if n == rows.len() => SelectionSummary::All,
            _ => SelectionSummary::Some,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_in_ignores_rows_outside_the_set() {
        let selection = RowSelection([0, 2, 5].into_iter().collect());
        assert_eq!(selection.count_in(&[2, 3]), 1);
        assert_eq!(selection.count_in(&[]), 0);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn toggle_round_trips() {
        let s = RowSelection::default();
        let once = s.toggled(3);
        assert!(once.is_selected(3));
        assert_eq!(once.toggled(3), s);
    }

    #[test]
    fn summary_reports_indeterminate() {
        let s = RowSelection::default().toggled(1);
        assert_eq!(s.summary(&[1, 2]), SelectionSummary::Some);
        assert_eq!(s.summary(&[1]), SelectionSummary::All);
        assert_eq!(s.summary(&[2]), SelectionSummary::None);
        assert_eq!(SelectionSummary::Some.aria_checked(), "mixed");
    }

    #[test]
    fn toggle_all_selects_then_clears_only_given_rows() {
        let s = RowSelection::default().toggled(9);
        let all = s.toggled_all(&[1, 2]);
        assert_eq!(all.rows().collect::<Vec<_>>(), vec![1, 2, 9]);
        let cleared = all.toggled_all(&[1, 2]);
        assert_eq!(cleared.rows().collect::<Vec<_>>(), vec![9]);
    }

    #[test]
    fn empty_row_set_counts_as_none() {
        assert_eq!(RowSelection::default().summary(&[]), SelectionSummary::None);
    }
}
