use std::cmp::Ordering;

use super::column::{column, ColumnDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Value for the `aria-sort` attribute.
    pub fn aria(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSort {
    pub id: String,
    pub desc: bool,
}

/// Ordered sort criteria; the first entry has the highest priority.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortingState(pub Vec<ColumnSort>);

impl SortingState {
    pub fn by(id: impl Into<String>, desc: bool) -> Self {
        Self(vec![ColumnSort { id: id.into(), desc }])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn direction(&self, id: &str) -> Option<SortDirection> {
        self.0.iter().find(|s| s.id == id).map(|s| {
            if s.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            }
        })
    }

    /// Position of `id` in a multi-column sort.
    pub fn priority(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|s| s.id == id)
    }

    /// Cycle `id` through ascending → descending → unsorted.
    ///
    /// Without `multi` the result sorts by `id` alone; with it other
    /// criteria are kept and a newly sorted column is appended.
    pub fn toggled(&self, id: &str, multi: bool) -> SortingState {
        let next = match self.direction(id) {
            None => Some(false),
            Some(SortDirection::Ascending) => Some(true),
            Some(SortDirection::Descending) => None,
        };

        if !multi {
            return match next {
                Some(desc) => SortingState::by(id, desc),
                None => SortingState::default(),
            };
        }

        let mut sorts = self.0.clone();
        match (self.priority(id), next) {
            (Some(idx), Some(desc)) => sorts[idx].desc = desc,
            (Some(idx), None) => {
                sorts.remove(idx);
            }
            (None, Some(desc)) => sorts.push(ColumnSort {
                id: id.to_string(),
                desc,
            }),
            (None, None) => {}
        }
        SortingState(sorts)
    }
}

/// Stable sort of row indices by the active criteria. Unknown or
/// non-sortable columns are skipped; empty values stay last in either
/// direction.
pub fn sort_rows<T>(data: &[T], columns: &[ColumnDef<T>], sorting: &SortingState, rows: &mut [usize]) {
    let criteria: Vec<(&ColumnDef<T>, bool)> = sorting
        .0
        .iter()
        .filter_map(|s| column(columns, &s.id).filter(|c| c.sortable).map(|c| (c, s.desc)))
        .collect();
    if criteria.is_empty() {
        return;
    }

    rows.sort_by(|&a, &b| {
        for (col, desc) in &criteria {
            let (va, vb) = (col.value(&data[a]), col.value(&data[b]));
            let ord = match (va.is_empty(), vb.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) if *desc => vb.compare(&va),
                (false, false) => va.compare(&vb),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
}
