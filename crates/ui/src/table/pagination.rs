use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size,
        }
    }

    fn size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Number of pages for `total` rows; an empty table still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.size()).max(1)
    }

    /// Same state with the page index pulled back inside the last page.
    pub fn clamped(&self, total: usize) -> Self {
        Self {
            page_index: self.page_index.min(self.page_count(total) - 1),
            page_size: self.page_size,
        }
    }

    /// Row positions (into the filtered, sorted rows) on the current page.
    pub fn range(&self, total: usize) -> Range<usize> {
        let page = self.clamped(total);
        let start = (page.page_index * self.size()).min(total);
        let end = (start + self.size()).min(total);
        start..end
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.page_index + 1 < self.page_count(total)
    }

    pub fn next(&self, total: usize) -> Self {
        Self {
            page_index: (self.page_index + 1).min(self.page_count(total) - 1),
            ..*self
        }
    }

    pub fn previous(&self) -> Self {
        Self {
            page_index: self.page_index.saturating_sub(1),
            ..*self
        }
    }

    pub fn first(&self) -> Self {
        Self {
            page_index: 0,
            ..*self
        }
    }

    pub fn last(&self, total: usize) -> Self {
        Self {
            page_index: self.page_count(total) - 1,
            ..*self
        }
    }

    /// Change the page size, keeping the first visible row on screen.
    pub fn with_page_size(&self, page_size: usize) -> Self {
        let first_row = self.page_index * self.size();
        Self {
            page_index: first_row / page_size.max(1),
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        let p = PaginationState::new(10);
        assert_eq!(p.page_count(0), 1);
        assert_eq!(p.page_count(10), 1);
        assert_eq!(p.page_count(11), 2);
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let p = PaginationState::new(5);
        assert!(!p.can_previous());
        assert_eq!(p.previous(), p);
        let last = p.last(12);
        assert_eq!(last.page_index, 2);
        assert!(!last.can_next(12));
        assert_eq!(last.next(12), last);
        assert_eq!(last.first().page_index, 0);
    }

    #[test]
    fn range_of_last_partial_page() {
        let p = PaginationState {
            page_index: 2,
            page_size: 5,
        };
        assert_eq!(p.range(12), 10..12);
    }

    #[test]
    fn out_of_range_index_is_clamped() {
        let p = PaginationState {
            page_index: 9,
            page_size: 5,
        };
        assert_eq!(p.clamped(7).page_index, 1);
        assert_eq!(p.range(7), 5..7);
        assert_eq!(p.range(0), 0..0);
    }

    #[test]
    fn resizing_keeps_first_row_visible() {
        let p = PaginationState {
            page_index: 3,
            page_size: 10,
        };
        let resized = p.with_page_size(25);
        assert_eq!(resized.page_index, 1);
        assert!(resized.range(100).contains(&30));
    }

    #[test]
    fn zero_page_size_behaves_like_one() {
        let p = PaginationState::new(0);
        assert_eq!(p.page_count(3), 3);
        assert_eq!(p.range(3), 0..1);
    }
}
