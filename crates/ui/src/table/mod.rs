//! Headless table engine.
//!
//! Pure state and row-model computation behind [`DataTable`]: filter, then
//! stable sort, then paginate. Rendering lives in the component; everything
//! here works on row indices into the caller's data.
//!
//! [`DataTable`]: crate::components::DataTable

mod column;
mod filtering;
mod pagination;
mod selection;
mod sorting;
mod value;

pub use column::{column, ColumnDef};
pub use filtering::{row_matches, FilterState};
pub use pagination::{PaginationState, DEFAULT_PAGE_SIZE};
pub use selection::{RowSelection, SelectionSummary};
pub use sorting::{sort_rows, ColumnSort, SortDirection, SortingState};
pub use value::CellValue;

/// Everything that shapes a table's visible rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableState {
    pub sorting: SortingState,
    pub filters: FilterState,
    pub pagination: PaginationState,
    pub selection: RowSelection,
}

/// Result of running the row pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Source indices of every row that passed the filters, in sorted order.
    pub filtered: Vec<usize>,
    /// Source indices of the rows on the current page.
    pub page: Vec<usize>,
    /// Pagination with the page index clamped to the filtered row count.
    pub pagination: PaginationState,
    pub page_count: usize,
}

impl TableView {
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// Run filter → sort → paginate over `data`.
pub fn compute<T>(data: &[T], columns: &[ColumnDef<T>], state: &TableState) -> TableView {
    let mut filtered: Vec<usize> = (0..data.len())
        .filter(|&idx| row_matches(&data[idx], columns, &state.filters))
        .collect();
    sort_rows(data, columns, &state.sorting, &mut filtered);

    let total = filtered.len();
    let pagination = state.pagination.clamped(total);
    let page = filtered[pagination.range(total)].to_vec();
    tracing::trace!(
        rows = data.len(),
        filtered = total,
        page = pagination.page_index,
        "table rows computed"
    );

    TableView {
        page_count: pagination.page_count(total),
        filtered,
        page,
        pagination,
    }
}
