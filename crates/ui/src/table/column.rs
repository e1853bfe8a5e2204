use std::rc::Rc;

use dioxus::prelude::*;

use super::CellValue;

type Accessor<T> = Rc<dyn Fn(&T) -> CellValue>;
type Renderer<T> = Rc<dyn Fn(&T) -> Element>;

/// Column definition: how to read, sort, filter and render one column.
pub struct ColumnDef<T> {
    pub id: String,
    pub header: String,
    pub sortable: bool,
    pub filterable: bool,
    accessor: Accessor<T>,
    cell: Option<Renderer<T>>,
}

impl<T> ColumnDef<T> {
    /// A sortable, filterable column reading its value through `accessor`.
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            sortable: true,
            filterable: true,
            accessor: Rc::new(accessor),
            cell: None,
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Custom cell renderer; without one the cell shows the value's text.
    pub fn cell(mut self, render: impl Fn(&T) -> Element + 'static) -> Self {
        self.cell = Some(Rc::new(render));
        self
    }

    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    pub fn render(&self, row: &T) -> Element {
        match &self.cell {
            Some(render) => render(row),
            None => {
                let text = self.value(row).to_string();
                rsx! { "{text}" }
            }
        }
    }
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            sortable: self.sortable,
            filterable: self.filterable,
            accessor: Rc::clone(&self.accessor),
            cell: self.cell.clone(),
        }
    }
}

/// Columns compare by identity of their closures, so re-creating a column
/// every render counts as a change.
impl<T> PartialEq for ColumnDef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.header == other.header
            && self.sortable == other.sortable
            && self.filterable == other.filterable
            && Rc::ptr_eq(&self.accessor, &other.accessor)
            && match (&self.cell, &other.cell) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl<T> std::fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .finish()
    }
}

/// Find a column by id.
pub fn column<'a, T>(columns: &'a [ColumnDef<T>], id: &str) -> Option<&'a ColumnDef<T>> {
    columns.iter().find(|c| c.id == id)
}
