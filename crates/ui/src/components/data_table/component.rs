use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdArrowDown, LdArrowUp, LdArrowUpDown, LdChevronLeft, LdChevronRight, LdChevronsLeft,
    LdChevronsRight,
};
use dioxus_free_icons::Icon;

use crate::cn::merge_class_attributes;
use crate::components::button::{button_variants, Button, ButtonSize, ButtonVariant};
use crate::components::table::{Table, TableBody, TableCell, TableHead, TableHeader, TableRow};
use crate::config::ui_config;
use crate::controllable::use_controllable;
use crate::table::{
    self, ColumnDef, FilterState, PaginationState, RowSelection, SelectionSummary, SortDirection,
    SortingState, TableState,
};

const CHECKBOX_CLASS: &str = "border-input accent-primary size-4 shrink-0 rounded-[4px] border align-middle";

/// Current table state and setters, handed to a toolbar render prop.
#[derive(Clone, PartialEq)]
pub struct DataTableControls {
    pub sorting: SortingState,
    pub filters: FilterState,
    pub pagination: PaginationState,
    pub selection: RowSelection,
    /// Rows that pass the current filters.
    pub filtered_count: usize,
    /// Selected rows among those that pass the current filters.
    pub selected_count: usize,
    pub total_count: usize,
    pub set_sorting: Callback<SortingState>,
    pub set_filters: Callback<FilterState>,
    pub set_pagination: Callback<PaginationState>,
    pub set_selection: Callback<RowSelection>,
}

impl DataTableControls {
    pub fn set_global_filter(&self, text: impl Into<String>) {
        self.set_filters.call(self.filters.with_global(text));
    }

    pub fn set_column_filter(&self, id: &str, text: impl Into<String>) {
        self.set_filters.call(self.filters.with_column(id, text));
    }

    pub fn clear_filters(&self) {
        self.set_filters.call(FilterState::default());
    }

    pub fn set_page_size(&self, page_size: usize) {
        self.set_pagination.call(self.pagination.with_page_size(page_size));
    }

    pub fn clear_selection(&self) {
        self.set_selection.call(RowSelection::default());
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps<T: Clone + PartialEq + 'static> {
    pub columns: Vec<ColumnDef<T>>,
    pub data: Vec<T>,
    #[props(default)]
    pub sorting: Option<SortingState>,
    #[props(default)]
    pub on_sorting_change: Option<Callback<SortingState>>,
    #[props(default)]
    pub filters: Option<FilterState>,
    #[props(default)]
    pub on_filters_change: Option<Callback<FilterState>>,
    #[props(default)]
    pub pagination: Option<PaginationState>,
    #[props(default)]
    pub on_pagination_change: Option<Callback<PaginationState>>,
    #[props(default)]
    pub selection: Option<RowSelection>,
    #[props(default)]
    pub on_selection_change: Option<Callback<RowSelection>>,
    #[props(default = false)]
    pub enable_row_selection: bool,
    /// Initial page size when pagination is uncontrolled. Defaults to the
    /// configured table page size.
    #[props(default)]
    pub page_size: Option<usize>,
    #[props(default = "No results.".to_string())]
    pub empty_message: String,
    /// Rendered above the table with the current controls.
    #[props(default)]
    pub toolbar: Option<Callback<DataTableControls, Element>>,
    /// Called with the source index of a clicked row.
    #[props(default)]
    pub on_row_click: Option<EventHandler<usize>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

/// Sortable, filterable, paginated table over `data`.
///
/// Each of sorting, filters, pagination and selection is controlled when
/// its value prop is given and kept internally otherwise. Row identity is
/// the row's index in `data`.
#[component]
pub fn DataTable<T: Clone + PartialEq + 'static>(props: DataTableProps<T>) -> Element {
    let page_size = props.page_size.unwrap_or(ui_config().table.page_size);
    let (sorting, set_sorting) = use_controllable(
        props.sorting.clone(),
        SortingState::default,
        props.on_sorting_change,
    );
    let (filters, set_filters) = use_controllable(
        props.filters.clone(),
        FilterState::default,
        props.on_filters_change,
    );
    let (pagination, set_pagination) = use_controllable(
        props.pagination,
        move || PaginationState::new(page_size),
        props.on_pagination_change,
    );
    let (selection, set_selection) = use_controllable(
        props.selection.clone(),
        RowSelection::default,
        props.on_selection_change,
    );

    // A new filter can shrink the row set below the current page.
    let set_filters_rewound = use_callback(move |next: FilterState| {
        set_filters.call(next);
        set_pagination.call(pagination.first());
    });

    let state = TableState {
        sorting,
        filters,
        pagination,
        selection,
    };
    let view = table::compute(&props.data, &props.columns, &state);
    let summary = state.selection.summary(&view.filtered);
    let controls = DataTableControls {
        sorting: state.sorting.clone(),
        filters: state.filters.clone(),
        pagination: view.pagination,
        selection: state.selection.clone(),
        filtered_count: view.filtered_count(),
        selected_count: state.selection.count_in(&view.filtered),
        total_count: props.data.len(),
        set_sorting,
        set_filters: set_filters_rewound,
        set_pagination,
        set_selection,
    };

    let selectable = props.enable_row_selection;
    let col_span = props.columns.len() + usize::from(selectable);
    let select_all_next = state.selection.toggled_all(&view.filtered);
    let merged = merge_class_attributes("flex w-full flex-col gap-4", props.attributes);

    rsx! {
        div {
            "data-slot": "data-table",
            ..merged,
            if let Some(toolbar) = props.toolbar {
                {toolbar.call(controls.clone())}
            }
            div { class: "overflow-hidden rounded-md border",
                Table {
                    TableHeader {
                        TableRow {
                            if selectable {
                                TableHead { class: "w-8",
                                    input {
                                        r#type: "checkbox",
                                        class: CHECKBOX_CLASS,
                                        aria_label: "Select all rows",
                                        aria_checked: summary.aria_checked(),
                                        "data-state": select_state(summary),
                                        checked: summary == SelectionSummary::All,
                                        onchange: move |_| set_selection.call(select_all_next.clone()),
                                    }
                                }
                            }
                            for column in props.columns.iter() {
                                {header_cell(column, &state.sorting, set_sorting)}
                            }
                        }
                    }
                    TableBody {
                        if view.page.is_empty() {
                            tr { "data-slot": "table-row",
                                td {
                                    class: "h-24 p-2 text-center text-muted-foreground",
                                    colspan: "{col_span}",
                                    "{props.empty_message}"
                                }
                            }
                        }
                        for idx in view.page.iter().copied() {
                            {body_row(idx, &props.data[idx], &props.columns, &state.selection, selectable, set_selection, props.on_row_click)}
                        }
                    }
                }
            }
            {pagination_bar(&controls, view.page_count, selectable)}
        }
    }
}

fn select_state(summary: SelectionSummary) -> &'static str {
    match summary {
        SelectionSummary::None => "unchecked",
        SelectionSummary::Some => "indeterminate",
        SelectionSummary::All => "checked",
    }
}

fn header_cell<T>(
    column: &ColumnDef<T>,
    sorting: &SortingState,
    set_sorting: Callback<SortingState>,
) -> Element {
    let header = column.header.clone();
    if !column.sortable {
        return rsx! {
            TableHead { key: "{column.id}", "{header}" }
        };
    }

    let direction = sorting.direction(&column.id);
    let aria_sort = direction.map_or("none", |d| d.aria());
    let single = sorting.toggled(&column.id, false);
    let multi = sorting.toggled(&column.id, true);
    let class = button_variants(ButtonVariant::Ghost, ButtonSize::Sm);

    rsx! {
        TableHead { key: "{column.id}", aria_sort,
            button {
                r#type: "button",
                class: "{class} -ml-3 data-[state=sorted]:text-foreground",
                "data-state": if direction.is_some() { "sorted" } else { "unsorted" },
                onclick: move |evt: MouseEvent| {
                    let next = if evt.modifiers().contains(Modifiers::SHIFT) {
                        multi.clone()
                    } else {
                        single.clone()
                    };
                    set_sorting.call(next);
                },
                "{header}"
                {match direction {
                    Some(SortDirection::Ascending) => rsx! {
                        Icon::<LdArrowUp> { icon: LdArrowUp, width: 14, height: 14 }
                    },
                    Some(SortDirection::Descending) => rsx! {
                        Icon::<LdArrowDown> { icon: LdArrowDown, width: 14, height: 14 }
                    },
                    None => rsx! {
                        Icon::<LdArrowUpDown> { icon: LdArrowUpDown, width: 14, height: 14, class: "opacity-50" }
                    },
                }}
            }
        }
    }
}

fn body_row<T>(
    idx: usize,
    row: &T,
    columns: &[ColumnDef<T>],
    selection: &RowSelection,
    selectable: bool,
    set_selection: Callback<RowSelection>,
    on_row_click: Option<EventHandler<usize>>,
) -> Element {
    let selected = selectable && selection.is_selected(idx);
    let toggled = selection.toggled(idx);

    rsx! {
        TableRow {
            key: "{idx}",
            selected,
            onclick: on_row_click.map(|handler| {
                EventHandler::new(move |_: MouseEvent| handler.call(idx))
            }),
            if selectable {
                TableCell {
                    input {
                        r#type: "checkbox",
                        class: CHECKBOX_CLASS,
                        aria_label: "Select row",
                        checked: selected,
                        onclick: move |evt: MouseEvent| evt.stop_propagation(),
                        onchange: move |_| set_selection.call(toggled.clone()),
                    }
                }
            }
            for column in columns.iter() {
                TableCell { key: "{column.id}", {column.render(row)} }
            }
        }
    }
}

fn pagination_bar(controls: &DataTableControls, page_count: usize, selectable: bool) -> Element {
    let pagination = controls.pagination;
    let total = controls.filtered_count;
    let page = pagination.page_index + 1;
    let set_pagination = controls.set_pagination;
    let (first, previous) = (pagination.first(), pagination.previous());
    let (next, last) = (pagination.next(total), pagination.last(total));
    let summary = if selectable {
        format!("{} of {} row(s) selected.", controls.selected_count, total)
    } else {
        format!("{total} row(s)")
    };

    rsx! {
        div { class: "flex items-center justify-between gap-2 px-2 text-sm",
            div { class: "text-muted-foreground flex-1", "{summary}" }
            div { class: "flex items-center gap-2",
                span { class: "font-medium", "data-slot": "page-indicator", "Page {page} of {page_count}" }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::IconSm,
                    disabled: !pagination.can_previous(),
                    aria_label: "Go to first page",
                    onclick: move |_| set_pagination.call(first),
                    Icon::<LdChevronsLeft> { icon: LdChevronsLeft, width: 16, height: 16 }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::IconSm,
                    disabled: !pagination.can_previous(),
                    aria_label: "Go to previous page",
                    onclick: move |_| set_pagination.call(previous),
                    Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 16, height: 16 }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::IconSm,
                    disabled: !pagination.can_next(total),
                    aria_label: "Go to next page",
                    onclick: move |_| set_pagination.call(next),
                    Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::IconSm,
                    disabled: !pagination.can_next(total),
                    aria_label: "Go to last page",
                    onclick: move |_| set_pagination.call(last),
                    Icon::<LdChevronsRight> { icon: LdChevronsRight, width: 16, height: 16 }
                }
            }
        }
    }
}
