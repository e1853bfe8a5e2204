use dioxus::prelude::*;
use ui::components::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, DataTable, DataTableControls, Input,
};
use ui::table::{CellValue, ColumnDef, SortingState};

use crate::story::{Story, StoryPage};

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: &'static str,
    pub status: &'static str,
    pub email: &'static str,
    pub amount: f64,
}

pub fn payments() -> Vec<Payment> {
    vec![
        Payment { id: "m5gr84i9", status: "success", email: "ken99@example.com", amount: 316.0 },
        Payment { id: "3u1reuv4", status: "success", email: "abe45@example.com", amount: 242.0 },
        Payment { id: "derv1ws0", status: "processing", email: "monserrat44@example.com", amount: 837.0 },
        Payment { id: "5kma53ae", status: "success", email: "silas22@example.com", amount: 874.0 },
        Payment { id: "bhqecj4p", status: "failed", email: "carmella@example.com", amount: 721.0 },
        Payment { id: "p0r8x2kq", status: "pending", email: "ada@example.com", amount: 54.5 },
        Payment { id: "zz71lm3c", status: "processing", email: "grace@example.com", amount: 1290.0 },
        Payment { id: "q9w8e7r6", status: "failed", email: "linus@example.com", amount: 12.0 },
    ]
}

fn status_badge(status: &str) -> BadgeVariant {
    match status {
        "success" => BadgeVariant::Default,
        "failed" => BadgeVariant::Destructive,
        "processing" => BadgeVariant::Secondary,
        _ => BadgeVariant::Outline,
    }
}

pub fn payment_columns() -> Vec<ColumnDef<Payment>> {
    vec![
        ColumnDef::new("status", "Status", |p: &Payment| p.status.into()).cell(|p: &Payment| {
            let variant = status_badge(p.status);
            rsx! { Badge { variant, "{p.status}" } }
        }),
        ColumnDef::new("email", "Email", |p: &Payment| p.email.into()),
        ColumnDef::new("amount", "Amount", |p: &Payment| CellValue::from(p.amount))
            .filterable(false)
            .cell(|p: &Payment| {
                let amount = format!("${:.2}", p.amount);
                rsx! {
                    span { class: "block text-right font-medium tabular-nums", "{amount}" }
                }
            }),
    ]
}

fn toolbar(controls: DataTableControls) -> Element {
    let filter = controls.filters.global.clone();
    let has_filter = controls.filters.is_active();
    let for_input = controls.clone();

    rsx! {
        div { class: "flex items-center gap-2",
            Input {
                class: "max-w-sm",
                placeholder: "Filter payments…",
                value: filter,
                on_input: move |evt: FormEvent| for_input.set_global_filter(evt.value()),
            }
            if has_filter {
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Sm,
                    onclick: move |_| controls.clear_filters(),
                    "Reset"
                }
            }
        }
    }
}

#[component]
pub fn TableStory() -> Element {
    let mut sorting = use_signal(|| SortingState::by("amount", true));
    let mut clicked = use_signal(|| None::<usize>);
    let data = use_hook(payments);
    let columns = use_hook(payment_columns);
    let last_clicked = clicked().map(|idx| data[idx].id);

    rsx! {
        StoryPage {
            title: "Data table",
            summary: "Shift-click a header to add a secondary sort.",
            Story {
                title: "Uncontrolled",
                description: "The table owns its state; the toolbar drives the global filter.",
                DataTable::<Payment> {
                    class: "w-full",
                    columns: columns.clone(),
                    data: data.clone(),
                    enable_row_selection: true,
                    toolbar: Callback::new(toolbar),
                }
            }
            Story {
                title: "Controlled sorting",
                description: "Sorting lives in the page and is shown below the table.",
                div { class: "flex w-full flex-col gap-2",
                    DataTable::<Payment> {
                        columns: columns.clone(),
                        data: data.clone(),
                        sorting: sorting(),
                        on_sorting_change: move |next: SortingState| sorting.set(next),
                        on_row_click: move |idx: usize| clicked.set(Some(idx)),
                    }
                    p { class: "text-muted-foreground text-sm",
                        "Sorted by: "
                        for entry in sorting.read().0.iter() {
                            code { key: "{entry.id}", class: "mr-2",
                                if entry.desc { "{entry.id} ↓" } else { "{entry.id} ↑" }
                            }
                        }
                    }
                    if let Some(id) = last_clicked {
                        p { class: "text-sm", "Last clicked: {id}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui::table::{compute, TableState};

    #[test]
    fn default_sort_puts_largest_amount_first() {
        let data = payments();
        let state = TableState {
            sorting: SortingState::by("amount", true),
            ..TableState::default()
        };
        let view = compute(&data, &payment_columns(), &state);
        assert_eq!(data[view.filtered[0]].id, "zz71lm3c");
    }

    #[test]
    fn status_filter_matches_case_insensitively() {
        let data = payments();
        let mut state = TableState::default();
        state.filters = state.filters.with_global("FAILED");
        let view = compute(&data, &payment_columns(), &state);
        assert_eq!(view.filtered_count(), 2);
    }

    #[test]
    fn amounts_are_not_searched() {
        let data = payments();
        let mut state = TableState::default();
        state.filters = state.filters.with_global("316");
        assert!(compute(&data, &payment_columns(), &state).is_empty());
    }
}
