use dioxus::prelude::*;

use crate::cn::merge_class_attributes;

/// Scrollable table wrapper.
#[component]
pub fn Table(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes("w-full caption-bottom text-sm", attributes);

    rsx! {
        div {
            class: "relative w-full overflow-x-auto",
            "data-slot": "table-container",
            table {
                "data-slot": "table",
                ..merged,
                {children}
            }
        }
    }
}

#[component]
pub fn TableHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes("[&_tr]:border-b", attributes);

    rsx! {
        thead {
            "data-slot": "table-header",
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn TableBody(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes("[&_tr:last-child]:border-0", attributes);

    rsx! {
        tbody {
            "data-slot": "table-body",
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn TableFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes(
        "bg-muted/50 border-t font-medium [&>tr]:last:border-b-0",
        attributes,
    );

    rsx! {
        tfoot {
            "data-slot": "table-footer",
            ..merged,
            {children}
        }
    }
}

/// Table row. `selected` sets `data-state="selected"` for styling.
#[component]
pub fn TableRow(
    #[props(default = false)] selected: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class = if onclick.is_some() {
        "hover:bg-muted/50 data-[state=selected]:bg-muted border-b transition-colors cursor-pointer"
    } else {
        "hover:bg-muted/50 data-[state=selected]:bg-muted border-b transition-colors"
    };
    let merged = merge_class_attributes(class, attributes);

    rsx! {
        tr {
            "data-slot": "table-row",
            "data-state": selected.then_some("selected"),
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {children}
        }
    }
}

/// Column header cell.
#[component]
pub fn TableHead(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes(
        "text-foreground h-10 px-2 text-left align-middle font-medium whitespace-nowrap [&:has([role=checkbox])]:pr-0",
        attributes,
    );

    rsx! {
        th {
            "data-slot": "table-head",
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn TableCell(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes(
        "p-2 align-middle whitespace-nowrap [&:has([role=checkbox])]:pr-0",
        attributes,
    );

    rsx! {
        td {
            "data-slot": "table-cell",
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn TableCaption(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes("text-muted-foreground mt-4 text-sm", attributes);

    rsx! {
        caption {
            "data-slot": "table-caption",
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn table_structure() {
        fn app() -> Element {
            rsx! {
                Table {
                    TableCaption { "Open cases" }
                    TableHeader {
                        TableRow {
                            TableHead { "Case" }
                        }
                    }
                    TableBody {
                        TableRow { selected: true,
                            TableCell { "24-cv-001" }
                        }
                    }
                    TableFooter {
                        TableRow {
                            TableCell { "1 case" }
                        }
                    }
                }
            }
        }
        let html = render(app);
        assert!(html.contains("overflow-x-auto"));
        for tag in ["<table", "<caption", "<thead", "<th", "<tbody", "<td", "<tfoot"] {
            assert!(html.contains(tag), "missing {tag}");
        }
        assert_eq!(html.matches("data-state=\"selected\"").count(), 1);
    }

    #[test]
    fn clickable_rows_get_a_pointer() {
        fn app() -> Element {
            rsx! {
                table {
                    tbody {
                        TableRow { onclick: move |_| {}, TableCell { "x" } }
                    }
                }
            }
        }
        assert!(render(app).contains("cursor-pointer"));
    }
}
