use dioxus::prelude::*;

use crate::cn::merge_class_attributes;

/// A bordered content container.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes(
        "bg-card text-card-foreground flex flex-col gap-6 rounded-xl border py-6 shadow-sm",
        attributes,
    );

    rsx! {
        div {
            "data-slot": "card",
            ..merged,
            {children}
        }
    }
}

/// Header section of a Card. A `CardAction` inside it is pinned to the
/// top-right corner.
#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes(
        "grid auto-rows-min grid-rows-[auto_auto] items-start gap-1.5 px-6 has-data-[slot=card-action]:grid-cols-[1fr_auto]",
        attributes,
    );

    rsx! {
        div {
            "data-slot": "card-header",
            ..merged,
            {children}
        }
    }
}

/// Title element within a CardHeader.
#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes("leading-none font-semibold", attributes);

    rsx! {
        h3 {
            "data-slot": "card-title",
            ..merged,
            {children}
        }
    }
}

/// Description text within a CardHeader.
#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes("text-muted-foreground text-sm", attributes);

    rsx! {
        p {
            "data-slot": "card-description",
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardAction(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes(
        "col-start-2 row-span-2 row-start-1 self-start justify-self-end",
        attributes,
    );

    rsx! {
        div {
            "data-slot": "card-action",
            ..merged,
            {children}
        }
    }
}

/// Main content area of a Card.
#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes("px-6", attributes);

    rsx! {
        div {
            "data-slot": "card-content",
            ..merged,
            {children}
        }
    }
}

/// Footer section of a Card.
#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes("flex items-center px-6", attributes);

    rsx! {
        div {
            "data-slot": "card-footer",
            ..merged,
            {children}
        }
    }
}
