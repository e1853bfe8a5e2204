use dioxus::prelude::*;

use crate::cn::merge_class_attributes;

/// Loading placeholder with an animated pulse. Size it with classes.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let merged = merge_class_attributes("bg-accent animate-pulse rounded-md", attributes);

    rsx! {
        div {
            "data-slot": "skeleton",
            aria_hidden: "true",
            ..merged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{first_class, render};
    use pretty_assertions::assert_eq;

    #[test]
    fn skeleton_takes_caller_shape() {
        fn app() -> Element {
            rsx! {
                Skeleton { class: "h-4 w-48 rounded-full" }
            }
        }
        let html = render(app);
        assert_eq!(first_class(&html), "bg-accent animate-pulse h-4 w-48 rounded-full");
        assert!(html.contains("aria-hidden=\"true\""));
    }
}
