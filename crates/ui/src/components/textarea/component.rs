use dioxus::prelude::*;

use crate::cn::merge_class_attributes;

const TEXTAREA_CLASS: &str = "border-input placeholder:text-muted-foreground flex field-sizing-content min-h-16 w-full rounded-md border bg-transparent px-3 py-2 text-base shadow-xs transition-[color,box-shadow] outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] aria-invalid:ring-destructive/20 aria-invalid:border-destructive disabled:cursor-not-allowed disabled:opacity-50 md:text-sm";

/// Multi-line text input. The value is owned by the caller.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] invalid: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let merged = merge_class_attributes(TEXTAREA_CLASS, attributes);

    rsx! {
        textarea {
            "data-slot": "textarea",
            value,
            placeholder,
            disabled,
            aria_invalid: invalid.then_some("true"),
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{first_class, render};

    #[test]
    fn min_height_can_be_overridden() {
        fn app() -> Element {
            rsx! {
                Textarea { class: "min-h-32", placeholder: "Notes" }
            }
        }
        let html = render(app);
        let class = first_class(&html);
        assert!(html.starts_with("<textarea"));
        assert!(class.contains("min-h-32"));
        assert!(!class.contains("min-h-16"));
        assert!(html.contains("placeholder=\"Notes\""));
    }
}
