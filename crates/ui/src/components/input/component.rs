use dioxus::prelude::*;

use crate::cn::merge_class_attributes;

const INPUT_CLASS: &str = "file:text-foreground placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground border-input h-9 w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none file:inline-flex file:h-7 file:border-0 file:bg-transparent file:text-sm file:font-medium disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 md:text-sm focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] aria-invalid:ring-destructive/20 aria-invalid:border-destructive";

/// Single-line text input. The value is owned by the caller.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] invalid: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let merged = merge_class_attributes(INPUT_CLASS, attributes);

    rsx! {
        input {
            "data-slot": "input",
            r#type: input_type,
            value,
            placeholder,
            disabled,
            aria_invalid: invalid.then_some("true"),
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}
