use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdChevronDown};
use dioxus_free_icons::Icon;
use dioxus_primitives::select as prim;

use crate::cn::{apply_class, merge_class_attributes};

#[component]
pub fn Select<T: Clone + PartialEq + 'static>(mut props: prim::SelectProps<T>) -> Element {
    apply_class(&mut props.attributes, "relative inline-block");

    rsx! {
        prim::Select { ..props }
    }
}

/// Button that opens the list. A chevron is appended after the value.
#[component]
pub fn SelectTrigger(mut props: prim::SelectTriggerProps) -> Element {
    apply_class(
        &mut props.attributes,
        "border-input data-[placeholder]:text-muted-foreground flex w-fit items-center justify-between gap-2 rounded-md border bg-transparent px-3 py-2 h-9 text-sm whitespace-nowrap shadow-xs transition-[color,box-shadow] outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] disabled:cursor-not-allowed disabled:opacity-50",
    );

    let original_children = props.children;
    props.children = rsx! {
        {original_children}
        Icon::<LdChevronDown> { icon: LdChevronDown, width: 16, height: 16, class: "size-4 opacity-50" }
    };

    rsx! {
        prim::SelectTrigger { ..props }
    }
}

#[component]
pub fn SelectValue(mut props: prim::SelectValueProps) -> Element {
    apply_class(&mut props.attributes, "line-clamp-1 flex items-center gap-2");

    rsx! {
        prim::SelectValue { ..props }
    }
}

#[component]
pub fn SelectContent(mut props: prim::SelectListProps) -> Element {
    apply_class(
        &mut props.attributes,
        "bg-popover text-popover-foreground absolute z-50 mt-1 max-h-96 min-w-[8rem] overflow-x-hidden overflow-y-auto rounded-md border p-1 shadow-md",
    );

    rsx! {
        prim::SelectList { ..props }
    }
}

#[component]
pub fn SelectItem<T: Clone + PartialEq + 'static>(mut props: prim::SelectOptionProps<T>) -> Element {
    apply_class(
        &mut props.attributes,
        "focus:bg-accent focus:text-accent-foreground relative flex w-full cursor-default items-center gap-2 rounded-sm py-1.5 pr-8 pl-2 text-sm outline-hidden select-none data-[disabled=true]:pointer-events-none data-[disabled=true]:opacity-50",
    );

    rsx! {
        prim::SelectOption { ..props }
    }
}

#[component]
pub fn SelectGroup(mut props: prim::SelectGroupProps) -> Element {
    apply_class(&mut props.attributes, "p-0");

    rsx! {
        prim::SelectGroup { ..props }
    }
}

#[component]
pub fn SelectGroupLabel(mut props: prim::SelectGroupLabelProps) -> Element {
    apply_class(&mut props.attributes, "text-muted-foreground px-2 py-1.5 text-xs");

    rsx! {
        prim::SelectGroupLabel { ..props }
    }
}

/// Check mark on the selected item.
#[component]
pub fn SelectItemIndicator() -> Element {
    rsx! {
        span { class: "absolute right-2 flex size-3.5 items-center justify-center",
            prim::SelectItemIndicator {
                Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14, class: "size-4" }
            }
        }
    }
}

#[component]
pub fn SelectSeparator(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let merged = merge_class_attributes("bg-border pointer-events-none -mx-1 my-1 h-px", attributes);

    rsx! {
        div {
            role: "separator",
            aria_orientation: "horizontal",
            ..merged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn trigger_is_a_styled_button_with_chevron() {
        fn app() -> Element {
            rsx! {
                Select::<String> { placeholder: "Pick a district",
                    SelectTrigger { class: "w-48",
                        SelectValue {}
                    }
                    SelectContent {
                        SelectGroup {
                            SelectGroupLabel { "Districts" }
                            SelectItem::<String> { value: "sdny".to_string(), index: 0usize, "S.D.N.Y." }
                        }
                        SelectSeparator {}
                    }
                }
            }
        }
        let html = render(app);
        assert!(html.contains("<button"));
        assert!(html.contains("w-48"));
        assert!(!html.contains("w-fit"));
        assert!(html.contains("<svg"));
        assert!(html.contains("relative inline-block"));
    }

    #[test]
    fn separator_is_horizontal() {
        fn app() -> Element {
            rsx! {
                SelectSeparator {}
            }
        }
        let html = render(app);
        assert!(html.contains("role=\"separator\""));
        assert!(html.contains("aria-orientation=\"horizontal\""));
    }
}
