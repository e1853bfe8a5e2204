use dioxus::prelude::*;
use dioxus_primitives::tooltip as prim;

use crate::cn::apply_class;

pub use dioxus_primitives::{ContentAlign, ContentSide};

#[component]
pub fn Tooltip(mut props: prim::TooltipProps) -> Element {
    apply_class(&mut props.attributes, "relative inline-block");

    rsx! {
        prim::Tooltip { ..props }
    }
}

#[component]
pub fn TooltipTrigger(mut props: prim::TooltipTriggerProps) -> Element {
    apply_class(&mut props.attributes, "inline-flex");

    rsx! {
        prim::TooltipTrigger { ..props }
    }
}

#[component]
pub fn TooltipContent(mut props: prim::TooltipContentProps) -> Element {
    apply_class(
        &mut props.attributes,
        "bg-primary text-primary-foreground absolute z-50 w-fit rounded-md px-3 py-1.5 text-xs text-balance animate-in fade-in-0 zoom-in-95",
    );

    rsx! {
        prim::TooltipContent { ..props }
    }
}
