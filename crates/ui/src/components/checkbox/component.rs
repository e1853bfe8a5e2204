use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCheck;
use dioxus_free_icons::Icon;
use dioxus_primitives::checkbox as prim;

use crate::cn::{apply_class, merge_class_attributes};

pub use prim::CheckboxState;

#[component]
pub fn Checkbox(mut props: prim::CheckboxProps) -> Element {
    apply_class(
        &mut props.attributes,
        "peer border-input size-4 shrink-0 rounded-[4px] border shadow-xs transition-shadow outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] disabled:cursor-not-allowed disabled:opacity-50 data-[state=checked]:bg-primary data-[state=checked]:text-primary-foreground data-[state=checked]:border-primary",
    );

    rsx! {
        prim::Checkbox { ..props }
    }
}

/// Check mark shown while the box is checked. Children replace the icon.
#[component]
pub fn CheckboxIndicator(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = merge_class_attributes(
        "flex items-center justify-center text-current transition-none",
        attributes,
    );

    let indicator_children = if children.is_ok() {
        children
    } else {
        rsx! {
            Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14, class: "size-3.5" }
        }
    };

    rsx! {
        prim::CheckboxIndicator {
            attributes: attrs,
            {indicator_children}
        }
    }
}
