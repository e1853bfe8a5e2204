use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

use crate::cn::apply_class;

pub use dioxus_primitives::avatar::AvatarState;

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    apply_class(
        &mut props.attributes,
        "relative flex size-8 shrink-0 overflow-hidden rounded-full",
    );

    rsx! {
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarImage(mut props: prim::AvatarImageProps) -> Element {
    apply_class(&mut props.attributes, "aspect-square size-full");

    rsx! {
        prim::AvatarImage { ..props }
    }
}

/// Shown until the image loads, or instead of it when it fails.
#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    apply_class(
        &mut props.attributes,
        "bg-muted flex size-full items-center justify-center rounded-full text-sm",
    );

    rsx! {
        prim::AvatarFallback { ..props }
    }
}
