use dioxus::prelude::*;
use dioxus_primitives::separator as prim;

use crate::cn::apply_class;

/// A thin rule. Horizontal and decorative unless told otherwise.
#[component]
pub fn Separator(mut props: prim::SeparatorProps) -> Element {
    apply_class(
        &mut props.attributes,
        "bg-border shrink-0 data-[orientation=horizontal]:h-px data-[orientation=horizontal]:w-full data-[orientation=vertical]:h-full data-[orientation=vertical]:w-px",
    );

    rsx! {
        prim::Separator { ..props }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn separator_carries_orientation_classes() {
        fn app() -> Element {
            rsx! {
                Separator { class: "my-4" }
            }
        }
        let html = render(app);
        assert!(html.contains("bg-border"));
        assert!(html.contains("my-4"));
    }
}
