use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

use crate::cn::apply_class;

#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    apply_class(
        &mut props.attributes,
        "bg-primary/20 relative h-2 w-full overflow-hidden rounded-full",
    );

    rsx! {
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    apply_class(
        &mut props.attributes,
        "bg-primary h-full w-full flex-1 transition-all",
    );

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn progress_exposes_its_value() {
        fn app() -> Element {
            rsx! {
                Progress { value: Some(60.0), aria_label: "Upload",
                    ProgressIndicator {}
                }
            }
        }
        let html = render(app);
        assert!(html.contains("role=\"progressbar\""));
        // Accepts both `60` and `60.0`.
        assert!(html.contains("aria-valuenow=\"60"));
        assert!(html.contains("bg-primary/20"));
        assert!(html.contains("bg-primary h-full"));
    }
}
