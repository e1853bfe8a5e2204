use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

use crate::cn::apply_class;

#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    apply_class(
        &mut props.attributes,
        "peer inline-flex h-[1.15rem] w-8 shrink-0 items-center rounded-full border border-transparent shadow-xs transition-all outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] disabled:cursor-not-allowed disabled:opacity-50 data-[state=checked]:bg-primary data-[state=unchecked]:bg-input",
    );

    rsx! {
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    apply_class(
        &mut props.attributes,
        "bg-background pointer-events-none block size-4 rounded-full ring-0 transition-transform data-[state=checked]:translate-x-[calc(100%-2px)] data-[state=unchecked]:translate-x-0",
    );

    rsx! {
        prim::SwitchThumb { ..props }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn switch_and_thumb_are_styled() {
        fn app() -> Element {
            rsx! {
                Switch { SwitchThumb {} }
            }
        }
        let html = render(app);
        assert!(html.contains("rounded-full border"));
        assert!(html.contains("bg-background pointer-events-none"));
    }

    #[test]
    fn controlled_switch_reports_its_state() {
        fn on() -> Element {
            rsx! {
                Switch { checked: Some(true), aria_label: "Airplane mode", SwitchThumb {} }
            }
        }
        fn off() -> Element {
            rsx! {
                Switch { checked: Some(false), aria_label: "Airplane mode", SwitchThumb {} }
            }
        }
        let html = render(on);
        assert!(html.contains("role=\"switch\""));
        assert!(html.contains("aria-checked=\"true\""));
        assert!(html.contains("data-state=\"checked\""));
        let html = render(off);
        assert!(html.contains("aria-checked=\"false\""));
        assert!(html.contains("data-state=\"unchecked\""));
    }
}
