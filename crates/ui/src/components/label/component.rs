use dioxus::prelude::*;
use dioxus_primitives::label as prim;

use crate::cn::apply_class;

#[component]
pub fn Label(mut props: prim::LabelProps) -> Element {
    apply_class(
        &mut props.attributes,
        "flex items-center gap-2 text-sm leading-none font-medium select-none group-data-[disabled=true]:pointer-events-none group-data-[disabled=true]:opacity-50 peer-disabled:cursor-not-allowed peer-disabled:opacity-50",
    );

    rsx! {
        prim::Label { ..props }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn label_points_at_its_control() {
        fn app() -> Element {
            rsx! {
                Label { html_for: "email", "Email" }
            }
        }
        let html = render(app);
        assert!(html.starts_with("<label"));
        assert!(html.contains("for=\"email\""));
        assert!(html.contains("font-medium"));
        assert!(html.contains(">Email</label>"));
    }
}
