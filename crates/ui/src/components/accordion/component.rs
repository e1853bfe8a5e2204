use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronDown;
use dioxus_free_icons::Icon;
use dioxus_primitives::accordion as prim;

use crate::cn::apply_class;

#[component]
pub fn Accordion(mut props: prim::AccordionProps) -> Element {
    apply_class(&mut props.attributes, "w-full");

    rsx! {
        prim::Accordion { ..props }
    }
}

#[component]
pub fn AccordionItem(mut props: prim::AccordionItemProps) -> Element {
    apply_class(&mut props.attributes, "border-b last:border-b-0");

    rsx! {
        prim::AccordionItem { ..props }
    }
}

/// Header button. A chevron is appended that flips while open.
#[component]
pub fn AccordionTrigger(mut props: prim::AccordionTriggerProps) -> Element {
    apply_class(
        &mut props.attributes,
        "flex flex-1 w-full items-start justify-between gap-4 rounded-md py-4 text-left text-sm font-medium transition-all outline-none hover:underline focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] disabled:pointer-events-none disabled:opacity-50 [&[data-state=open]>svg]:rotate-180",
    );

    let original_children = props.children;
    props.children = rsx! {
        {original_children}
        Icon::<LdChevronDown> {
            icon: LdChevronDown,
            width: 16,
            height: 16,
            class: "text-muted-foreground pointer-events-none size-4 shrink-0 translate-y-0.5 transition-transform duration-200",
        }
    };

    rsx! {
        prim::AccordionTrigger { ..props }
    }
}

#[component]
pub fn AccordionContent(mut props: prim::AccordionContentProps) -> Element {
    apply_class(
        &mut props.attributes,
        "overflow-hidden text-sm pt-0 pb-4 data-[state=closed]:animate-accordion-up data-[state=open]:animate-accordion-down",
    );

    rsx! {
        prim::AccordionContent { ..props }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn default_open_item_is_expanded() {
        fn app() -> Element {
            rsx! {
                Accordion {
                    AccordionItem { index: 0, default_open: true,
                        AccordionTrigger { "Who can file?" }
                        AccordionContent { "Registered attorneys." }
                    }
                    AccordionItem { index: 1,
                        AccordionTrigger { "When is it due?" }
                        AccordionContent { "Within 14 days." }
                    }
                }
            }
        }
        let html = render(app);
        assert_eq!(html.matches("aria-expanded=\"true\"").count(), 1);
        assert_eq!(html.matches("aria-expanded=\"false\"").count(), 1);
        assert!(html.contains("Who can file?"));
        // One chevron per trigger.
        assert_eq!(html.matches("<svg").count(), 2);
        assert!(html.contains("border-b last:border-b-0"));
    }
}
