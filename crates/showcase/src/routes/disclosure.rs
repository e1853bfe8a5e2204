use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdInfo;
use dioxus_free_icons::Icon;
use ui::components::{
    Accordion, AccordionContent, AccordionItem, AccordionTrigger, Button, ButtonSize,
    ButtonVariant, ContentSide, Tooltip, TooltipContent, TooltipTrigger,
};

use crate::story::{Story, StoryPage};

const FAQ: &[(&str, &str)] = &[
    (
        "Is it accessible?",
        "Yes. Keyboard handling and ARIA state come from the primitives.",
    ),
    (
        "Is it styled?",
        "Yes. Classes are resolved from variant tables and theme tokens.",
    ),
    (
        "Can I override the styles?",
        "Pass a class; conflicting defaults are dropped in favor of yours.",
    ),
];

const SIDES: [(ContentSide, &str); 4] = [
    (ContentSide::Top, "top"),
    (ContentSide::Right, "right"),
    (ContentSide::Bottom, "bottom"),
    (ContentSide::Left, "left"),
];

#[component]
pub fn Disclosure() -> Element {
    rsx! {
        StoryPage {
            title: "Accordion & tooltip",
            summary: "Open state, focus and timing belong to the primitives.",
            Story { title: "Accordion",
                Accordion { class: "max-w-lg",
                    for (index, (question, answer)) in FAQ.iter().enumerate() {
                        AccordionItem { key: "{index}", index,
                            AccordionTrigger { "{question}" }
                            AccordionContent { "{answer}" }
                        }
                    }
                }
            }
            Story { title: "Tooltip",
                for (side, name) in SIDES {
                    Tooltip { key: "{name}",
                        TooltipTrigger {
                            Button { variant: ButtonVariant::Outline, size: ButtonSize::Icon, aria_label: "More info",
                                Icon::<LdInfo> { icon: LdInfo, width: 16, height: 16 }
                            }
                        }
                        TooltipContent { side, "Shown on the {name} side" }
                    }
                }
            }
        }
    }
}
