use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowRight, LdPlus};
use dioxus_free_icons::Icon;
use ui::components::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant};
use ui::VariantKey;

use crate::story::{Story, StoryPage};

#[component]
pub fn Buttons() -> Element {
    let mut clicks = use_signal(|| 0u32);

    rsx! {
        StoryPage {
            title: "Buttons & badges",
            summary: "Variant and size tables resolved through the class merger.",
            Story { title: "Variants",
                for variant in ButtonVariant::ALL.iter().copied() {
                    Button { key: "{variant.key()}", variant, "{variant.key()}" }
                }
            }
            Story { title: "Sizes",
                for size in ButtonSize::ALL.iter().copied() {
                    if size.key().starts_with("icon") {
                        Button {
                            key: "{size.key()}",
                            variant: ButtonVariant::Outline,
                            size,
                            aria_label: "Add ({size.key()})",
                            Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        }
                    } else {
                        Button { key: "{size.key()}", size, "{size.key()}" }
                    }
                }
            }
            Story {
                title: "Disabled",
                description: "Clicks are ignored and the state is announced.",
                Button { onclick: move |_| clicks += 1, "Clicked {clicks} times" }
                Button { disabled: true, onclick: move |_| clicks += 1, "Disabled" }
            }
            Story {
                title: "Rendered as a link",
                description: "The button's classes applied to an anchor through the as_child slot.",
                Button {
                    variant: ButtonVariant::Secondary,
                    as_child: Callback::new(|attrs: Vec<Attribute>| rsx! {
                        a { href: "#variants", ..attrs,
                            "Jump to variants"
                            Icon::<LdArrowRight> { icon: LdArrowRight, width: 16, height: 16 }
                        }
                    }),
                }
            }
            Story { title: "Caller overrides",
                Button { class: "bg-violet-600 hover:bg-violet-700 rounded-full", "Custom color" }
            }
            Story { title: "Badges",
                for variant in BadgeVariant::ALL.iter().copied() {
                    Badge { key: "{variant.key()}", variant, "{variant.key()}" }
                }
            }
        }
    }
}
