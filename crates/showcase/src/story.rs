use dioxus::prelude::*;
use ui::components::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// One titled example on a story page.
#[component]
pub fn Story(title: String, #[props(default)] description: String, children: Element) -> Element {
    rsx! {
        Card { class: "gap-4",
            CardHeader {
                CardTitle { "{title}" }
                if !description.is_empty() {
                    CardDescription { "{description}" }
                }
            }
            CardContent { class: "flex flex-wrap items-center gap-3", {children} }
        }
    }
}

/// Page heading plus the stories below it.
#[component]
pub fn StoryPage(title: String, summary: String, children: Element) -> Element {
    rsx! {
        section { class: "flex flex-col gap-6",
            header { class: "flex flex-col gap-2",
                ui::components::Typography { variant: ui::components::TypographyVariant::H2, "{title}" }
                ui::components::Typography { variant: ui::components::TypographyVariant::Muted, "{summary}" }
            }
            {children}
        }
    }
}
