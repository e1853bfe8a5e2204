use dioxus::prelude::*;
use ui::components::{
    Badge, BadgeVariant, ButtonVariant, Card, CardDescription, CardHeader, CardTitle, Typography,
    TypographyVariant,
};
use ui::VariantKey;

use crate::routes::Route;

const SECTIONS: &[(&str, &str, fn() -> Route)] = &[
    ("Buttons & badges", "Every variant and size, disabled state and link rendering.", || Route::Buttons {}),
    ("Display", "Cards, alerts, avatars, skeletons, separators, typography and tables.", || Route::Display {}),
    ("Forms", "Inputs, text areas, labels, switches, checkboxes, selects and progress.", || Route::Forms {}),
    ("Accordion & tooltip", "Disclosure widgets delegated to the primitives.", || Route::Disclosure {}),
    ("Sheet", "Edge panels with focus return, scroll lock and Escape to close.", || Route::SheetStory {}),
    ("Data table", "Sorting, filtering, pagination and row selection.", || Route::TableStory {}),
    ("Tokens", "Color scales, spacing and the semantic palettes.", || Route::Tokens {}),
];

#[component]
pub fn Overview() -> Element {
    let variant_count = ButtonVariant::ALL.len();

    rsx! {
        div { class: "flex flex-col gap-8",
            header { class: "flex flex-col gap-2",
                Typography { variant: TypographyVariant::H1, "Component showcase" }
                Typography { variant: TypographyVariant::Lead,
                    "Live examples of every component, rendered with the configured theme."
                }
                div { class: "flex gap-2",
                    Badge { "{variant_count} button variants" }
                    Badge { variant: BadgeVariant::Secondary, "Dioxus" }
                }
            }
            div { class: "grid gap-4 md:grid-cols-2 xl:grid-cols-3",
                for (title, description, route) in SECTIONS.iter() {
                    Link { key: "{title}", to: route(), class: "group",
                        Card { class: "h-full transition-colors group-hover:border-ring",
                            CardHeader {
                                CardTitle { "{title}" }
                                CardDescription { "{description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
