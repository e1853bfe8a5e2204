use dioxus::prelude::*;
use design_tokens::{TokenMap, BORDER_RADIUS, DARK, LIGHT, PALETTES, SPACING};
use ui::components::{Typography, TypographyVariant};

use crate::story::{Story, StoryPage};

fn token_rows(map: TokenMap) -> Element {
    rsx! {
        dl { class: "grid w-full grid-cols-[8rem_1fr] gap-x-4 gap-y-1 text-sm",
            for (key, value) in map.iter() {
                div { key: "{key}", class: "contents",
                    dt { class: "font-mono", "{map.name()}-{key}" }
                    dd { class: "text-muted-foreground font-mono", "{value}" }
                }
            }
        }
    }
}

#[component]
pub fn Tokens() -> Element {
    let json = match design_tokens::export::to_json() {
        Ok(json) => json,
        Err(err) => {
            tracing::error!(%err, "token export failed");
            format!("export failed: {err}")
        }
    };

    rsx! {
        StoryPage {
            title: "Tokens",
            summary: "Raw scales and the semantic roles components are styled with.",
            Story { title: "Palettes",
                div { class: "flex w-full flex-col gap-2",
                    for scale in PALETTES.iter() {
                        div { key: "{scale.name}", class: "flex items-center gap-2",
                            span { class: "w-16 text-sm font-medium", "{scale.name}" }
                            for (step, hex) in scale.iter() {
                                div {
                                    key: "{step}",
                                    class: "size-8 rounded-sm border",
                                    title: "{scale.name}-{step} {hex}",
                                    style: "background-color: {hex}",
                                }
                            }
                        }
                    }
                }
            }
            for palette in [LIGHT, DARK] {
                Story {
                    key: "{palette.theme}",
                    title: "Semantic roles ({palette.theme})",
                    div { class: "grid w-full grid-cols-2 gap-2 md:grid-cols-4",
                        for (role, hex) in palette.colors.iter() {
                            div { key: "{role}", class: "flex items-center gap-2 text-sm",
                                span { class: "size-5 rounded-sm border", style: "background-color: {hex}" }
                                span { class: "font-mono", "{role}" }
                            }
                        }
                    }
                }
            }
            Story { title: "Spacing", {token_rows(SPACING)} }
            Story { title: "Radius", {token_rows(BORDER_RADIUS)} }
            Story { title: "JSON export",
                Typography { variant: TypographyVariant::Muted, "Served to external tooling as-is." }
                pre { class: "bg-muted max-h-96 w-full overflow-auto rounded-md p-4 text-xs", "{json}" }
            }
        }
    }
}
