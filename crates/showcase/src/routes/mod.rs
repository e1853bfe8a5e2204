pub mod buttons;
pub mod disclosure;
pub mod display;
pub mod forms;
pub mod not_found;
pub mod overview;
pub mod sheet;
pub mod table;
pub mod tokens;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMonitor, LdMoon, LdSun};
use dioxus_free_icons::Icon;
use ui::components::{Button, ButtonSize, ButtonVariant, Separator};
use ui::{use_theme, ThemeMode, VariantKey};

use buttons::Buttons;
use disclosure::Disclosure;
use display::Display;
use forms::Forms;
use not_found::NotFound;
use overview::Overview;
use sheet::SheetStory;
use table::TableStory;
use tokens::Tokens;

/// Story routes, one page per component family.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(ShowcaseLayout)]
    #[route("/")]
    Overview {},
    #[route("/buttons")]
    Buttons {},
    #[route("/display")]
    Display {},
    #[route("/forms")]
    Forms {},
    #[route("/disclosure")]
    Disclosure {},
    #[route("/sheet")]
    SheetStory {},
    #[route("/table")]
    TableStory {},
    #[route("/tokens")]
    Tokens {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const NAV: &[(&str, fn() -> Route)] = &[
    ("Overview", || Route::Overview {}),
    ("Buttons & badges", || Route::Buttons {}),
    ("Display", || Route::Display {}),
    ("Forms", || Route::Forms {}),
    ("Accordion & tooltip", || Route::Disclosure {}),
    ("Sheet", || Route::SheetStory {}),
    ("Data table", || Route::TableStory {}),
    ("Tokens", || Route::Tokens {}),
];

/// The mode after `mode` in the light → dark → system cycle.
fn next_mode(mode: ThemeMode) -> ThemeMode {
    let all = ThemeMode::ALL;
    let idx = all.iter().position(|m| *m == mode).unwrap_or(0);
    all[(idx + 1) % all.len()]
}

#[component]
fn ShowcaseLayout() -> Element {
    let mut theme = use_theme();
    let mode = (theme.mode)();
    let current = use_route::<Route>();

    rsx! {
        div { class: "flex min-h-screen",
            nav { class: "bg-muted/40 flex w-60 shrink-0 flex-col gap-1 border-r p-4",
                div { class: "flex items-center justify-between pb-2",
                    span { class: "text-sm font-semibold", "Design system" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::IconSm,
                        aria_label: "Theme: {mode.display_name()}",
                        title: "Theme: {mode.display_name()}",
                        onclick: move |_| theme.set(next_mode(mode)),
                        {match mode {
                            ThemeMode::Light => rsx! { Icon::<LdSun> { icon: LdSun, width: 16, height: 16 } },
                            ThemeMode::Dark => rsx! { Icon::<LdMoon> { icon: LdMoon, width: 16, height: 16 } },
                            ThemeMode::System => rsx! { Icon::<LdMonitor> { icon: LdMonitor, width: 16, height: 16 } },
                        }}
                    }
                }
                Separator { class: "mb-2" }
                for (label, route) in NAV.iter() {
                    Link {
                        key: "{label}",
                        to: route(),
                        class: if current == route() {
                            "bg-accent text-accent-foreground rounded-md px-3 py-2 text-sm font-medium"
                        } else {
                            "text-muted-foreground hover:bg-accent hover:text-accent-foreground rounded-md px-3 py-2 text-sm"
                        },
                        "{label}"
                    }
                }
            }
            main { class: "flex-1 overflow-y-auto p-8",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_cycle_visits_every_mode() {
        let mut mode = ThemeMode::Light;
        let mut seen = vec![mode];
        for _ in 0..2 {
            mode = next_mode(mode);
            seen.push(mode);
        }
        assert_eq!(seen, vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]);
        assert_eq!(next_mode(ThemeMode::System), ThemeMode::Light);
    }
}
