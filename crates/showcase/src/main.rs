use dioxus::prelude::*;

mod routes;
mod story;

use routes::Route;

const TAILWIND: Asset = asset!("/assets/tailwind.css");

/// Config file read at startup; missing or invalid files fall back to the
/// library defaults.
const CONFIG_PATH: &str = "showcase.toml";

fn main() {
    dioxus::logger::initialize_default();
    ui::load_ui_config(CONFIG_PATH);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND }
        ui::ThemeProvider {
            Router::<Route> {}
        }
    }
}
