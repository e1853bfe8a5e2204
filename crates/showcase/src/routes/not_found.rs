use dioxus::prelude::*;
use ui::components::{Alert, AlertDescription, AlertTitle, AlertVariant};

use crate::routes::Route;

/// 404 page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "mx-auto flex max-w-md flex-col gap-4 p-8",
            Alert { variant: AlertVariant::Destructive,
                AlertTitle { "No story here" }
                AlertDescription {
                    p {
                        "Nothing is registered at "
                        code { "{path}" }
                        "."
                    }
                }
            }
            Link { to: Route::Overview {}, class: "text-primary text-sm underline-offset-4 hover:underline",
                "Back to the overview"
            }
        }
    }
}
