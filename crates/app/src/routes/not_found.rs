use dioxus::prelude::*;

use crate::routes::Route;

/// 404 Not Found page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Nothing to select here" }
                p { class: "not-found-message",
                    code { "{path}" }
                    " is not part of the demo."
                }
                Link { to: Route::Demo {},
                    class: "not-found-link",
                    "Back to the demo"
                }
            }
        }
    }
}
