use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./status_page.css") }

        div { class: "status-page",
            div { class: "status-card",
                div { class: "status-code", "404" }
                h1 { class: "status-title", "Page Not Found" }
                p { class: "status-message",
                    "The page "
                    code { "{path}" }
                    " does not exist."
                }
                Link { to: Route::Home {}, class: "status-link", "Back to Dashboard" }
            }
        }
    }
}
