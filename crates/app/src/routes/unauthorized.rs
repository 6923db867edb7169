use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLock;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant};

use crate::routes::Route;
use crate::session::use_session;

/// Shown when the signed-in roles cannot open any dashboard.
#[component]
pub fn Unauthorized() -> Element {
    let mut state = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./status_page.css") }

        div { class: "status-page",
            div { class: "status-card",
                Icon::<LdLock> { icon: LdLock, width: 32, height: 32 }
                h1 { class: "status-title", "Access Denied" }
                p { class: "status-message",
                    "Your account does not have access to any clinic pages. Contact an administrator to have a role assigned."
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        state.logout();
                        navigator().replace(Route::Login {});
                    },
                    "Back to Sign In"
                }
            }
        }
    }
}
