use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;

use crate::components::button::{Button, ButtonVariant};

/// Inline failure message. Shows a Retry button when `on_retry` is set.
#[component]
pub fn ErrorState(
    message: String,
    #[props(default)] on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "error-state", role: "alert",
            Icon::<LdShield> { icon: LdShield, width: 20, height: 20 }
            p { class: "error-state-message", "{message}" }
            if let Some(retry) = on_retry {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
