use api::ApiClient;
use dioxus::prelude::*;

mod format_helpers;
mod routes;
mod session;

use routes::Route;
use session::{SessionHydrator, SessionState};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ApiClient::from_env);
    use_context_provider(SessionState::new);

    rsx! {
        document::Title { "Dental Clinic" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SessionHydrator {}
        Router::<Route> {}
    }
}
