use std::collections::HashMap;

use api::ApiClient;
use dioxus::prelude::*;
use shared_types::{AppErrorKind, LoginRequest, Role, ValidateRequest};
use shared_ui::{Button, Card, CardContent, CardHeader, Form, FormAlert, Input};

use crate::routes::{dashboard_route, Route};
use crate::session::use_session;

/// Where a visitor with a session lands instead of the sign-in form.
///
/// This is the only navigation out of the page: a successful sign-in sets
/// the current role, and the next render follows it here.
pub fn signed_in_redirect(hydrated: bool, current: Option<Role>) -> Option<Route> {
    if !hydrated {
        return None;
    }
    current.map(dashboard_route)
}

/// Sign-in page. On success the first granted role becomes active and the
/// browser moves to that role's dashboard.
#[component]
pub fn Login() -> Element {
    let mut state = use_session();
    let api: ApiClient = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if let Some(target) = signed_in_redirect(state.is_hydrated(), state.current_role()) {
        navigator().replace(target);
    }

    let handle_login = move |_: FormEvent| {
        let api = api.clone();
        async move {
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let req = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            if let Err(e) = req.validate_request() {
                field_errors.set(e.field_errors);
                return;
            }

            loading.set(true);
            let outcome = match api.login(&req).await {
                Ok(roles) => state.login(roles),
                Err(e) => Err(e),
            };
            loading.set(false);

            match outcome {
                Ok(role) => {
                    tracing::info!(%role, "Signed in");
                }
                Err(e) if e.kind == AppErrorKind::ValidationError && !e.field_errors.is_empty() => {
                    field_errors.set(e.field_errors);
                }
                Err(e) => {
                    tracing::warn!(kind = %e.kind, "Login rejected");
                    error_msg.set(Some(e.user_message()));
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    title: "Sign In",
                    description: "Sign in to the clinic portal".to_string(),
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        FormAlert { message: err }
                    }
                    Form { onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@clinic.com",
                            value: email(),
                            error: field_errors.read().get("email").cloned(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            error: field_errors.read().get("password").cloned(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            loading: loading(),
                            loading_label: "Signing in...",
                            "Sign In"
                        }
                    }
                    p { class: "auth-switch",
                        "No account yet? "
                        Link { to: Route::Register {}, "Register" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_the_stored_session() {
        assert_eq!(signed_in_redirect(false, Some(Role::Admin)), None);
    }

    #[test]
    fn signed_out_visitors_stay_on_the_form() {
        assert_eq!(signed_in_redirect(true, None), None);
    }

    #[test]
    fn sign_in_lands_on_the_active_dashboard() {
        assert_eq!(
            signed_in_redirect(true, Some(Role::Receptionist)),
            Some(Route::ReceptionistDashboard {})
        );
    }
}
