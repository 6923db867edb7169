use std::collections::HashMap;

use api::ApiClient;
use dioxus::prelude::*;
use shared_types::role::ALL_ROLES;
use shared_types::{RegisterRequest, ValidateRequest};
use shared_ui::{
    Button, Card, CardContent, CardHeader, Form, FormAlert, FormSelect, FormSuccess, Input,
};

use crate::routes::Route;

/// Account registration.
#[component]
pub fn Register() -> Element {
    let api: ApiClient = use_context();
    let mut form = use_signal(|| RegisterRequest {
        role: "patient".to_string(),
        ..Default::default()
    });
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut registered = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    let handle_submit = move |_: FormEvent| {
        let api = api.clone();
        async move {
            error_msg.set(None);
            field_errors.set(HashMap::new());
            let req = form();
            if let Err(e) = req.validate_request() {
                field_errors.set(e.field_errors);
                return;
            }

            loading.set(true);
            let result = api.register(&req).await;
            loading.set(false);

            match result {
                Ok(()) => registered.set(true),
                Err(e) if !e.field_errors.is_empty() => field_errors.set(e.field_errors),
                Err(e) => error_msg.set(Some(e.user_message())),
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader { title: "Create Account" }
                CardContent {
                    if registered() {
                        FormSuccess {
                            "Registration successful. "
                            Link { to: Route::Login {}, "Sign in" }
                        }
                    } else {
                        if let Some(err) = error_msg() {
                            FormAlert { message: err }
                        }
                        Form { onsubmit: handle_submit,
                            Input {
                                label: "Full Name",
                                value: form.read().name.clone(),
                                error: error_for("name"),
                                on_input: move |e: FormEvent| form.write().name = e.value(),
                            }
                            Input {
                                label: "Email",
                                input_type: "email",
                                value: form.read().email.clone(),
                                error: error_for("email"),
                                on_input: move |e: FormEvent| form.write().email = e.value(),
                            }
                            Input {
                                label: "Password",
                                input_type: "password",
                                value: form.read().password.clone(),
                                error: error_for("password"),
                                on_input: move |e: FormEvent| form.write().password = e.value(),
                            }
                            Input {
                                label: "Confirm Password",
                                input_type: "password",
                                value: form.read().confirm_password.clone(),
                                error: error_for("confirm_password"),
                                on_input: move |e: FormEvent| form.write().confirm_password = e.value(),
                            }
                            FormSelect {
                                label: "Role",
                                value: form.read().role.clone(),
                                error: error_for("role"),
                                onchange: move |e: Event<FormData>| form.write().role = e.value(),
                                for role in ALL_ROLES.iter() {
                                    option { value: role.as_str(), "{role.display_name()}" }
                                }
                            }
                            Button {
                                button_type: "submit",
                                loading: loading(),
                                loading_label: "Registering...",
                                "Register"
                            }
                        }
                        p { class: "auth-switch",
                            "Already registered? "
                            Link { to: Route::Login {}, "Sign in" }
                        }
                    }
                }
            }
        }
    }
}
