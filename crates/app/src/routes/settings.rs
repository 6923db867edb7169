use std::collections::HashMap;

use api::ApiClient;
use dioxus::prelude::*;
use shared_types::{ProfileUpdateRequest, Role};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, Form, FormAlert,
    FormSuccess, Input, PageHeader,
};

use crate::routes::{dashboard_route, Route};
use crate::session::use_session;

/// Account settings: active role, profile details, sign out.
#[component]
pub fn SettingsPage(role: Role) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        PageHeader {
            title: "Settings",
            subtitle: format!("Signed in as {}", role.display_name()),
        }

        div { class: "settings-grid",
            SessionCard { role }
            ProfileForm {}
        }
    }
}

#[component]
fn SessionCard(role: Role) -> Element {
    let mut state = use_session();
    let roles = state.session().roles().to_vec();

    rsx! {
        Card {
            CardHeader {
                title: "Session",
                description: "Roles on this account. Switching changes which pages you can open.".to_string(),
            }
            CardContent {
                ul { class: "settings-roles",
                    for r in roles.iter().copied() {
                        li { key: "{r.as_str()}",
                            span { "{r.display_name()}" }
                            if r == role {
                                Badge { variant: BadgeVariant::Primary, "Active" }
                            } else {
                                Button {
                                    variant: ButtonVariant::Link,
                                    onclick: move |_| {
                                        if state.switch_role(r) {
                                            navigator().push(dashboard_route(r));
                                        }
                                    },
                                    "Switch to {r.display_name()}"
                                }
                            }
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| {
                        state.logout();
                        navigator().replace(Route::Login {});
                    },
                    "Sign Out"
                }
            }
        }
    }
}

#[component]
fn ProfileForm() -> Element {
    let api: ApiClient = use_context();
    let mut form = use_signal(ProfileUpdateRequest::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut saved = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    let handle_submit = move |_: FormEvent| {
        let api = api.clone();
        async move {
            error_msg.set(None);
            saved.set(false);
            field_errors.set(HashMap::new());

            loading.set(true);
            let result = api.update_profile(&form()).await;
            loading.set(false);

            match result {
                Ok(user) => {
                    let phone = form.read().phone.clone();
                    form.set(ProfileUpdateRequest {
                        name: user.name,
                        email: user.email,
                        phone,
                    });
                    saved.set(true);
                }
                Err(e) if !e.field_errors.is_empty() => field_errors.set(e.field_errors),
                Err(e) => error_msg.set(Some(e.user_message())),
            }
        }
    };

    rsx! {
        Card {
            CardHeader { title: "Profile" }
            CardContent {
                if saved() {
                    FormSuccess { "Profile updated." }
                }
                if let Some(err) = error_msg() {
                    FormAlert { message: err }
                }
                Form { onsubmit: handle_submit,
                    Input {
                        label: "Name",
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
                        label: "Phone",
                        input_type: "tel",
                        placeholder: "10 digits",
                        value: form.read().phone.clone(),
                        error: error_for("phone"),
                        on_input: move |e: FormEvent| form.write().phone = e.value(),
                    }
                    Button { button_type: "submit", loading: loading(), loading_label: "Saving...", "Save Profile" }
                }
            }
        }
    }
}
