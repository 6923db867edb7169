use std::collections::HashMap;

use api::ApiClient;
use dioxus::prelude::*;
use shared_types::{Role, RoleAssignmentRequest, User, UserManagementRequest, ALL_ROLES};
use shared_ui::{
    Badge, BadgeVariant, Button, Card, CardContent, CardHeader, DataTable, DataTableBody,
    DataTableCell, DataTableEmpty, DataTableHeader, DataTableRow, ErrorState, Form, FormAlert,
    FormSelect, FormSuccess, Input, PageHeader, SkeletonRows,
};

fn role_label(key: &str) -> String {
    Role::parse(key)
        .map(|r| r.display_name().to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Toggle `role` in a role key list, keeping the canonical role order.
fn toggle_role(roles: &[String], role: Role) -> Vec<String> {
    ALL_ROLES
        .iter()
        .filter(|r| {
            let present = roles.iter().any(|k| Role::parse(k) == Some(**r));
            if **r == role {
                !present
            } else {
                present
            }
        })
        .map(|r| r.as_str().to_string())
        .collect()
}

/// Admin user management: account list, new accounts, role assignment.
#[component]
pub fn UserManagementPage() -> Element {
    let api: ApiClient = use_context();

    let list_api = api.clone();
    let mut users = use_resource(move || {
        let api = list_api.clone();
        async move { api.list_users().await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./users.css") }

        PageHeader {
            title: "User Management",
            subtitle: "Accounts and role assignments",
        }

        Card {
            CardContent {
                match &*users.read() {
                    Some(Ok(list)) => rsx! { UserTable { users: list.clone() } },
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Failed to load users");
                        rsx! {
                            ErrorState {
                                message: "Error loading users. Please try again.",
                                on_retry: move |_| users.restart(),
                            }
                        }
                    }
                    None => rsx! { SkeletonRows {} },
                }
            }
        }

        div { class: "users-forms",
            CreateUserForm { on_saved: move |_| users.restart() }
            if let Some(Ok(list)) = &*users.read() {
                RoleAssignmentForm { users: list.clone(), on_saved: move |_| users.restart() }
            }
        }
    }
}

#[component]
fn UserTable(users: Vec<User>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                th { "Name" }
                th { "Email" }
                th { "Roles" }
                th { "Status" }
            }
            DataTableBody {
                if users.is_empty() {
                    DataTableEmpty { colspan: 4, message: "No users found." }
                }
                for user in users.iter() {
                    DataTableRow { key: "{user.id}",
                        DataTableCell { "{user.name}" }
                        DataTableCell { "{user.email}" }
                        DataTableCell {
                            for role in user.roles.iter() {
                                Badge { key: "{role}", variant: BadgeVariant::Secondary, "{role_label(role)}" }
                            }
                        }
                        DataTableCell {
                            if user.is_active {
                                Badge { variant: BadgeVariant::Success, "Active" }
                            } else {
                                Badge { variant: BadgeVariant::Danger, "Inactive" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CreateUserForm(on_saved: EventHandler<()>) -> Element {
    let api: ApiClient = use_context();
    let mut form = use_signal(|| UserManagementRequest {
        role: Role::Patient.as_str().to_string(),
        ..Default::default()
    });
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
            let result = api.create_user(&form()).await;
            loading.set(false);

            match result {
                Ok(user) => {
                    tracing::info!(user_id = user.id, "User created");
                    saved.set(true);
                    form.set(UserManagementRequest {
                        role: Role::Patient.as_str().to_string(),
                        ..Default::default()
                    });
                    on_saved.call(());
                }
                Err(e) if !e.field_errors.is_empty() => field_errors.set(e.field_errors),
                Err(e) => error_msg.set(Some(e.user_message())),
            }
        }
    };

    rsx! {
        Card {
            CardHeader { title: "Add User" }
            CardContent {
                if saved() {
                    FormSuccess { "User created." }
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
                    FormSelect {
                        label: "Role",
                        value: form.read().role.clone(),
                        error: error_for("role"),
                        onchange: move |e: Event<FormData>| form.write().role = e.value(),
                        for role in ALL_ROLES.iter() {
                            option { value: role.as_str(), "{role.display_name()}" }
                        }
                    }
                    Button { button_type: "submit", loading: loading(), loading_label: "Saving...", "Add User" }
                }
            }
        }
    }
}

#[component]
fn RoleAssignmentForm(users: Vec<User>, on_saved: EventHandler<()>) -> Element {
    let api: ApiClient = use_context();
    let mut form = use_signal(RoleAssignmentRequest::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut saved = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    let on_user_change = {
        let users = users.clone();
        move |e: Event<FormData>| {
            let user_id = e.value();
            let roles = users
                .iter()
                .find(|u| u.id.to_string() == user_id)
                .map(|u| u.roles.clone())
                .unwrap_or_default();
            form.set(RoleAssignmentRequest { user_id, roles });
        }
    };

    let handle_submit = move |_: FormEvent| {
        let api = api.clone();
        async move {
            error_msg.set(None);
            saved.set(None);
            field_errors.set(HashMap::new());

            loading.set(true);
            let result = api.assign_roles(&form()).await;
            loading.set(false);

            match result {
                Ok(user) => {
                    saved.set(Some(format!("Roles updated for {}.", user.name)));
                    on_saved.call(());
                }
                Err(e) if !e.field_errors.is_empty() => field_errors.set(e.field_errors),
                Err(e) => error_msg.set(Some(e.user_message())),
            }
        }
    };

    rsx! {
        Card {
            CardHeader { title: "Assign Roles" }
            CardContent {
                if let Some(message) = saved() {
                    FormSuccess { "{message}" }
                }
                if let Some(err) = error_msg() {
                    FormAlert { message: err }
                }
                Form { onsubmit: handle_submit,
                    FormSelect {
                        label: "User",
                        value: form.read().user_id.clone(),
                        error: error_for("user_id"),
                        onchange: on_user_change,
                        option { value: "", "Select a user" }
                        for user in users.iter() {
                            option { key: "{user.id}", value: "{user.id}", "{user.name} ({user.email})" }
                        }
                    }
                    fieldset { class: "users-roles",
                        legend { "Roles" }
                        for role in ALL_ROLES.iter().copied() {
                            label { key: "{role.as_str()}", class: "users-role-option",
                                input {
                                    r#type: "checkbox",
                                    checked: form.read().roles.iter().any(|k| Role::parse(k) == Some(role)),
                                    onchange: move |_| {
                                        let next = toggle_role(&form.read().roles, role);
                                        form.write().roles = next;
                                    },
                                }
                                "{role.display_name()}"
                            }
                        }
                        if let Some(message) = error_for("roles") {
                            span { class: "users-roles-error", role: "alert", "{message}" }
                        }
                    }
                    Button { button_type: "submit", loading: loading(), loading_label: "Saving...", "Save Roles" }
                }
            }
        }
    }
}
