use std::collections::HashMap;

use api::ApiClient;
use dioxus::prelude::*;
use shared_types::{AppointmentCreateRequest, AppointmentType, Role, ALL_APPOINTMENT_TYPES};
use shared_ui::{
    Button, Card, CardContent, CardHeader, Form, FormAlert, FormSelect, FormSuccess, Input,
    PageHeader, TextArea,
};

use crate::format_helpers::{format_date_human, format_time_human};

use super::appointments_route;

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Booking form. Staff book on behalf of a patient and must supply the
/// patient ID; patients book for themselves.
#[component]
pub fn BookAppointmentPage(role: Role) -> Element {
    let api: ApiClient = use_context();
    let staff = role != Role::Patient;
    let subtitle = if staff {
        "Schedule a visit on behalf of a patient"
    } else {
        "Request a visit with the clinic"
    };

    let mut form = use_signal(AppointmentCreateRequest::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut booked = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    let handle_submit = move |_: FormEvent| {
        let api = api.clone();
        async move {
            error_msg.set(None);
            booked.set(None);
            field_errors.set(HashMap::new());

            let req = form();
            if let Err(e) = req.validate_for(role) {
                field_errors.set(e.field_errors);
                return;
            }

            loading.set(true);
            let result = api.create_appointment(&req, role).await;
            loading.set(false);

            match result {
                Ok(created) => {
                    booked.set(Some(format!(
                        "Appointment booked for {} at {}.",
                        format_date_human(&created.appointment_date),
                        format_time_human(&created.appointment_time),
                    )));
                    form.set(AppointmentCreateRequest::default());
                }
                Err(e) if !e.field_errors.is_empty() => field_errors.set(e.field_errors),
                Err(e) => {
                    tracing::warn!(role = role.as_str(), error = %e, "Booking failed");
                    error_msg.set(Some(e.user_message()));
                }
            }
        }
    };

    rsx! {
        PageHeader {
            title: "Book Appointment",
            subtitle: subtitle.to_string(),
        }

        Card {
            CardHeader { title: "Appointment Details" }
            CardContent {
                if let Some(message) = booked() {
                    FormSuccess {
                        "{message} "
                        Link { to: appointments_route(role), "View appointments" }
                    }
                }
                if let Some(err) = error_msg() {
                    FormAlert { message: err }
                }

                Form { onsubmit: handle_submit,
                    if staff {
                        Input {
                            label: "Patient ID",
                            value: form.read().patient_id.clone().unwrap_or_default(),
                            error: error_for("patient_id"),
                            on_input: move |e: FormEvent| form.write().patient_id = optional(e.value()),
                        }
                    }
                    Input {
                        label: "Dentist ID (optional)",
                        value: form.read().dentist_id.clone().unwrap_or_default(),
                        error: error_for("dentist_id"),
                        on_input: move |e: FormEvent| form.write().dentist_id = optional(e.value()),
                    }
                    Input {
                        label: "Date",
                        input_type: "date",
                        value: form.read().date.clone(),
                        error: error_for("date"),
                        on_input: move |e: FormEvent| form.write().date = e.value(),
                    }
                    Input {
                        label: "Time",
                        input_type: "time",
                        value: form.read().time.clone(),
                        error: error_for("time"),
                        on_input: move |e: FormEvent| form.write().time = e.value(),
                    }
                    FormSelect {
                        label: "Appointment Type",
                        value: form.read().appointment_type.as_str().to_string(),
                        onchange: move |e: Event<FormData>| {
                            form.write().appointment_type = AppointmentType::from_str_or_default(&e.value());
                        },
                        for kind in ALL_APPOINTMENT_TYPES.iter() {
                            option { value: kind.as_str(), "{kind.display_name()}" }
                        }
                    }
                    Input {
                        label: "Reason for Visit",
                        value: form.read().reason_for_visit.clone(),
                        error: error_for("reason_for_visit"),
                        on_input: move |e: FormEvent| form.write().reason_for_visit = e.value(),
                    }
                    TextArea {
                        label: "Notes",
                        rows: 4,
                        value: form.read().notes.clone(),
                        error: error_for("notes"),
                        on_input: move |e: FormEvent| form.write().notes = e.value(),
                    }
                    Button {
                        button_type: "submit",
                        loading: loading(),
                        loading_label: "Booking...",
                        "Book Appointment"
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
    fn blank_ids_are_dropped() {
        assert_eq!(optional("  ".to_string()), None);
        assert_eq!(optional(" 42 ".to_string()), Some("42".to_string()));
    }
}
