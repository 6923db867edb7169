use api::ApiClient;
use dioxus::prelude::*;
use shared_types::{distinct_patients, Patient, Role};
use shared_ui::{
    Card, CardContent, DataTable, DataTableBody, DataTableCell, DataTableEmpty, DataTableHeader,
    DataTableRow, ErrorState, Input, PageHeader, SkeletonRows,
};

use crate::format_helpers::format_date_human;

fn matches_query(patient: &Patient, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || patient.name.to_lowercase().contains(&query)
        || patient.email.to_lowercase().contains(&query)
        || patient.phone.contains(&query)
}

/// Patients the signed-in dentist has appointments with.
#[component]
pub fn PatientRecordsPage() -> Element {
    let api: ApiClient = use_context();
    let mut query = use_signal(String::new);

    let mut appointments = use_resource(move || {
        let api = api.clone();
        async move { api.fetch_appointments(Role::Dentist).await }
    });

    rsx! {
        PageHeader {
            title: "Patient Records",
            subtitle: "Patients with appointments on your schedule",
        }

        Card {
            CardContent {
                Input {
                    placeholder: "Search by name, email or phone",
                    value: query(),
                    on_input: move |e: FormEvent| query.set(e.value()),
                }

                match &*appointments.read() {
                    Some(Ok(list)) => {
                        let patients: Vec<Patient> = distinct_patients(list)
                            .into_iter()
                            .filter(|p| matches_query(p, &query.read()))
                            .collect();
                        rsx! {
                            DataTable {
                                DataTableHeader {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Phone" }
                                    th { "Date of Birth" }
                                    th { "Emergency Contact" }
                                }
                                DataTableBody {
                                    if patients.is_empty() {
                                        DataTableEmpty { colspan: 5, message: "No patients found." }
                                    }
                                    for patient in patients.iter() {
                                        DataTableRow { key: "{patient.id}",
                                            DataTableCell { "{patient.name}" }
                                            DataTableCell { "{patient.email}" }
                                            DataTableCell { "{patient.phone}" }
                                            DataTableCell { "{format_date_human(&patient.date_of_birth)}" }
                                            DataTableCell {
                                                "{patient.emergency_contact.name} {patient.emergency_contact.phone}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Failed to load patient records");
                        rsx! {
                            ErrorState {
                                message: "Error loading patients. Please try again.",
                                on_retry: move |_| appointments.restart(),
                            }
                        }
                    }
                    None => rsx! { SkeletonRows {} },
                }
            }
        }
    }
}
