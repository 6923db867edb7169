pub mod admin;

use api::ApiClient;
use dioxus::prelude::*;
use shared_types::dates::today;
use shared_types::{AppointmentSummary, Role};
use shared_ui::{
    Button, Card, CardContent, CardHeader, ErrorState, PageHeader, SkeletonRows, SkeletonStats,
    StatCard, StatGrid, StatTone,
};

use crate::routes::appointments::{
    appointments_route, booking_route, AppointmentTable, LOAD_ERROR,
};

fn summary_cards(role: Role, summary: &AppointmentSummary) -> Vec<(&'static str, usize, StatTone)> {
    match role {
        Role::Receptionist => vec![
            ("Today's Appointments", summary.today, StatTone::Info),
            ("Pending Check-ins", summary.pending_check_ins, StatTone::Warning),
            ("Upcoming", summary.upcoming, StatTone::Neutral),
            ("Missed", summary.missed, StatTone::Danger),
        ],
        Role::Dentist => vec![
            ("Today's Appointments", summary.today, StatTone::Info),
            ("Upcoming", summary.upcoming, StatTone::Neutral),
            ("Completed", summary.completed, StatTone::Success),
            ("Total Appointments", summary.total, StatTone::Neutral),
        ],
        Role::Patient | Role::Admin => vec![
            ("Upcoming Appointments", summary.upcoming, StatTone::Info),
            ("Completed Visits", summary.completed, StatTone::Success),
            ("Total Appointments", summary.total, StatTone::Neutral),
        ],
    }
}

/// Dashboard for dentists, receptionists and patients: summary counts and
/// the appointments visible to the role.
#[component]
pub fn AppointmentDashboard(role: Role) -> Element {
    let api: ApiClient = use_context();

    let mut appointments = use_resource(move || {
        let api = api.clone();
        async move { api.fetch_appointments(role).await }
    });

    let actions = booking_route(role).map(|route| {
        rsx! {
            Link { to: route,
                Button { "Book Appointment" }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            title: format!("{} Dashboard", role.display_name()),
            actions: actions,
        }

        match &*appointments.read() {
            Some(Ok(list)) => {
                let summary = AppointmentSummary::from_appointments(list, today());
                rsx! {
                    StatGrid {
                        for (label, value, tone) in summary_cards(role, &summary) {
                            StatCard { key: "{label}", label: label.to_string(), value: value.to_string(), tone: tone }
                        }
                    }
                    Card { class: "dashboard-section",
                        CardHeader {
                            title: "Appointments",
                            action: rsx! {
                                Link { to: appointments_route(role), "View all" }
                            },
                        }
                        CardContent {
                            AppointmentTable { appointments: list.clone(), role }
                        }
                    }
                }
            }
            Some(Err(e)) => {
                tracing::warn!(role = role.as_str(), error = %e, "Failed to load dashboard");
                rsx! {
                    ErrorState {
                        message: LOAD_ERROR.to_string(),
                        on_retry: move |_| appointments.restart(),
                    }
                }
            }
            None => rsx! {
                SkeletonStats {}
                SkeletonRows {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_desk_sees_check_ins() {
        let summary = AppointmentSummary {
            pending_check_ins: 3,
            ..Default::default()
        };
        let cards = summary_cards(Role::Receptionist, &summary);
        assert!(cards
            .iter()
            .any(|(label, value, _)| *label == "Pending Check-ins" && *value == 3));
        assert!(!summary_cards(Role::Patient, &summary)
            .iter()
            .any(|(label, _, _)| *label == "Pending Check-ins"));
    }
}
