use api::ApiClient;
use dioxus::prelude::*;
use shared_types::AdminAnalytics;
use shared_ui::{
    Card, CardContent, CardHeader, DataTable, DataTableBody, DataTableCell, DataTableEmpty,
    DataTableHeader, DataTableRow, ErrorState, PageHeader, SkeletonRows, SkeletonStats, StatCard,
    StatGrid, StatTone,
};

use crate::format_helpers::{format_date_human, format_unix_human};

const ANALYTICS_ERROR: &str = "Error loading analytics. Please try again.";

/// Clinic-wide analytics for administrators.
#[component]
pub fn AdminDashboardPage() -> Element {
    let api: ApiClient = use_context();

    let mut analytics = use_resource(move || {
        let api = api.clone();
        async move { api.fetch_admin_analytics().await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            title: "Admin Dashboard",
            subtitle: "Clinic activity at a glance",
        }

        match &*analytics.read() {
            Some(Ok(data)) => rsx! { AnalyticsView { data: data.clone() } },
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Failed to load analytics");
                rsx! {
                    ErrorState {
                        message: ANALYTICS_ERROR.to_string(),
                        on_retry: move |_| analytics.restart(),
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

#[component]
fn AnalyticsView(data: AdminAnalytics) -> Element {
    let statuses = &data.appointment_statuses;
    let by_role = [
        ("Admins", data.users_by_role.admin),
        ("Dentists", data.users_by_role.dentist),
        ("Receptionists", data.users_by_role.receptionist),
        ("Patients", data.users_by_role.patient),
    ];

    rsx! {
        StatGrid {
            StatCard { label: "Total Users", value: data.total_users.to_string(), tone: StatTone::Info }
            StatCard { label: "Active Users", value: data.active_users.to_string(), tone: StatTone::Success }
            StatCard { label: "Total Appointments", value: data.total_appointments.to_string() }
            StatCard { label: "Completed", value: statuses.completed.to_string(), tone: StatTone::Success }
            StatCard { label: "Pending", value: statuses.pending.to_string(), tone: StatTone::Warning }
            StatCard { label: "Canceled", value: statuses.canceled.to_string(), tone: StatTone::Danger }
        }

        div { class: "dashboard-grid",
            Card {
                CardHeader { title: "Users by Role" }
                CardContent {
                    ul { class: "dashboard-list",
                        for (label, count) in by_role {
                            li { key: "{label}",
                                span { "{label}" }
                                strong { "{count}" }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { title: "New Users", description: "Last 7 days".to_string() }
                CardContent {
                    ul { class: "dashboard-list",
                        if data.user_growth_last_7_days.is_empty() {
                            li { class: "dashboard-muted", "No sign-ups this week." }
                        }
                        for day in data.user_growth_last_7_days.iter() {
                            li { key: "{day.date}",
                                span { "{format_date_human(&day.date)}" }
                                strong { "{day.new_users}" }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { title: "Most Active Users" }
                CardContent {
                    ul { class: "dashboard-list",
                        if data.most_active_users.is_empty() {
                            li { class: "dashboard-muted", "No recent sign-ins." }
                        }
                        for (i, user) in data.most_active_users.iter().enumerate() {
                            li { key: "{i}",
                                span { "{user.name}" }
                                span { class: "dashboard-muted", "{format_unix_human(user.last_login)}" }
                            }
                        }
                    }
                }
            }
        }

        Card { class: "dashboard-section",
            CardHeader { title: "Top Dentists by Appointments" }
            CardContent {
                DataTable {
                    DataTableHeader {
                        th { "Dentist" }
                        th { "Appointments" }
                    }
                    DataTableBody {
                        if data.top_dentists_by_appointments.is_empty() {
                            DataTableEmpty { colspan: 2, message: "No appointments recorded yet." }
                        }
                        for (i, dentist) in data.top_dentists_by_appointments.iter().enumerate() {
                            DataTableRow { key: "{i}",
                                DataTableCell { "{dentist.name}" }
                                DataTableCell { "{dentist.appointments}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
