use api::ApiClient;
use dioxus::prelude::*;
use shared_types::dates::today;
use shared_types::{status_breakdown, AppointmentSummary, Role};
use shared_ui::{
    Card, CardContent, CardHeader, ErrorState, PageHeader, SkeletonRows, SkeletonStats,
    StatCard, StatGrid, StatTone, StatusBadge,
};

use crate::routes::appointments::LOAD_ERROR;

/// Share of `count` in `total`, as a whole percentage.
fn percent(count: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else {
        (count * 100 + total / 2) / total
    }
}

/// Appointment statistics for the role's visible appointments.
#[component]
pub fn ReportsPage(role: Role) -> Element {
    let api: ApiClient = use_context();

    let mut appointments = use_resource(move || {
        let api = api.clone();
        async move { api.fetch_appointments(role).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reports.css") }

        PageHeader {
            title: "Reports",
            subtitle: format!("{} appointment statistics", role.display_name()),
        }

        match &*appointments.read() {
            Some(Ok(list)) => {
                let summary = AppointmentSummary::from_appointments(list, today());
                let breakdown = status_breakdown(list);
                rsx! {
                    StatGrid {
                        StatCard { label: "Total", value: summary.total.to_string() }
                        StatCard { label: "Upcoming", value: summary.upcoming.to_string(), tone: StatTone::Info }
                        StatCard { label: "Completed", value: summary.completed.to_string(), tone: StatTone::Success }
                        StatCard { label: "Missed", value: summary.missed.to_string(), tone: StatTone::Danger }
                    }
                    Card { class: "reports-breakdown",
                        CardHeader { title: "By Status" }
                        CardContent {
                            if breakdown.is_empty() {
                                p { class: "reports-empty", "No appointments to report on." }
                            }
                            for (status, count) in breakdown.iter() {
                                div { key: "{status}", class: "reports-row",
                                    StatusBadge { status: status.clone() }
                                    div { class: "reports-bar",
                                        div {
                                            class: "reports-bar-fill",
                                            style: "width: {percent(*count, summary.total)}%",
                                        }
                                    }
                                    span { class: "reports-count", "{count} ({percent(*count, summary.total)}%)" }
                                }
                            }
                        }
                    }
                }
            }
            Some(Err(e)) => {
                tracing::warn!(role = role.as_str(), error = %e, "Failed to load reports");
                rsx! {
                    ErrorState {
                        message: LOAD_ERROR.to_string(),
                        on_retry: move |_| appointments.restart(),
                    }
                }
            }
            None => rsx! {
                SkeletonStats {}
                SkeletonRows { count: 3 }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_and_handles_empty() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(4, 4), 100);
    }
}
