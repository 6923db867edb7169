pub mod book;

use api::ApiClient;
use dioxus::prelude::*;
use shared_types::table::{self, appointment_columns, Column, ROWS_PER_PAGE_OPTIONS};
use shared_types::{Appointment, Role, SortDirection, TableRow, TableState};
use shared_ui::{
    Button, Card, CardContent, DataTable, DataTableBody, DataTableCell, DataTableEmpty,
    DataTableHeader, DataTableRow, ErrorState, FilterCell, PageHeader, SkeletonRows,
    SortableColumn, StatusBadge, TablePagination,
};

use crate::format_helpers::{format_date_human, format_datetime_human, format_time_human};
use crate::routes::Route;

pub const LOAD_ERROR: &str = "Error loading appointments. Please try again.";

/// Route to the booking form for roles that can book.
pub fn booking_route(role: Role) -> Option<Route> {
    match role {
        Role::Receptionist => Some(Route::ReceptionistBook {}),
        Role::Patient => Some(Route::PatientBook {}),
        Role::Admin | Role::Dentist => None,
    }
}

/// Appointment list route for `role`.
pub fn appointments_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminAppointments {},
        Role::Dentist => Route::DentistAppointments {},
        Role::Receptionist => Route::ReceptionistAppointments {},
        Role::Patient => Route::PatientAppointments {},
    }
}

/// Full appointment list for `role`.
#[component]
pub fn AppointmentsPage(role: Role) -> Element {
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
        PageHeader {
            title: "Appointments",
            subtitle: format!("All appointments visible to the {} role", role.display_name().to_lowercase()),
            actions: actions,
        }

        Card {
            CardContent {
                match &*appointments.read() {
                    Some(Ok(list)) => rsx! {
                        AppointmentTable { appointments: list.clone(), role }
                    },
                    Some(Err(e)) => {
                        tracing::warn!(role = role.as_str(), error = %e, "Failed to load appointments");
                        rsx! {
                            ErrorState {
                                message: LOAD_ERROR.to_string(),
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

fn cell_text(appt: &Appointment, column: &Column) -> String {
    match column.key {
        k if k == table::DATE.key => format_date_human(&appt.appointment_date),
        k if k == table::TIME.key => format_time_human(&appt.appointment_time),
        k if k == table::CREATED_AT.key => format_datetime_human(&appt.created_at),
        k => appt.cell(k).display(),
    }
}

/// Sortable, filterable, paginated appointment table with the columns
/// `role` is allowed to see.
#[component]
pub fn AppointmentTable(appointments: Vec<Appointment>, role: Role) -> Element {
    let mut state = use_signal(|| TableState::sorted_by(table::DATE.key));
    let columns = appointment_columns(role);

    let current = state.read().clone();
    let view = current.apply(&appointments);
    let descending = current.sort_direction == SortDirection::Descending;

    let filters = rsx! {
        for column in columns.iter() {
            FilterCell {
                key: "{column.key}",
                value: current.filter(column.key).to_string(),
                label: column.label.to_string(),
                on_change: move |value: String| state.write().set_filter(column.key, &value),
            }
        }
    };

    rsx! {
        DataTable {
            DataTableHeader { filters: filters,
                for column in columns.iter() {
                    SortableColumn {
                        key: "{column.key}",
                        label: column.label.to_string(),
                        active: current.sort_column.as_deref() == Some(column.key),
                        descending: descending,
                        onsort: move |_| state.write().toggle_sort(column.key),
                    }
                }
            }
            DataTableBody {
                if view.rows.is_empty() {
                    DataTableEmpty { colspan: columns.len(), message: "No appointments found." }
                }
                for appt in view.rows.iter() {
                    DataTableRow { key: "{appt.id}",
                        for column in columns.iter() {
                            DataTableCell { key: "{column.key}",
                                if column.key == table::STATUS.key {
                                    StatusBadge { status: appt.status.clone() }
                                } else {
                                    "{cell_text(appt, column)}"
                                }
                            }
                        }
                    }
                }
            }
        }

        TablePagination {
            page: view.page,
            page_count: view.page_count,
            total: view.total,
            rows_per_page: current.rows_per_page,
            page_sizes: ROWS_PER_PAGE_OPTIONS.to_vec(),
            on_page: move |page: usize| state.write().set_page(page),
            on_rows_per_page: move |rows: usize| {
                state.write().set_rows_per_page(rows);
            },
        }
    }
}
