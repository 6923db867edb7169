pub mod appointments;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod patients;
pub mod register;
pub mod reports;
pub mod settings;
pub mod unauthorized;
pub mod users;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdClock, LdFileText, LdLayoutDashboard, LdSettings, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::guard::{self, GuardDecision};
use shared_types::route_map::{self, normalize_path};
use shared_types::Role;
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant, Sidebar, SidebarGroup, SidebarItem};

use crate::session::use_session;

use login::Login;
use not_found::NotFound;
use register::Register;
use unauthorized::Unauthorized;

/// Application routes. Everything inside the guarded layout is checked
/// against the signed-in user's roles before it renders.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/unauthorized")]
    Unauthorized {},
    #[layout(RoleGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    // ── Admin ──
    #[route("/admin-dashboard")]
    AdminDashboard {},
    #[route("/admin/users")]
    AdminUsers {},
    #[route("/admin/appointments")]
    AdminAppointments {},
    #[route("/admin/reports")]
    AdminReports {},
    #[route("/admin/settings")]
    AdminSettings {},
    // ── Dentist ──
    #[route("/dentist-dashboard")]
    DentistDashboard {},
    #[route("/dentist/patients")]
    DentistPatients {},
    #[route("/dentist/appointments")]
    DentistAppointments {},
    #[route("/dentist/reports")]
    DentistReports {},
    #[route("/dentist/settings")]
    DentistSettings {},
    // ── Receptionist ──
    #[route("/receptionist-dashboard")]
    ReceptionistDashboard {},
    #[route("/receptionist/appointments")]
    ReceptionistAppointments {},
    #[route("/receptionist/book")]
    ReceptionistBook {},
    #[route("/receptionist/reports")]
    ReceptionistReports {},
    #[route("/receptionist/settings")]
    ReceptionistSettings {},
    // ── Patient ──
    #[route("/patient-dashboard")]
    PatientDashboard {},
    #[route("/patient/appointments")]
    PatientAppointments {},
    #[route("/patient/book")]
    PatientBook {},
    #[route("/patient/reports")]
    PatientReports {},
    #[route("/patient/settings")]
    PatientSettings {},
    #[end_layout]
    // Unknown paths go through the guard too: signed out goes to login,
    // signed in goes to the active dashboard.
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Route for a path taken from the role route map.
pub fn route_for_path(path: &str) -> Route {
    path.parse::<Route>().unwrap_or_else(|_| Route::NotFound {
        route: path
            .trim_start_matches('/')
            .split('/')
            .map(str::to_string)
            .collect(),
    })
}

/// Dashboard route for `role`.
pub fn dashboard_route(role: Role) -> Route {
    route_for_path(role.dashboard_path())
}

/// Applies the access decision for every navigation inside the app.
///
/// Nothing is decided until the stored session has been read, so a reload
/// on a protected page does not bounce through the login screen.
#[component]
fn RoleGuard() -> Element {
    let mut state = use_session();
    let route: Route = use_route();

    if !state.is_hydrated() {
        return rsx! {
            div { class: "guard-loading",
                p { "Loading..." }
            }
        };
    }

    let path = route.to_string();
    match guard::evaluate(&path, &state.session()) {
        GuardDecision::Render { switch_role } => {
            if let Some(role) = switch_role {
                // Deferred so the session signal is not written mid-render.
                spawn(async move {
                    state.switch_role(role);
                });
            }
            rsx! { Outlet::<Route> {} }
        }
        decision => {
            if let Some(target) = decision.redirect_target() {
                tracing::debug!(from = %path, to = target, "Guard redirect");
                navigator().replace(route_for_path(target));
            }
            rsx! {
                div { class: "guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

/// `/` never renders content; the guard always redirects it.
#[component]
fn Home() -> Element {
    rsx! {}
}

fn nav_icon(path: &str) -> Element {
    match path.rsplit(['/', '-']).next().unwrap_or("") {
        "dashboard" => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        "users" => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        "patients" => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        "appointments" => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        "book" => rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
        "reports" => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        _ => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
    }
}

/// Sidebar for the current role, top navbar with role switcher, page body.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let state = use_session();

    let path = route.to_string();
    let current_path = normalize_path(&path).to_string();
    let page_title = route_map::display_name(&current_path).unwrap_or("Dental Clinic");
    let entries = state
        .current_role()
        .map(route_map::routes_for)
        .unwrap_or(&[]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            Sidebar { brand: "Dental Clinic",
                if let Some(role) = state.current_role() {
                    SidebarGroup { label: role.display_name().to_string(),
                        for entry in entries.iter() {
                            SidebarItem { key: "{entry.path}", active: entry.path == current_path,
                                Link { to: route_for_path(entry.path),
                                    {nav_icon(entry.path)}
                                    span { "{entry.display_name}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "app-main",
                AppNavbar { title: page_title.to_string() }
                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Top bar: home link, role badge or selector, sign out.
#[component]
fn AppNavbar(title: String) -> Element {
    let mut state = use_session();
    let session = state.session();
    let roles = session.roles().to_vec();
    let current = session.current_role();
    let current_key = current.map(|r| r.as_str()).unwrap_or("");

    let on_role_change = move |evt: Event<FormData>| {
        let Some(role) = Role::parse(&evt.value()) else {
            return;
        };
        if state.switch_role(role) {
            navigator().push(dashboard_route(role));
        }
    };

    let on_logout = move |_: MouseEvent| {
        state.logout();
        navigator().replace(Route::Login {});
    };

    rsx! {
        header { class: "app-navbar",
            Link { to: Route::Home {}, class: "app-navbar-home", "Home" }
            span { class: "app-navbar-title", "{title}" }
            div { class: "app-navbar-spacer" }

            if roles.len() > 1 {
                label { class: "app-navbar-role-select",
                    "Role"
                    select {
                        value: current_key,
                        onchange: on_role_change,
                        for role in roles.iter() {
                            option {
                                key: "{role.as_str()}",
                                value: role.as_str(),
                                selected: Some(*role) == current,
                                "{role.display_name()}"
                            }
                        }
                    }
                }
            } else if let Some(role) = current {
                Badge { variant: BadgeVariant::Secondary, "{role.display_name()}" }
            }

            Button { variant: ButtonVariant::Outline, onclick: on_logout, "Sign Out" }
        }
    }
}

// Role route components

#[component]
fn AdminDashboard() -> Element {
    dashboard::admin::AdminDashboardPage()
}

#[component]
fn AdminUsers() -> Element {
    users::UserManagementPage()
}

#[component]
fn AdminAppointments() -> Element {
    rsx! { appointments::AppointmentsPage { role: Role::Admin } }
}

#[component]
fn AdminReports() -> Element {
    rsx! { reports::ReportsPage { role: Role::Admin } }
}

#[component]
fn AdminSettings() -> Element {
    rsx! { settings::SettingsPage { role: Role::Admin } }
}

#[component]
fn DentistDashboard() -> Element {
    rsx! { dashboard::AppointmentDashboard { role: Role::Dentist } }
}

#[component]
fn DentistPatients() -> Element {
    patients::PatientRecordsPage()
}

#[component]
fn DentistAppointments() -> Element {
    rsx! { appointments::AppointmentsPage { role: Role::Dentist } }
}

#[component]
fn DentistReports() -> Element {
    rsx! { reports::ReportsPage { role: Role::Dentist } }
}

#[component]
fn DentistSettings() -> Element {
    rsx! { settings::SettingsPage { role: Role::Dentist } }
}

#[component]
fn ReceptionistDashboard() -> Element {
    rsx! { dashboard::AppointmentDashboard { role: Role::Receptionist } }
}

#[component]
fn ReceptionistAppointments() -> Element {
    rsx! { appointments::AppointmentsPage { role: Role::Receptionist } }
}

#[component]
fn ReceptionistBook() -> Element {
    rsx! { appointments::book::BookAppointmentPage { role: Role::Receptionist } }
}

#[component]
fn ReceptionistReports() -> Element {
    rsx! { reports::ReportsPage { role: Role::Receptionist } }
}

#[component]
fn ReceptionistSettings() -> Element {
    rsx! { settings::SettingsPage { role: Role::Receptionist } }
}

#[component]
fn PatientDashboard() -> Element {
    rsx! { dashboard::AppointmentDashboard { role: Role::Patient } }
}

#[component]
fn PatientAppointments() -> Element {
    rsx! { appointments::AppointmentsPage { role: Role::Patient } }
}

#[component]
fn PatientBook() -> Element {
    rsx! { appointments::book::BookAppointmentPage { role: Role::Patient } }
}

#[component]
fn PatientReports() -> Element {
    rsx! { reports::ReportsPage { role: Role::Patient } }
}

#[component]
fn PatientSettings() -> Element {
    rsx! { settings::SettingsPage { role: Role::Patient } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::role::ALL_ROLES;
    use shared_types::route_map::{routes_for, GLOBAL_ROUTES, UNAUTHORIZED_PATH};

    #[test]
    fn every_role_path_has_a_route() {
        for role in ALL_ROLES {
            for entry in routes_for(*role) {
                let route = route_for_path(entry.path);
                assert!(
                    !matches!(route, Route::NotFound { .. }),
                    "{} has no route",
                    entry.path
                );
                assert_eq!(route.to_string(), entry.path);
            }
        }
    }

    #[test]
    fn public_paths_have_routes() {
        for entry in GLOBAL_ROUTES {
            assert_eq!(route_for_path(entry.path).to_string(), entry.path);
        }
        assert_eq!(route_for_path(UNAUTHORIZED_PATH), Route::Unauthorized {});
        assert_eq!(route_for_path("/"), Route::Home {});
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert!(matches!(
            route_for_path("/billing/invoices"),
            Route::NotFound { .. }
        ));
    }

    #[test]
    fn unknown_paths_are_guarded() {
        use shared_types::{MemoryStorage, SessionStore};

        let path = route_for_path("/billing/invoices").to_string();
        assert_eq!(path, "/billing/invoices");

        let signed_out = SessionStore::new(MemoryStorage::default());
        assert_eq!(
            guard::evaluate(&path, signed_out.session()),
            GuardDecision::RedirectToLogin
        );

        let mut store = SessionStore::new(MemoryStorage::default());
        store.login([Role::Dentist]).unwrap();
        let decision = guard::evaluate(&path, store.session());
        assert_eq!(decision, GuardDecision::Redirect("/dentist-dashboard"));
        assert_eq!(
            decision.redirect_target().map(route_for_path),
            Some(Route::DentistDashboard {})
        );

        store.logout();
        assert_eq!(
            guard::evaluate(&path, store.session()),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn dashboard_routes() {
        assert_eq!(dashboard_route(Role::Dentist), Route::DentistDashboard {});
        assert_eq!(dashboard_route(Role::Patient), Route::PatientDashboard {});
    }
}
