//! Static table of navigation paths owned by each role.
//!
//! The first entry of every group is the role's dashboard. Groups are
//! disjoint in this data; the lookup functions still handle a path owned by
//! several roles so that sharing a page later only means editing the table.

use crate::role::{Role, ALL_ROLES};

/// Public sign-in page.
pub const LOGIN_PATH: &str = "/login";
/// Public account registration page.
pub const REGISTER_PATH: &str = "/register";
/// Landing path; resolves to the active role's dashboard.
pub const HOME_PATH: &str = "/";
/// Shown when no role in the session can view any dashboard.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// A navigable page and the label shown for it in menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub display_name: &'static str,
}

const fn entry(path: &'static str, display_name: &'static str) -> RouteEntry {
    RouteEntry { path, display_name }
}

/// Pages reachable without a session.
pub const GLOBAL_ROUTES: &[RouteEntry] = &[
    entry(LOGIN_PATH, "Login"),
    entry(REGISTER_PATH, "Register"),
];

const ADMIN_ROUTES: &[RouteEntry] = &[
    entry("/admin-dashboard", "Admin Dashboard"),
    entry("/admin/users", "User Management"),
    entry("/admin/appointments", "Appointment Management"),
    entry("/admin/reports", "Reports"),
    entry("/admin/settings", "Settings"),
];

const DENTIST_ROUTES: &[RouteEntry] = &[
    entry("/dentist-dashboard", "Dentist Dashboard"),
    entry("/dentist/patients", "Patient Records"),
    entry("/dentist/appointments", "Appointments"),
    entry("/dentist/reports", "Reports"),
    entry("/dentist/settings", "Settings"),
];

const RECEPTIONIST_ROUTES: &[RouteEntry] = &[
    entry("/receptionist-dashboard", "Receptionist Dashboard"),
    entry("/receptionist/appointments", "Manage Appointments"),
    entry("/receptionist/book", "Book Appointment"),
    entry("/receptionist/reports", "Reports"),
    entry("/receptionist/settings", "Settings"),
];

const PATIENT_ROUTES: &[RouteEntry] = &[
    entry("/patient-dashboard", "Patient Dashboard"),
    entry("/patient/appointments", "View Appointments"),
    entry("/patient/book", "Book Appointment"),
    entry("/patient/reports", "Reports"),
    entry("/patient/settings", "Settings"),
];

/// Route group owned by `role`, dashboard first.
pub fn routes_for(role: Role) -> &'static [RouteEntry] {
    match role {
        Role::Admin => ADMIN_ROUTES,
        Role::Dentist => DENTIST_ROUTES,
        Role::Receptionist => RECEPTIONIST_ROUTES,
        Role::Patient => PATIENT_ROUTES,
    }
}

/// Strip a trailing slash so `/admin/users/` and `/admin/users` compare equal.
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// Union of the paths reachable by any of `roles`, in first-seen order.
pub fn allowed_paths(roles: &[Role]) -> Vec<&'static str> {
    let mut paths = Vec::new();
    for role in roles {
        for route in routes_for(*role) {
            if !paths.contains(&route.path) {
                paths.push(route.path);
            }
        }
    }
    paths
}

/// Whether any of `roles` may view `path`.
pub fn is_allowed(path: &str, roles: &[Role]) -> bool {
    let path = normalize_path(path);
    roles
        .iter()
        .any(|role| routes_for(*role).iter().any(|r| r.path == path))
}

/// Every role whose group contains `path`, in canonical role order.
pub fn owning_roles(path: &str) -> Vec<Role> {
    let path = normalize_path(path);
    ALL_ROLES
        .iter()
        .copied()
        .filter(|role| routes_for(*role).iter().any(|r| r.path == path))
        .collect()
}

/// Look up the menu label of a role-owned path.
pub fn display_name(path: &str) -> Option<&'static str> {
    let path = normalize_path(path);
    ALL_ROLES
        .iter()
        .flat_map(|role| routes_for(*role).iter())
        .chain(GLOBAL_ROUTES.iter())
        .find(|r| r.path == path)
        .map(|r| r.display_name)
}
