use serde::{Deserialize, Serialize};
use std::fmt;

/// Clinic user role controlling which dashboards and pages are reachable.
///
/// A user may hold several roles at once; the session tracks which one is
/// currently active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Dentist,
    Receptionist,
    Patient,
}

/// All roles in display order.
pub const ALL_ROLES: &[Role] = &[Role::Admin, Role::Dentist, Role::Receptionist, Role::Patient];

impl Role {
    /// Lowercase key used in URLs, storage and API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Dentist => "dentist",
            Role::Receptionist => "receptionist",
            Role::Patient => "patient",
        }
    }

    /// Human-readable name for the role selector and page titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Dentist => "Dentist",
            Role::Receptionist => "Receptionist",
            Role::Patient => "Patient",
        }
    }

    /// Parse a role key case-insensitively. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "dentist" => Some(Role::Dentist),
            "receptionist" => Some(Role::Receptionist),
            "patient" => Some(Role::Patient),
            _ => None,
        }
    }

    /// Landing page for this role.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin-dashboard",
            Role::Dentist => "/dentist-dashboard",
            Role::Receptionist => "/receptionist-dashboard",
            Role::Patient => "/patient-dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a list of role keys as delivered by the backend, keeping the
/// first occurrence of each and skipping anything unrecognized.
pub fn parse_roles<I, S>(keys: I) -> Vec<Role>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut roles = Vec::new();
    for key in keys {
        match Role::parse(key.as_ref()) {
            Some(role) if !roles.contains(&role) => roles.push(role),
            Some(_) => {}
            None => tracing::warn!(role = key.as_ref(), "Ignoring unknown role"),
        }
    }
    roles
}
