//! Per-navigation access decision.

use crate::role::Role;
use crate::route_map::{self, normalize_path, HOME_PATH};
use crate::session::Session;

/// Outcome of checking a requested path against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// No session; go to the sign-in page.
    RedirectToLogin,
    /// The page may be shown. `switch_role` is set when the active role
    /// must change to the role that owns the page.
    Render { switch_role: Option<Role> },
    /// The page is off-limits (or is the home path); go here instead.
    Redirect(&'static str),
    /// No held role can view any dashboard.
    Unauthorized,
}

impl GuardDecision {
    pub fn renders(&self) -> bool {
        matches!(self, GuardDecision::Render { .. })
    }

    /// Where the browser should end up, if not on the requested page.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            GuardDecision::RedirectToLogin => Some(route_map::LOGIN_PATH),
            GuardDecision::Redirect(path) => Some(*path),
            GuardDecision::Unauthorized => Some(route_map::UNAUTHORIZED_PATH),
            GuardDecision::Render { .. } => None,
        }
    }
}

/// Decide what to do with a navigation to `path`.
pub fn evaluate(path: &str, session: &Session) -> GuardDecision {
    if !session.is_authenticated() {
        return GuardDecision::RedirectToLogin;
    }

    let path = normalize_path(path);
    let roles = session.roles();

    if path != HOME_PATH && route_map::is_allowed(path, roles) {
        let owners: Vec<Role> = route_map::owning_roles(path)
            .into_iter()
            .filter(|r| session.has_role(*r))
            .collect();
        return GuardDecision::Render {
            switch_role: role_to_activate(&owners, session),
        };
    }

    match fallback_dashboard(session) {
        Some(target) => GuardDecision::Redirect(target),
        None => GuardDecision::Unauthorized,
    }
}

/// Prefer the current role when it owns the page, else the first held
/// owner in session order.
fn role_to_activate(owners: &[Role], session: &Session) -> Option<Role> {
    let current = session.current_role();
    if current.is_some_and(|c| owners.contains(&c)) {
        return None;
    }
    session
        .roles()
        .iter()
        .copied()
        .find(|r| owners.contains(r))
}

/// Dashboard of the current role if it may be viewed, else the first held
/// role whose dashboard may be viewed.
fn fallback_dashboard(session: &Session) -> Option<&'static str> {
    let roles = session.roles();
    session
        .current_role()
        .into_iter()
        .chain(roles.iter().copied())
        .map(|r| r.dashboard_path())
        .find(|path| route_map::is_allowed(path, roles))
}
