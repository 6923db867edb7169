//! Authenticated session state and the actions that mutate it.
//!
//! All mutations go through [`SessionStore`], which writes the result to a
//! [`SessionStorage`] backend after every change so a reload can restore
//! the session without signing in again.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::role::{parse_roles, Role};

/// Roles held by the signed-in user and the one currently in use.
///
/// Invariant: `current_role` is `Some` and an element of `roles` exactly
/// when `roles` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    roles: Vec<Role>,
    current_role: Option<Role>,
}

impl Session {
    /// An empty, signed-out session.
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current_role
    }

    pub fn is_authenticated(&self) -> bool {
        !self.roles.is_empty()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Rebuild a session from storage, repairing anything inconsistent.
    pub fn from_snapshot(snapshot: &PersistedSession) -> Self {
        let roles = parse_roles(&snapshot.roles);
        let current_role = snapshot
            .current_role
            .as_deref()
            .and_then(Role::parse)
            .filter(|r| roles.contains(r))
            .or_else(|| roles.first().copied());
        Self {
            roles,
            current_role,
        }
    }

    /// Serializable form written to storage.
    pub fn snapshot(&self) -> PersistedSession {
        PersistedSession {
            roles: self.roles.iter().map(|r| r.as_str().to_string()).collect(),
            current_role: self.current_role.map(|r| r.as_str().to_string()),
        }
    }
}

/// Storage representation: the `roles` and `currentRole` keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersistedSession {
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default, rename = "currentRole")]
    pub current_role: Option<String>,
}

/// Durable backend for the session snapshot.
pub trait SessionStorage {
    fn save(&mut self, snapshot: &PersistedSession);
    fn clear(&mut self);
}

/// In-process storage, used by tests and non-browser targets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStorage {
    pub saved: Option<PersistedSession>,
    pub writes: usize,
}

impl SessionStorage for MemoryStorage {
    fn save(&mut self, snapshot: &PersistedSession) {
        self.saved = Some(snapshot.clone());
        self.writes += 1;
    }

    fn clear(&mut self) {
        self.saved = None;
        self.writes += 1;
    }
}

/// Owner of the session; every mutation is a named action that persists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore<S> {
    session: Session,
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    /// A signed-out store. Nothing is written.
    pub fn new(storage: S) -> Self {
        Self {
            session: Session::unauthenticated(),
            storage,
        }
    }

    /// Adopt a snapshot that finished loading after startup.
    ///
    /// A sign-in that happened while the snapshot was loading wins; the
    /// snapshot is dropped and `false` is returned. Nothing is written.
    pub fn hydrate(&mut self, snapshot: &PersistedSession) -> bool {
        if self.session.is_authenticated() {
            tracing::debug!("Keeping session started before hydration");
            return false;
        }
        self.session = Session::from_snapshot(snapshot);
        tracing::debug!(
            roles = self.session.roles.len(),
            current = ?self.session.current_role,
            "Restored session"
        );
        true
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Start a session with the roles granted at sign-in.
    ///
    /// The first role (in the order given, duplicates dropped) becomes the
    /// current role and is returned. An empty set fails with
    /// `NoRolesAssigned` and leaves the store untouched.
    pub fn login<I>(&mut self, roles: I) -> Result<Role, AppError>
    where
        I: IntoIterator<Item = Role>,
    {
        let mut unique: Vec<Role> = Vec::new();
        for role in roles {
            if !unique.contains(&role) {
                unique.push(role);
            }
        }
        let Some(first) = unique.first().copied() else {
            tracing::warn!("Login returned no roles");
            return Err(AppError::no_roles());
        };

        self.session = Session {
            roles: unique,
            current_role: Some(first),
        };
        self.persist();
        tracing::info!(
            roles = self.session.roles.len(),
            current = %first,
            "Signed in"
        );
        Ok(first)
    }

    /// Switch the active role.
    ///
    /// Returns `true` when the role changed. Switching to the current role
    /// or to a role the session does not hold leaves everything as it was.
    pub fn set_current_role(&mut self, role: Role) -> bool {
        if self.session.current_role == Some(role) {
            return false;
        }
        if !self.session.has_role(role) {
            tracing::warn!(role = %role, "Ignoring switch to a role not held");
            return false;
        }
        self.session.current_role = Some(role);
        self.persist();
        tracing::info!(current = %role, "Switched role");
        true
    }

    /// Forget the session and wipe storage.
    pub fn logout(&mut self) {
        self.session = Session::unauthenticated();
        self.storage.clear();
        tracing::info!("Signed out");
    }

    fn persist(&mut self) {
        let snapshot = self.session.snapshot();
        self.storage.save(&snapshot);
    }
}
