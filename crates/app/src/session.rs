use dioxus::prelude::*;
use shared_types::{
    AppError, PersistedSession, Role, Session, SessionStorage, SessionStore,
};

const ROLES_KEY: &str = "roles";
const CURRENT_ROLE_KEY: &str = "currentRole";

/// `localStorage`-backed session storage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn save(&mut self, snapshot: &PersistedSession) {
        document::eval(&save_script(snapshot));
    }

    fn clear(&mut self) {
        document::eval(&clear_script());
    }
}

/// Quote `value` as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn save_script(snapshot: &PersistedSession) -> String {
    let roles_json = serde_json::to_string(&snapshot.roles).unwrap_or_else(|_| "[]".to_string());
    let current = match &snapshot.current_role {
        Some(role) => format!(
            "localStorage.setItem({}, {});",
            js_string(CURRENT_ROLE_KEY),
            js_string(role)
        ),
        None => format!("localStorage.removeItem({});", js_string(CURRENT_ROLE_KEY)),
    };
    format!(
        "localStorage.setItem({}, {});\n{}",
        js_string(ROLES_KEY),
        js_string(&roles_json),
        current
    )
}

fn clear_script() -> String {
    format!(
        "localStorage.removeItem({});\nlocalStorage.removeItem({});",
        js_string(ROLES_KEY),
        js_string(CURRENT_ROLE_KEY)
    )
}

const LOAD_SCRIPT: &str = r#"
var roles = [];
try { roles = JSON.parse(localStorage.getItem("roles") || "[]"); } catch (e) { roles = []; }
if (!Array.isArray(roles)) { roles = []; }
return {
    roles: roles.filter(function (r) { return typeof r === "string"; }),
    currentRole: localStorage.getItem("currentRole")
};
"#;

/// Read the persisted snapshot. Anything unreadable counts as signed out.
async fn load_snapshot() -> PersistedSession {
    match document::eval(LOAD_SCRIPT).join::<PersistedSession>().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!(error = ?e, "Could not read stored session");
            PersistedSession::default()
        }
    }
}

/// Global session state.
///
/// `hydrated` stays false until the stored session has been read; guarded
/// pages must not make access decisions before then.
#[derive(Clone, Copy)]
pub struct SessionState {
    pub store: Signal<SessionStore<BrowserStorage>>,
    pub hydrated: Signal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            store: Signal::new(SessionStore::new(BrowserStorage)),
            hydrated: Signal::new(false),
        }
    }

    pub fn session(&self) -> Session {
        self.store.read().session().clone()
    }

    pub fn current_role(&self) -> Option<Role> {
        self.store.read().session().current_role()
    }

    pub fn is_hydrated(&self) -> bool {
        *self.hydrated.read()
    }

    pub fn login(&mut self, roles: Vec<Role>) -> Result<Role, AppError> {
        self.store.write().login(roles)
    }

    /// Change the active role, writing only when it actually changes.
    pub fn switch_role(&mut self, role: Role) -> bool {
        let changes = {
            let store = self.store.read();
            let session = store.session();
            session.current_role() != Some(role) && session.has_role(role)
        };
        changes && self.store.write().set_current_role(role)
    }

    pub fn logout(&mut self) {
        self.store.write().logout();
    }

    fn hydrate(&mut self, snapshot: PersistedSession) {
        let applied = self.store.write().hydrate(&snapshot);
        tracing::info!(
            applied,
            authenticated = self.store.read().session().is_authenticated(),
            "Session hydrated"
        );
        self.hydrated.set(true);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Restores the stored session once on startup.
#[component]
pub fn SessionHydrator() -> Element {
    let mut state = use_session();
    use_effect(move || {
        spawn(async move {
            let snapshot = load_snapshot().await;
            state.hydrate(snapshot);
        });
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_script_writes_both_keys() {
        let script = save_script(&PersistedSession {
            roles: vec!["admin".into(), "dentist".into()],
            current_role: Some("dentist".into()),
        });
        assert!(script.contains(r#"localStorage.setItem("roles", "[\"admin\",\"dentist\"]");"#));
        assert!(script.contains(r#"localStorage.setItem("currentRole", "dentist");"#));
    }

    #[test]
    fn save_script_without_current_role_removes_key() {
        let script = save_script(&PersistedSession {
            roles: vec![],
            current_role: None,
        });
        assert!(script.contains(r#"localStorage.removeItem("currentRole");"#));
    }

    #[test]
    fn clear_script_removes_both_keys() {
        let script = clear_script();
        assert!(script.contains(r#"removeItem("roles")"#));
        assert!(script.contains(r#"removeItem("currentRole")"#));
    }

    #[test]
    fn role_values_are_escaped() {
        assert_eq!(js_string("a\"b"), r#""a\"b""#);
    }
}
