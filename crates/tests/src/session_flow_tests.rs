use axum::{routing::post, Json, Router};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::guard::{evaluate, GuardDecision};
use shared_types::{LoginRequest, MemoryStorage, PersistedSession, Role, SessionStore};

use crate::common::{client, spawn_backend};

async fn sign_in(roles: serde_json::Value) -> SessionStore<MemoryStorage> {
    let router = Router::new().route(
        "/api/login/",
        post(move || {
            let roles = roles.clone();
            async move { Json(json!({"roles": roles})) }
        }),
    );
    let base = spawn_backend(router).await;

    let req = LoginRequest {
        email: "front@example.com".to_string(),
        password: "secret".to_string(),
    };
    let roles = client(&base).login(&req).await.unwrap();
    let mut store = SessionStore::new(MemoryStorage::default());
    store.login(roles).unwrap();
    store
}

#[tokio::test]
async fn first_role_becomes_current_and_is_persisted() {
    let store = sign_in(json!(["receptionist", "patient"])).await;

    assert_eq!(store.session().current_role(), Some(Role::Receptionist));
    assert_eq!(
        store.storage().saved,
        Some(PersistedSession {
            roles: vec!["receptionist".to_string(), "patient".to_string()],
            current_role: Some("receptionist".to_string()),
        })
    );
}

#[tokio::test]
async fn guard_follows_the_signed_in_roles() {
    let store = sign_in(json!(["receptionist", "patient"])).await;
    let session = store.session();

    assert_eq!(
        evaluate("/", session),
        GuardDecision::Redirect("/receptionist-dashboard")
    );
    assert_eq!(
        evaluate("/receptionist/book", session),
        GuardDecision::Render { switch_role: None }
    );
    assert_eq!(
        evaluate("/patient/appointments", session),
        GuardDecision::Render {
            switch_role: Some(Role::Patient)
        }
    );
    assert_eq!(
        evaluate("/admin/users", session),
        GuardDecision::Redirect("/receptionist-dashboard")
    );
}

#[tokio::test]
async fn reload_restores_the_same_decisions() {
    let store = sign_in(json!(["dentist"])).await;
    let snapshot = store.storage().saved.clone().unwrap();

    let mut restored = SessionStore::new(MemoryStorage::default());
    assert!(restored.hydrate(&snapshot));
    assert_eq!(restored.session(), store.session());
    assert_eq!(
        evaluate("/dentist/patients", restored.session()),
        GuardDecision::Render { switch_role: None }
    );
}

#[tokio::test]
async fn logout_sends_everything_to_login() {
    let mut store = sign_in(json!(["admin"])).await;
    store.logout();

    assert_eq!(store.storage().saved, None);
    assert_eq!(
        evaluate("/admin-dashboard", store.session()),
        GuardDecision::RedirectToLogin
    );
}
