use axum::{http::StatusCode, routing::post, Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{
    AppErrorKind, LoginRequest, MemoryStorage, RegisterRequest, Role, SessionStore,
};

use crate::common::{client, spawn_backend, Recorder};

fn login_backend(recorder: Recorder, status: StatusCode, body: Value) -> Router {
    Router::new().route(
        "/api/login/",
        post(move |Json(req): Json<Value>| {
            let recorder = recorder.clone();
            let body = body.clone();
            async move {
                recorder.hit(req);
                (status, Json(body))
            }
        }),
    )
}

fn credentials() -> LoginRequest {
    LoginRequest {
        email: "dr.smith@example.com".to_string(),
        password: "hunter22".to_string(),
    }
}

#[tokio::test]
async fn login_returns_roles_in_backend_order() {
    let recorder = Recorder::default();
    let base = spawn_backend(login_backend(
        recorder.clone(),
        StatusCode::OK,
        json!({"roles": ["Dentist", "admin", "janitor"]}),
    ))
    .await;

    let roles = client(&base).login(&credentials()).await.unwrap();

    assert_eq!(roles, vec![Role::Dentist, Role::Admin]);
    assert_eq!(recorder.count(), 1);
    assert_eq!(
        recorder.last().unwrap(),
        json!({"email": "dr.smith@example.com", "password": "hunter22"})
    );
}

#[tokio::test]
async fn empty_role_list_cannot_start_a_session() {
    let base = spawn_backend(login_backend(
        Recorder::default(),
        StatusCode::OK,
        json!({"roles": []}),
    ))
    .await;

    let roles = client(&base).login(&credentials()).await.unwrap();
    assert!(roles.is_empty());

    let mut store = SessionStore::new(MemoryStorage::default());
    let err = store.login(roles).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NoRolesAssigned);
    assert!(!store.session().is_authenticated());
    assert_eq!(store.storage().writes, 0);
}

#[tokio::test]
async fn rejected_credentials_surface_backend_detail() {
    let base = spawn_backend(login_backend(
        Recorder::default(),
        StatusCode::UNAUTHORIZED,
        json!({"detail": "No active account found with the given credentials"}),
    ))
    .await;

    let err = client(&base).login(&credentials()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::AuthenticationFailure);
    assert_eq!(
        err.user_message(),
        "No active account found with the given credentials"
    );
}

#[tokio::test]
async fn invalid_email_is_rejected_before_any_request() {
    let recorder = Recorder::default();
    let base = spawn_backend(login_backend(
        recorder.clone(),
        StatusCode::OK,
        json!({"roles": ["patient"]}),
    ))
    .await;

    let req = LoginRequest {
        email: "not-an-email".to_string(),
        password: "x".to_string(),
    };
    let err = client(&base).login(&req).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("email"));
    assert_eq!(recorder.count(), 0);
}

#[tokio::test]
async fn register_does_not_send_confirmation() {
    let recorder = Recorder::default();
    let hook = recorder.clone();
    let router = Router::new().route(
        "/api/register/",
        post(move |Json(req): Json<Value>| {
            let hook = hook.clone();
            async move {
                hook.hit(req);
                StatusCode::CREATED
            }
        }),
    );
    let base = spawn_backend(router).await;

    let req = RegisterRequest {
        name: "Ann Lee".to_string(),
        email: "ann@example.com".to_string(),
        password: "correct-horse".to_string(),
        confirm_password: "correct-horse".to_string(),
        role: "patient".to_string(),
    };
    client(&base).register(&req).await.unwrap();

    let sent = recorder.last().unwrap();
    assert_eq!(sent["role"], "patient");
    assert!(sent.get("confirm_password").is_none());
}

#[tokio::test]
async fn register_field_errors_are_mapped() {
    let router = Router::new().route(
        "/api/register/",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"email": ["user with this email already exists."]})),
            )
        }),
    );
    let base = spawn_backend(router).await;

    let req = RegisterRequest {
        name: "Ann Lee".to_string(),
        email: "ann@example.com".to_string(),
        password: "correct-horse".to_string(),
        confirm_password: "correct-horse".to_string(),
        role: "patient".to_string(),
    };
    let err = client(&base).register(&req).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(
        err.field_errors.get("email").map(String::as_str),
        Some("user with this email already exists.")
    );
}

#[tokio::test]
async fn refresh_posts_an_empty_body() {
    let recorder = Recorder::default();
    let hook = recorder.clone();
    let router = Router::new().route(
        "/api/login/refresh/",
        post(move |Json(body): Json<Value>| {
            let hook = hook.clone();
            async move {
                hook.hit(body);
                Json(json!({"access": "new-token"}))
            }
        }),
    );
    let base = spawn_backend(router).await;

    client(&base).refresh().await.unwrap();

    assert_eq!(recorder.count(), 1);
    assert_eq!(recorder.last().unwrap(), json!({}));
}

#[tokio::test]
async fn expired_refresh_is_forbidden() {
    let router = Router::new().route(
        "/api/login/refresh/",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"detail": "Token is invalid or expired"})),
            )
        }),
    );
    let base = spawn_backend(router).await;

    let err = client(&base).refresh().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "Token is invalid or expired");
}
