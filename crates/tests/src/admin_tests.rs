use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{AppErrorKind, RoleAssignmentRequest, User};

use crate::common::{client, spawn_backend, Recorder};

#[tokio::test]
async fn analytics_decode_with_missing_sections() {
    let router = Router::new().route(
        "/api/admin/analytics/",
        get(|| async {
            Json(json!({
                "total_users": 40,
                "active_users": 31,
                "users_by_role": {"admin": 2, "dentist": 5, "receptionist": 3, "patient": 30},
                "total_appointments": 120,
                "appointment_statuses": {"completed": 80, "pending": 30, "canceled": 10},
                "most_active_users": [{"name": "Ann", "last_login": 1_735_689_600}],
                "top_dentists_by_appointments": [{"name": "Dr. Smith", "appointments": 44}],
            }))
        }),
    );
    let base = spawn_backend(router).await;

    let analytics = client(&base).fetch_admin_analytics().await.unwrap();

    assert_eq!(analytics.total_users, 40);
    assert_eq!(analytics.users_by_role.patient, 30);
    assert_eq!(analytics.appointment_statuses.canceled, 10);
    assert!(analytics.user_growth_last_7_days.is_empty());
    assert_eq!(analytics.top_dentists_by_appointments[0].name, "Dr. Smith");
}

#[tokio::test]
async fn non_admin_analytics_request_is_forbidden() {
    let router = Router::new().route(
        "/api/admin/analytics/",
        get(|| async { StatusCode::FORBIDDEN }),
    );
    let base = spawn_backend(router).await;

    let err = client(&base).fetch_admin_analytics().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
}

#[tokio::test]
async fn role_assignment_puts_the_new_role_set() {
    let recorder = Recorder::default();
    let hook = recorder.clone();
    let router = Router::new().route(
        "/api/users/{id}/roles/",
        put(move |Path(id): Path<i64>, Json(body): Json<Value>| {
            let hook = hook.clone();
            async move {
                let roles = body["roles"].clone();
                hook.hit(json!({"id": id, "body": body}));
                Json(json!({
                    "id": id,
                    "name": "Ann Lee",
                    "email": "ann@example.com",
                    "roles": roles,
                }))
            }
        }),
    );
    let base = spawn_backend(router).await;

    let req = RoleAssignmentRequest {
        user_id: "17".to_string(),
        roles: vec!["dentist".to_string(), "admin".to_string()],
    };
    let user = client(&base).assign_roles(&req).await.unwrap();

    assert_eq!(user.roles, vec!["dentist".to_string(), "admin".to_string()]);
    assert_eq!(
        recorder.last().unwrap(),
        json!({"id": 17, "body": {"roles": ["dentist", "admin"]}})
    );
}

#[tokio::test]
async fn empty_role_set_is_rejected_locally() {
    let recorder = Recorder::default();
    let hook = recorder.clone();
    let router = Router::new().route(
        "/api/users/{id}/roles/",
        put(move || {
            let hook = hook.clone();
            async move {
                hook.hit(Value::Null);
                StatusCode::OK
            }
        }),
    );
    let base = spawn_backend(router).await;

    let req = RoleAssignmentRequest {
        user_id: "17".to_string(),
        roles: Vec::new(),
    };
    let err = client(&base).assign_roles(&req).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("roles"));
    assert_eq!(recorder.count(), 0);
}

#[tokio::test]
async fn list_users_decodes_defaults() {
    let router = Router::new().route(
        "/api/users/",
        get(|| async {
            Json(json!([
                {"id": 1, "name": "Ann", "email": "ann@example.com", "roles": ["admin"]},
                {"id": 2, "name": "Bo", "email": "bo@example.com", "is_active": false},
            ]))
        }),
    );
    let base = spawn_backend(router).await;

    let users = client(&base).list_users().await.unwrap();
    assert_eq!(users.len(), 2);
    assert!(users[0].is_active);
    assert!(!users[1].is_active);
    assert!(users[1].roles.is_empty());
}

#[tokio::test]
async fn get_user_fetches_one_account_by_id() {
    let recorder = Recorder::default();
    let hook = recorder.clone();
    let router = Router::new().route(
        "/api/users/{id}/",
        get(move |Path(id): Path<i64>| {
            let hook = hook.clone();
            async move {
                hook.hit(json!(id));
                Json(json!({
                    "id": id,
                    "name": "Ann Lee",
                    "email": "ann@example.com",
                    "roles": ["receptionist"],
                }))
            }
        }),
    );
    let base = spawn_backend(router).await;

    let user = client(&base).get_user(17).await.unwrap();

    assert_eq!(recorder.last().unwrap(), json!(17));
    assert_eq!(
        user,
        User {
            id: 17,
            name: "Ann Lee".to_string(),
            email: "ann@example.com".to_string(),
            roles: vec!["receptionist".to_string()],
            is_active: true,
        }
    );
}
