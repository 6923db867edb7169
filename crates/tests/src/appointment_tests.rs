use std::collections::HashMap;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{
    AppErrorKind, AppointmentCreateRequest, AppointmentType, AppointmentUpdateRequest, Role,
};

use crate::common::{
    appointment_json, client, days_from_today, dead_backend, spawn_backend, Recorder,
};

#[tokio::test]
async fn fetch_sends_the_active_role() {
    let recorder = Recorder::default();
    let hook = recorder.clone();
    let router = Router::new().route(
        "/api/appointments/",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let hook = hook.clone();
            async move {
                hook.hit(json!(params));
                Json(json!([
                    appointment_json(1, "2025-03-10", "Scheduled"),
                    appointment_json(2, "2025-03-11", "Completed"),
                ]))
            }
        }),
    );
    let base = spawn_backend(router).await;

    let list = client(&base)
        .fetch_appointments(Role::Receptionist)
        .await
        .unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].patient_name(), "Patient 1");
    assert_eq!(recorder.last().unwrap(), json!({"role": "receptionist"}));
}

#[tokio::test]
async fn retry_after_server_error_issues_a_new_request() {
    let recorder = Recorder::default();
    let hook = recorder.clone();
    let router = Router::new().route(
        "/api/appointments/",
        get(move || {
            let hook = hook.clone();
            async move {
                if hook.hit(Value::Null) == 0 {
                    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({})))
                } else {
                    (
                        StatusCode::OK,
                        Json(json!([appointment_json(5, "2025-03-10", "Scheduled")])),
                    )
                }
            }
        }),
    );
    let base = spawn_backend(router).await;
    let api = client(&base);

    let err = api.fetch_appointments(Role::Patient).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert!(err.is_retryable());

    let list = api.fetch_appointments(Role::Patient).await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(recorder.count(), 2);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let base = dead_backend().await;

    let err = client(&base)
        .fetch_appointments(Role::Dentist)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NetworkError);
    assert_eq!(
        err.user_message(),
        "Unable to reach the clinic server. Please try again."
    );
}

#[tokio::test]
async fn unexpected_body_is_reported_not_panicked() {
    let router = Router::new().route(
        "/api/appointments/",
        get(|| async { Json(json!({"results": "nope"})) }),
    );
    let base = spawn_backend(router).await;

    let err = client(&base)
        .fetch_appointments(Role::Admin)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NetworkError);
}

fn booking(patient_id: Option<&str>) -> AppointmentCreateRequest {
    AppointmentCreateRequest {
        patient_id: patient_id.map(str::to_string),
        dentist_id: None,
        date: days_from_today(3),
        time: "10:00".to_string(),
        appointment_type: AppointmentType::Consultation,
        reason_for_visit: "Tooth ache".to_string(),
        notes: String::new(),
    }
}

fn booking_backend(recorder: Recorder) -> Router {
    Router::new().route(
        "/api/appointments/",
        post(move |Json(req): Json<Value>| {
            let recorder = recorder.clone();
            async move {
                let date = req["date"].as_str().unwrap_or_default().to_string();
                recorder.hit(req);
                (
                    StatusCode::CREATED,
                    Json(appointment_json(42, &date, "Scheduled")),
                )
            }
        }),
    )
}

#[tokio::test]
async fn staff_booking_requires_a_patient() {
    let recorder = Recorder::default();
    let base = spawn_backend(booking_backend(recorder.clone())).await;

    let err = client(&base)
        .create_appointment(&booking(None), Role::Receptionist)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(
        err.field_errors.get("patient_id").map(String::as_str),
        Some("Patient ID is required")
    );
    assert_eq!(recorder.count(), 0);
}

#[tokio::test]
async fn patient_booking_omits_patient_id() {
    let recorder = Recorder::default();
    let base = spawn_backend(booking_backend(recorder.clone())).await;

    let created = client(&base)
        .create_appointment(&booking(None), Role::Patient)
        .await
        .unwrap();

    assert_eq!(created.id, 42);
    let sent = recorder.last().unwrap();
    assert!(sent.get("patient_id").is_none());
    assert_eq!(sent["appointment_type"], "consultation");
}

#[tokio::test]
async fn past_dates_are_rejected_locally() {
    let recorder = Recorder::default();
    let base = spawn_backend(booking_backend(recorder.clone())).await;

    let mut req = booking(Some("12"));
    req.date = days_from_today(-1);
    let err = client(&base)
        .create_appointment(&req, Role::Receptionist)
        .await
        .unwrap_err();

    assert_eq!(
        err.field_errors.get("date").map(String::as_str),
        Some("Date cannot be in the past")
    );
    assert_eq!(recorder.count(), 0);
}

#[tokio::test]
async fn delete_accepts_an_empty_response() {
    let recorder = Recorder::default();
    let hook = recorder.clone();
    let router = Router::new().route(
        "/api/appointments/{id}/",
        delete(move |Path(id): Path<i64>| {
            let hook = hook.clone();
            async move {
                hook.hit(json!(id));
                StatusCode::NO_CONTENT
            }
        }),
    );
    let base = spawn_backend(router).await;

    client(&base).delete_appointment(9).await.unwrap();
    assert_eq!(recorder.last().unwrap(), json!(9));
}

#[tokio::test]
async fn missing_appointment_is_not_found() {
    let router = Router::new().route(
        "/api/appointments/{id}/",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))) }),
    );
    let base = spawn_backend(router).await;

    let err = client(&base).fetch_appointment(404).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Not found.");
    assert!(!err.is_retryable());
}

fn update_backend(recorder: Recorder) -> Router {
    Router::new().route(
        "/api/appointments/{id}/",
        put(move |Path(id): Path<i64>, Json(body): Json<Value>| {
            let recorder = recorder.clone();
            async move {
                let status = body["status"].as_str().unwrap_or_default().to_string();
                let date = body["date"].as_str().unwrap_or_default().to_string();
                recorder.hit(json!({"id": id, "body": body}));
                Json(appointment_json(id, &date, &status))
            }
        }),
    )
}

#[tokio::test]
async fn update_puts_the_reschedule_to_the_appointment() {
    let recorder = Recorder::default();
    let base = spawn_backend(update_backend(recorder.clone())).await;
    let date = days_from_today(2);
    let req = AppointmentUpdateRequest {
        date: date.clone(),
        time: "14:00".to_string(),
        status: "Completed".to_string(),
    };

    let updated = client(&base).update_appointment(9, &req).await.unwrap();

    assert_eq!(updated.id, 9);
    assert_eq!(updated.status, "Completed");
    assert_eq!(recorder.count(), 1);
    assert_eq!(
        recorder.last().unwrap(),
        json!({
            "id": 9,
            "body": {"date": date, "time": "14:00", "status": "Completed"},
        })
    );
}

#[tokio::test]
async fn unknown_status_is_rejected_locally() {
    let recorder = Recorder::default();
    let base = spawn_backend(update_backend(recorder.clone())).await;
    let req = AppointmentUpdateRequest {
        date: days_from_today(2),
        time: "14:00".to_string(),
        status: "Done".to_string(),
    };

    let err = client(&base).update_appointment(9, &req).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(
        err.field_errors.get("status").map(String::as_str),
        Some("Invalid status")
    );
    assert_eq!(recorder.count(), 0);
}
