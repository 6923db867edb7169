use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use api::ApiClient;
use axum::Router;
use serde_json::Value;
use shared_types::ClientConfig;

/// Counts requests that reached a fake endpoint and keeps the last body
/// or query it saw.
#[derive(Clone, Default)]
pub struct Recorder {
    hits: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<Value>>>,
}

impl Recorder {
    /// Record a hit and return how many hits came before it.
    pub fn hit(&self, seen: Value) -> usize {
        *self.last.lock().unwrap() = Some(seen);
        self.hits.fetch_add(1, Ordering::SeqCst)
    }

    pub fn count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Option<Value> {
        self.last.lock().unwrap().clone()
    }
}

/// Serve `router` on an ephemeral local port and return the API base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test backend stopped");
    });
    format!("http://{addr}/api")
}

/// A base URL nothing is listening on.
pub async fn dead_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    drop(listener);
    format!("http://{addr}/api")
}

pub fn client(base: &str) -> ApiClient {
    ApiClient::new(ClientConfig::with_base_url(base))
}

/// Minimal appointment JSON as the backend lists it.
pub fn appointment_json(id: i64, date: &str, status: &str) -> Value {
    serde_json::json!({
        "id": id,
        "patient": {"id": 100 + id, "name": format!("Patient {id}")},
        "dentist": {"id": 7, "name": "Dr. Smith"},
        "appointment_date": date,
        "appointment_time": "09:30",
        "appointment_type": "checkup",
        "reason_for_visit": "Cleaning",
        "status": status,
        "created_at": "2025-01-02T09:00:00Z",
    })
}

/// A date `days` days from today in `YYYY-MM-DD` form.
pub fn days_from_today(days: i64) -> String {
    (chrono::Local::now().date_naive() + chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}
