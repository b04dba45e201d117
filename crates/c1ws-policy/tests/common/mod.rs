//! In-process stand-in for the policy API, served with axum on an
//! ephemeral port. Every request is recorded so tests can check what was
//! (and was not) called.
#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

pub struct MockApi {
    list: (u16, String),
    details: HashMap<i64, (u16, String)>,
    update: (u16, String),
    requests: Mutex<Vec<Recorded>>,
}

impl MockApi {
    pub fn new() -> Self {
        MockApi {
            list: (200, r#"{"policies":[]}"#.to_string()),
            details: HashMap::new(),
            update: (200, "{}".to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_policies(self, policies: Value) -> Self {
        let body = serde_json::json!({ "policies": policies }).to_string();
        self.with_list_response(200, &body)
    }

    pub fn with_list_response(mut self, status: u16, body: &str) -> Self {
        self.list = (status, body.to_string());
        self
    }

    pub fn with_detail(mut self, id: i64, detail: Value) -> Self {
        self.details.insert(id, (200, detail.to_string()));
        self
    }

    pub fn with_detail_response(mut self, id: i64, status: u16, body: &str) -> Self {
        self.details.insert(id, (status, body.to_string()));
        self
    }

    pub fn with_update_response(mut self, status: u16, body: &str) -> Self {
        self.update = (status, body.to_string());
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("lock poisoned").clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }

    fn record(&self, method: &str, path: String, headers: &HeaderMap, body: String) {
        let headers = headers
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    v.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();

        self.requests.lock().expect("lock poisoned").push(Recorded {
            method: method.to_string(),
            path,
            headers,
            body,
        });
    }
}

fn reply((status, body): &(u16, String)) -> (StatusCode, String) {
    (
        StatusCode::from_u16(*status).expect("valid status"),
        body.clone(),
    )
}

async fn list(State(api): State<Arc<MockApi>>, headers: HeaderMap) -> (StatusCode, String) {
    api.record("GET", "/api/policies".to_string(), &headers, String::new());
    reply(&api.list)
}

async fn details(
    State(api): State<Arc<MockApi>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    api.record("GET", format!("/api/policies/{}", id), &headers, String::new());
    match api.details.get(&id) {
        Some(response) => reply(response),
        None => (
            StatusCode::NOT_FOUND,
            r#"{"message":"Policy not found"}"#.to_string(),
        ),
    }
}

async fn update(
    State(api): State<Arc<MockApi>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    api.record("POST", format!("/api/policies/{}", id), &headers, body);
    reply(&api.update)
}

/// Serve `api` and return its base URL (`http://127.0.0.1:<port>/api`).
pub async fn start(api: MockApi) -> (String, Arc<MockApi>) {
    let api = Arc::new(api);
    let app = Router::new()
        .route("/api/policies", get(list))
        .route("/api/policies/:id", get(details).post(update))
        .with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    (format!("http://{}/api", addr), api)
}
