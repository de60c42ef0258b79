//! In-process fake upstreams for integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use serde_json::Value;

/// One request as the fake upstream saw it.
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Value,
}

impl Captured {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    body: String,
    seen: Arc<Mutex<Vec<Captured>>>,
}

/// A running fake upstream that answers every request with one canned response.
pub struct FakeUpstream {
    pub base_url: String,
    seen: Arc<Mutex<Vec<Captured>>>,
}

impl FakeUpstream {
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = Upstream {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
            seen: seen.clone(),
        };
        let router = Router::new().fallback(respond).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            seen,
        }
    }

    pub async fn json(body: Value) -> Self {
        Self::start(200, body.to_string()).await
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.seen.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

async fn respond(
    State(state): State<Upstream>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(&'static str, &'static str); 1], String) {
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    state.seen.lock().unwrap().push(Captured {
        method,
        path: uri.path().to_string(),
        headers,
        body,
    });
    (
        state.status,
        [("content-type", "application/json")],
        state.body.clone(),
    )
}

/// An address nothing listens on.
pub const DEAD_URL: &str = "http://127.0.0.1:1";
