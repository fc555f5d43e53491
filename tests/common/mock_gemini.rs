//! Mock generative-language server for remote source tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::{Response, StatusCode};
use axum::Router;
use parking_lot::Mutex;
use serde_json::json;
use tokio::net::TcpListener;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub api_key: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct MockState {
    status: u16,
    body: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// One-response mock of the `generateContent` endpoint.
pub struct MockGemini {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockGemini {
    /// Bind to an ephemeral port and serve the given response for
    /// every request.
    pub async fn spawn(status: u16, body: serde_json::Value) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            body: body.to_string(),
            captured: Arc::clone(&captured),
        };

        let app = Router::new().fallback(handle).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{}", addr),
            captured,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().clone()
    }
}

async fn handle(State(state): State<MockState>, request: Request) -> Response<Body> {
    let path = request.uri().path().to_string();
    let api_key = request
        .headers()
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let bytes = to_bytes(request.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    state
        .captured
        .lock()
        .push(CapturedRequest { path, api_key, body });

    Response::builder()
        .status(StatusCode::from_u16(state.status).expect("invalid status"))
        .header("content-type", "application/json")
        .body(Body::from(state.body.clone()))
        .expect("Failed to build mock response")
}

/// Well-formed response carrying one candidate text.
pub fn text_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

/// Empty response with safety-filter feedback.
pub fn safety_block(reason: &str, message: &str) -> serde_json::Value {
    json!({
        "candidates": [],
        "promptFeedback": {
            "blockReason": reason,
            "blockReasonMessage": message
        }
    })
}
