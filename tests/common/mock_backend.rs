//! Local stand-in for the `generateContent` endpoint.
//!
//! Replies are served from a queue in order; an empty queue answers with a
//! reply that has no candidates.

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{Request, Response};
use axum::routing::any;
use axum::Router;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex};

const NO_CANDIDATES: &str = r#"{"candidates": []}"#;

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

/// A canned JSON reply.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    /// A successful reply whose first candidate holds `text`.
    pub fn candidate_text(text: &str) -> Self {
        let body = serde_json::json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        });
        Self::json(&body.to_string())
    }

    /// A Gemini-style error envelope.
    pub fn error(status: u16, message: &str) -> Self {
        let body = serde_json::json!({
            "error": { "code": status, "message": message, "status": "UNAVAILABLE" }
        });
        Self {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Clone, Default)]
struct Exchange {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    replies: Arc<Mutex<VecDeque<MockResponse>>>,
}

pub struct MockBackend {
    base_url: String,
    exchange: Exchange,
    shutdown: watch::Sender<bool>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let exchange = Exchange::default();
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let router = Router::new()
            .route("/{*path}", any(respond))
            .with_state(exchange.clone());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            base_url,
            exchange,
            shutdown,
        }
    }

    pub async fn enqueue_response(&self, reply: MockResponse) {
        self.exchange.replies.lock().await.push_back(reply);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.exchange.requests.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn respond(State(exchange): State<Exchange>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let headers = req
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();
    let body = to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();
    exchange.requests.lock().await.push(CapturedRequest {
        method,
        path,
        headers,
        body,
    });

    let reply = exchange
        .replies
        .lock()
        .await
        .pop_front()
        .unwrap_or_else(|| MockResponse::json(NO_CANDIDATES));
    Response::builder()
        .status(reply.status)
        .header("content-type", "application/json")
        .body(Body::from(reply.body))
        .unwrap()
}
