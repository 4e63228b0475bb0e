//! Shared helpers for relay integration tests.
//!
//! `build_test_app` mirrors the router construction in `main.rs` so the
//! tests exercise the same middleware stack that production uses, and
//! `spawn_upstream` stands in for the Discord webhook endpoint on a real
//! local socket.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use hookgate_api::config::RelayConfig;
use hookgate_api::forward::Forwarder;
use hookgate_api::router::build_app_router;
use hookgate_api::state::AppState;

/// Build a test `RelayConfig` pointing the forwarder at `discord_base_url`.
pub fn test_config(discord_base_url: &str) -> RelayConfig {
    RelayConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        discord_base_url: discord_base_url.to_string(),
        request_timeout_secs: 30,
        forward_timeout_secs: 5,
    }
}

/// Build the full application router with all middleware layers, forwarding
/// to the given upstream base URL.
pub fn build_test_app(discord_base_url: &str) -> Router {
    let config = test_config(discord_base_url);
    let forwarder = Forwarder::new(
        config.discord_base_url.clone(),
        Duration::from_secs(config.forward_timeout_secs),
    );

    let state = AppState {
        config: Arc::new(config),
        forwarder,
    };

    build_app_router(state)
}

// ---------------------------------------------------------------------------
// Mock Discord endpoint
// ---------------------------------------------------------------------------

/// One request captured by the mock Discord endpoint.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub query: Option<String>,
    pub body: String,
    pub github_event: Option<String>,
}

/// A stand-in Discord webhook endpoint listening on a real local socket.
pub struct MockDiscord {
    /// Base URL to hand to `build_test_app`.
    pub base_url: String,
    /// Every request the endpoint received, in arrival order.
    pub requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockDiscord {
    /// The requests captured so far.
    pub fn captured(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Spawn a mock upstream that records every request and answers with the
/// given status and body.
pub async fn spawn_upstream(status: StatusCode, reply: &'static str) -> MockDiscord {
    let requests: Arc<Mutex<Vec<CapturedRequest>>> = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&requests);

    let app = Router::new().fallback(move |req: Request| {
        let captured = Arc::clone(&captured);
        async move {
            let (parts, body) = req.into_parts();
            let bytes = body.collect().await.unwrap().to_bytes();
            captured.lock().unwrap().push(CapturedRequest {
                path: parts.uri.path().to_string(),
                query: parts.uri.query().map(String::from),
                body: String::from_utf8_lossy(&bytes).into_owned(),
                github_event: parts
                    .headers
                    .get("x-github-event")
                    .and_then(|v| v.to_str().ok())
                    .map(String::from),
            });
            (status, reply)
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock upstream");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockDiscord {
        base_url: format!("http://{addr}"),
        requests,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app and return the response.
pub async fn get(app: Router, path: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST with the given body and optional `X-GitHub-Event` header.
pub async fn post(app: Router, path: &str, event: Option<&str>, body: &str) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("content-type", "application/json");
    if let Some(event) = event {
        builder = builder.header("x-github-event", event);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into a string.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Response body must be valid JSON")
}
