//! Outbound forwarding to the Discord incoming-webhook endpoint.
//!
//! [`Forwarder`] rebuilds the inbound delivery as a POST against
//! `{base}/api/webhooks/{id}/{token}/github?wait=1` and hands the
//! downstream response back verbatim. There is no retry: a delivery is
//! forwarded exactly once or not at all.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, HeaderMap, Response};

use crate::error::AppError;

/// Forwards webhook deliveries to Discord.
#[derive(Clone)]
pub struct Forwarder {
    client: reqwest::Client,
    base_url: String,
}

impl Forwarder {
    /// Create a forwarder with a pre-configured HTTP client.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the Discord webhook execution URL for the given id/token pair.
    ///
    /// `?wait=1` asks Discord to respond with the created message (or the
    /// failure) instead of a fire-and-forget 204, so the relay can pass
    /// the real outcome back to GitHub.
    pub fn webhook_url(&self, id: &str, token: &str) -> String {
        format!("{}/api/webhooks/{id}/{token}/github?wait=1", self.base_url)
    }

    /// Forward one delivery and return Discord's response verbatim
    /// (status, headers, body).
    ///
    /// Inbound headers are copied onto the outbound request except for
    /// `Host` and `Content-Length`, which belong to the client and no
    /// longer match after the emote rewrite.
    pub async fn forward(
        &self,
        id: &str,
        token: &str,
        headers: &HeaderMap,
        body: String,
    ) -> Result<Response<Body>, AppError> {
        let url = self.webhook_url(id, token);

        let mut outbound = HeaderMap::new();
        for (name, value) in headers {
            if name == header::HOST || name == header::CONTENT_LENGTH {
                continue;
            }
            outbound.append(name.clone(), value.clone());
        }

        let response = self
            .client
            .post(&url)
            .headers(outbound)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let response_headers = response.headers().clone();
        let bytes = response.bytes().await?;

        let mut reply = Response::new(Body::from(bytes));
        *reply.status_mut() = status;
        for (name, value) in &response_headers {
            // The passthrough body is fully buffered, so a chunked
            // transfer-encoding from Discord no longer applies.
            if name == header::TRANSFER_ENCODING {
                continue;
            }
            reply.headers_mut().append(name.clone(), value.clone());
        }

        Ok(reply)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
