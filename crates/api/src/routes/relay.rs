//! The relay endpoint: classify one GitHub webhook delivery and either
//! forward it to Discord or acknowledge it without forwarding.
//!
//! Suppressed deliveries are answered with 203 Non-Authoritative
//! Information -- deliberately distinguishable from both success and
//! failure, meaning "accepted but intentionally not relayed".

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use hookgate_core::classify::Classification;
use hookgate_core::emote::rewrite_emotes;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Header naming the kind of webhook event (`push`, `delete`, ...).
pub const EVENT_HEADER: &str = "x-github-event";

/// Fixed reply for non-POST requests (uptime probes, curious browsers).
pub const LIVENESS_REPLY: &str =
    "hookgate lives! Ignoring this request because it is not a POST.";

/// Fixed acknowledgement body for suppressed deliveries.
pub const SUPPRESSED_REPLY: &str = "Ignored by hookgate";

/// Hint returned when the path does not carry a webhook id and token.
pub const PATH_HINT: &str = "Make sure to specify webhook components like /:id/:token";

/// Relay entrypoint. Mounted as the router fallback so it sees every
/// method and path.
pub async fn handle(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Response> {
    // Don't apply any logic to non-POSTs.
    if method != Method::POST {
        return Ok(LIVENESS_REPLY.into_response());
    }

    // A wholly non-JSON body classifies as null: every flag reads false
    // and the delivery is forwarded as-is.
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let event = headers.get(EVENT_HEADER).and_then(|v| v.to_str().ok());
    let sender = payload.pointer("/sender/login").and_then(Value::as_str);

    let class = Classification::classify(event, &payload);

    // Telemetry fields are emitted before the suppression branch so
    // ignored deliveries are just as visible as forwarded ones.
    tracing::info!(
        github_event = event.unwrap_or(""),
        sender = sender.unwrap_or(""),
        is_coveralls = class.is_coveralls,
        is_github_bot = class.is_github_bot,
        is_sentry = class.is_sentry,
        is_dependabot_branch_delete = class.is_dependabot_branch_delete,
        is_bot_pr_approve = class.is_bot_pr_approve,
        is_empty_review = class.is_empty_review,
        is_black_non_main_push = class.is_black_non_main_push,
        is_bot_payload = class.is_bot_payload(),
        is_noisy_user_action = class.is_noisy_user_action(),
        should_ignore = class.should_ignore(),
        "Classified webhook delivery"
    );

    if class.should_ignore() {
        return Ok(
            (StatusCode::NON_AUTHORITATIVE_INFORMATION, SUPPRESSED_REPLY).into_response(),
        );
    }

    let (id, token) = split_webhook_path(uri.path())
        .ok_or_else(|| AppError::BadRequest(PATH_HINT.to_string()))?;

    let text = String::from_utf8_lossy(&body);
    let outbound_body = rewrite_emotes(&text);

    state.forwarder.forward(id, token, &headers, outbound_body).await
}

/// Split `/{id}/{token}` into its two segments. Both must be non-empty;
/// anything past the first two segments is ignored.
fn split_webhook_path(path: &str) -> Option<(&str, &str)> {
    let mut segments = path.trim_start_matches('/').split('/');
    let id = segments.next().filter(|s| !s.is_empty())?;
    let token = segments.next().filter(|s| !s.is_empty())?;
    Some((id, token))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
