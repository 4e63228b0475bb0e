use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
/// A non-2xx *response* from Discord is not an error -- it passes through
/// verbatim; only failures that never produced a downstream response land
/// here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The caller supplied a path without webhook id and token.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The outbound forward failed outright (connect error, timeout, DNS).
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "Forwarding to Discord failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "BAD_GATEWAY",
                    "Forwarding the webhook to Discord failed".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: message,
            code,
        };

        (status, axum::Json(body)).into_response()
    }
}
