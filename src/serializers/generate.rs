use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Exact message required for a missing or invalid `text` field.
pub const INVALID_TEXT_MESSAGE: &str = "Field `text` (non-empty string) is required";

/// Terminal request failures.
///
/// Completion text that fails to parse as JSON is NOT one of these; it
/// degrades to a 200 raw-text payload.
#[derive(Debug)]
pub enum ApiError {
    /// Non-POST method on the extraction route. No remote call is made.
    MethodNotAllowed,
    /// Missing, non-string, or whitespace-only `text`. No remote call is made.
    InvalidText,
    /// The remote completion call failed (network, auth, quota, ...).
    Upstream(String),
}

impl ApiError {
    /// Wraps an upstream failure, keeping the best available message.
    pub fn upstream(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            Self::Upstream("Unknown error".to_string())
        } else {
            Self::Upstream(message)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "POST")],
                Json(json!({ "error": "Method Not Allowed" })),
            )
                .into_response(),
            Self::InvalidText => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": INVALID_TEXT_MESSAGE })),
            )
                .into_response(),
            Self::Upstream(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
        }
    }
}
