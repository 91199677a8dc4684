use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use tracing::warn;

use crate::AppState;
use crate::models::outcome::ExtractionOutcome;
use crate::serializers::generate::ApiError;

/// POST handler: forward `text` to the model and answer with the parsed
/// records, or the raw completion fallback.
///
/// An unparseable request body is treated the same as a missing `text`
/// field, so the rejection is folded into the validation path instead of
/// surfacing axum's default response.
pub async fn generate(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ExtractionOutcome>, ApiError> {
    let body = body.map(|Json(v)| v).unwrap_or(Value::Null);
    let text = body
        .get("text")
        .and_then(Value::as_str)
        .filter(|t| !t.trim().is_empty())
        .ok_or(ApiError::InvalidText)?
        .to_owned();

    let outcome = state.extractor.extract(&text).await.map_err(|e| {
        warn!(error = %e, "generate: upstream call failed");
        ApiError::upstream(e)
    })?;
    Ok(Json(outcome))
}

/// Any non-POST method on the extraction route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
