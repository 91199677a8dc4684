use axum::Router;
use axum::routing::{get, post};

use crate::AppState;
use crate::views::generate::{generate, method_not_allowed};
use crate::views::health::health;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/api/generate", post(generate).fallback(method_not_allowed))
        .with_state(state)
}
