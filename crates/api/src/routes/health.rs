//! Health check endpoint.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `true` while the process is serving.
    pub ok: bool,
}

/// Health check handler.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Creates health check routes.
pub fn routes<S: Send + Sync + 'static>() -> Router<AppState<S>> {
    Router::new().route("/health", get(health_check))
}
