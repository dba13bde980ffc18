//! Health check endpoint

use axum::{Json, Router, extract::State, routing::get};

use crate::api::AppState;
use crate::orchestrator::HealthStatus;

/// GET /health
///
/// Always succeeds once startup completed; reports the model roster so
/// operators can see the synthetic signals for what they are.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.service.health())
}

/// Build health check routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
