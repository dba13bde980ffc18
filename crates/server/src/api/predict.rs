//! Prediction endpoint

use axum::{Json, Router, extract::State, routing::post};
use pipeline::PredictionRequest;
use tracing::debug;

use crate::api::AppState;
use crate::error::ApiResult;
use crate::orchestrator::PredictionReport;

/// POST /predict
///
/// Evaluates one hypothetical film. Invalid input (non-positive budget,
/// blank genre) maps to 400 before any model runs; everything else the
/// pipeline raises maps to 500 with a structured payload.
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> ApiResult<Json<PredictionReport>> {
    debug!(
        "predict request: budget {} rating {} genre {:?}",
        request.budget, request.rating, request.genre
    );
    let report = state.service.predict(&request)?;
    Ok(Json(report))
}

/// Build prediction routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/predict", post(predict))
}
