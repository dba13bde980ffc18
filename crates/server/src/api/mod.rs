//! HTTP surface of the prediction service.
//!
//! Three operations, mirroring what the orchestrator exposes:
//! - `POST /predict` — evaluate one hypothetical film
//! - `GET /health` — liveness plus the model roster
//! - `GET /film/{title}` — one catalog record by title

pub mod film;
pub mod health;
pub mod predict;

use crate::orchestrator::PredictionService;
use axum::Router;
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PredictionService>,
}

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(predict::routes())
        .merge(health::routes())
        .merge(film::routes())
        .with_state(state)
}
