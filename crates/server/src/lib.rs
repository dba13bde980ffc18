//! Server crate for the greenlight prediction service.
//!
//! This crate contains the orchestrator that coordinates all components of
//! the prediction pipeline, plus the HTTP surface exposed to callers.

pub mod api;
pub mod error;
pub mod orchestrator;

pub use api::{AppState, build_router};
pub use error::{ApiError, ApiResult};
pub use orchestrator::{
    FilmDetail, HealthStatus, InputSummary, PredictionReport, PredictionService,
};
