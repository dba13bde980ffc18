//! Error types for the prediction pipeline.

use thiserror::Error;

/// Errors that can surface while serving one prediction request.
#[derive(Error, Debug)]
pub enum PredictError {
    /// The request itself is malformed or out of range.
    ///
    /// Recovered locally and surfaced to the caller as a client error; no
    /// model runs for an invalid request.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An internal contract was breached, e.g. the aggregator received the
    /// wrong number of outcomes. A defect, never a user-facing case.
    #[error("protocol violation: expected {expected} model outcomes, got {actual}")]
    ProtocolViolation { expected: usize, actual: usize },

    /// A fitted artifact rejected the feature row it was handed
    #[error("artifact rejected feature row: {0}")]
    Artifact(#[from] artifacts::ArtifactError),

    /// Failure inside the recommendation stage
    #[error(transparent)]
    Recommendation(#[from] anyhow::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PredictError>;
