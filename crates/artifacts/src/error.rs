//! Error types for artifact loading and evaluation.

use thiserror::Error;

/// Errors raised by the fitted-artifact layer.
///
/// Any variant produced during startup means the model set is unavailable
/// and the process must refuse to serve; none of them is recoverable
/// per-request.
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// Artifact file could not be read
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Artifact document could not be deserialized
    #[error("malformed artifact {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The artifacts disagree with each other or with their own contents
    #[error("inconsistent artifact set: {0}")]
    Inconsistent(String),

    /// An input row did not match the fitted dimensionality
    #[error("dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ArtifactError>;
