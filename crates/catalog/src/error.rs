//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading the historical film catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error while reading the catalog file
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document could not be deserialized
    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Every record in the document was rejected by the admission rules
    #[error("catalog contains no usable records")]
    Empty,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
