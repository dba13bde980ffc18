//! # Artifacts Crate
//!
//! Externally fitted model artifacts, consumed read-only. This crate
//! handles:
//! - Deserializing the scaler, vectorizer and classifier documents produced
//!   by the external training pipeline
//! - Cross-checking that the three artifacts agree on feature dimensions
//! - Evaluating them against fused feature rows at request time
//!
//! Training, calibration and the on-disk schema of the documents are owned
//! by the training pipeline; a failure to load any artifact is fatal at
//! startup and the process must not serve predictions.

pub mod classifier;
pub mod error;
pub mod scaler;
pub mod vectorizer;

pub use classifier::LogisticModel;
pub use error::{ArtifactError, Result};
pub use scaler::StandardScaler;
pub use vectorizer::{SparseVector, TfidfVectorizer};

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

/// File names of the three artifact documents inside the artifact directory.
pub const SCALER_FILE: &str = "scaler.json";
pub const VECTORIZER_FILE: &str = "vectorizer.json";
pub const MODEL_FILE: &str = "model.json";

/// The complete set of fitted artifacts the prediction pipeline depends on.
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    pub scaler: StandardScaler,
    pub vectorizer: TfidfVectorizer,
    pub model: LogisticModel,
}

impl ArtifactSet {
    /// Load and validate all three artifacts from a directory.
    ///
    /// Validation covers each artifact's internal consistency and the
    /// cross-artifact contract: the classifier's coefficient vector must
    /// span exactly the scaled numeric block plus the text block.
    pub fn load(dir: &Path) -> Result<Self> {
        let scaler: StandardScaler = load_document(&dir.join(SCALER_FILE))?;
        let vectorizer: TfidfVectorizer = load_document(&dir.join(VECTORIZER_FILE))?;
        let model: LogisticModel = load_document(&dir.join(MODEL_FILE))?;

        let set = Self {
            scaler,
            vectorizer,
            model,
        };
        set.validate()?;

        info!(
            "Artifacts loaded: {} numeric columns, {} vocabulary terms, {} total coefficients",
            set.scaler.width(),
            set.vectorizer.width(),
            set.model.feature_width()
        );
        Ok(set)
    }

    /// Consistency checks for an already-constructed set.
    pub fn validate(&self) -> Result<()> {
        self.scaler.validate()?;
        self.vectorizer.validate()?;

        let expected = self.scaler.width() + self.vectorizer.width();
        if self.model.feature_width() != expected {
            return Err(ArtifactError::Inconsistent(format!(
                "classifier spans {} features but scaler + vectorizer provide {}",
                self.model.feature_width(),
                expected
            )));
        }
        Ok(())
    }
}

fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ArtifactError::Malformed {
        path: path.display().to_string(),
        source,
    })
}
