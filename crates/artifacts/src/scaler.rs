//! Fitted standard scaler for the numeric feature block.

use crate::error::{ArtifactError, Result};
use serde::Deserialize;

/// Per-column standardization fitted by the external training pipeline.
///
/// `transform` maps each value to `(x - mean) / scale`, matching the
/// transform the classifier was trained against. The scaler is read-only;
/// refitting is out of scope.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Number of numeric columns the scaler was fitted on.
    pub fn width(&self) -> usize {
        self.mean.len()
    }

    /// Internal consistency check, run once at load time.
    pub fn validate(&self) -> Result<()> {
        if self.mean.len() != self.scale.len() {
            return Err(ArtifactError::Inconsistent(format!(
                "scaler mean has {} columns but scale has {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.scale.iter().any(|&s| s == 0.0 || !s.is_finite()) {
            return Err(ArtifactError::Inconsistent(
                "scaler contains zero or non-finite scale values".to_string(),
            ));
        }
        Ok(())
    }

    /// Standardize one row of numeric features.
    pub fn transform(&self, row: &[f64]) -> Result<Vec<f64>> {
        if row.len() != self.mean.len() {
            return Err(ArtifactError::DimensionMismatch {
                expected: self.mean.len(),
                actual: row.len(),
            });
        }
        Ok(row
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(&x, (&mean, &scale))| (x - mean) / scale)
            .collect())
    }
}
