//! The incoming success-prediction request.

use crate::error::{PredictError, Result};
use serde::Deserialize;

/// One hypothetical film to evaluate.
///
/// Ephemeral: constructed from caller input, validated, consumed by the
/// feature builder and the recommendation engine, then discarded.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest {
    /// Production budget in currency units; must be positive
    pub budget: f64,
    /// Target audience rating, expected on the 0-10 scale
    pub rating: f64,
    /// Comma-separated genre names, e.g. `"Action, Adventure"`
    pub genre: String,
}

impl PredictionRequest {
    /// Reject requests no model should ever see.
    pub fn validate(&self) -> Result<()> {
        if self.budget <= 0.0 || !self.budget.is_finite() {
            return Err(PredictError::InvalidInput(format!(
                "budget must be a positive number, got {}",
                self.budget
            )));
        }
        if self.genre.trim().is_empty() {
            return Err(PredictError::InvalidInput(
                "genre must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The genre string parsed into trimmed entries, empties dropped.
    pub fn genre_list(&self) -> Vec<String> {
        self.genre
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect()
    }
}
