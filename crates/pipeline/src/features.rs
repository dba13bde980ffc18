//! Feature builder: fuse request attributes and synthesized text into the
//! fixed-layout row the classifier was fitted on.

use crate::error::{PredictError, Result};
use crate::request::PredictionRequest;
use artifacts::{ArtifactSet, SparseVector};
use std::sync::Arc;

/// Placeholder popularity for attributes the request protocol omits.
pub const DEFAULT_POPULARITY: f64 = 50.0;
/// Placeholder runtime in minutes.
pub const DEFAULT_RUNTIME: f64 = 120.0;
/// Placeholder vote count.
pub const DEFAULT_VOTE_COUNT: f64 = 1000.0;

/// Number of numeric columns in the fused row.
pub const NUMERIC_FEATURE_COUNT: usize = 5;

/// The fused numeric + text representation of one request.
///
/// `numeric` is already scaled; `text` is the tf-idf row. Their
/// concatenation order (numeric first) is a contract with the fitted
/// classifier and must never change independently of the artifacts.
#[derive(Debug, Clone)]
pub struct FeatureVector {
    pub numeric: Vec<f64>,
    pub text: SparseVector,
}

impl FeatureVector {
    /// Total width of the fused row.
    pub fn width(&self) -> usize {
        self.numeric.len() + self.text.width
    }
}

/// Builds feature vectors against one fitted artifact set.
#[derive(Clone)]
pub struct FeatureBuilder {
    artifacts: Arc<ArtifactSet>,
}

impl FeatureBuilder {
    pub fn new(artifacts: Arc<ArtifactSet>) -> Self {
        Self { artifacts }
    }

    /// The raw numeric tuple in its fixed order:
    /// `(budget, popularity, runtime, rating, vote_count)`.
    ///
    /// The placeholder values stand in for attributes the request protocol
    /// intentionally omits. They are part of the output-stability contract
    /// and must be preserved bit-for-bit.
    pub fn numeric_tuple(request: &PredictionRequest) -> [f64; NUMERIC_FEATURE_COUNT] {
        [
            request.budget,
            DEFAULT_POPULARITY,
            DEFAULT_RUNTIME,
            request.rating,
            DEFAULT_VOTE_COUNT,
        ]
    }

    /// Build the fused feature vector for one request.
    ///
    /// `synthetic_overview` is the placeholder description produced by the
    /// overview synthesizer; it is vectorized together with the raw genre
    /// string, matching the text channel the classifier was trained on.
    pub fn build(
        &self,
        request: &PredictionRequest,
        synthetic_overview: &str,
    ) -> Result<FeatureVector> {
        if request.budget <= 0.0 || !request.budget.is_finite() {
            return Err(PredictError::InvalidInput(format!(
                "budget must be a positive number, got {}",
                request.budget
            )));
        }

        let numeric = self
            .artifacts
            .scaler
            .transform(&Self::numeric_tuple(request))?;

        let combined_text = format!("{} {}", synthetic_overview, request.genre);
        let text = self.artifacts.vectorizer.transform(&combined_text);

        Ok(FeatureVector { numeric, text })
    }
}
