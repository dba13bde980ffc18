//! Ensemble aggregator: majority vote plus probability averaging.

use crate::error::{PredictError, Result};
use crate::signals::{PredictionOutcome, SuccessLabel};
use serde::Serialize;

/// Number of model outcomes the aggregator requires.
pub const ENSEMBLE_SIZE: usize = 3;

/// Vote tally across the stack; the two counts always sum to
/// [`ENSEMBLE_SIZE`].
#[derive(Debug, Clone, Serialize)]
pub struct VoteCount {
    pub successful: u32,
    pub not_successful: u32,
}

/// The combined decision over all three signals.
#[derive(Debug, Clone, Serialize)]
pub struct EnsembleOutcome {
    #[serde(rename = "prediction")]
    pub label: SuccessLabel,
    /// Arithmetic mean of the three raw probabilities, as a percentage
    pub average_probability: f64,
    pub votes: VoteCount,
}

/// Combine exactly [`ENSEMBLE_SIZE`] outcomes.
///
/// Label is Successful iff at least two of the three binary labels vote
/// Successful; ties are impossible with three voters. The averaged
/// probability uses the raw per-model probabilities, not the post-vote
/// labels. Receiving any other outcome count is an internal defect.
pub fn aggregate(outcomes: &[PredictionOutcome]) -> Result<EnsembleOutcome> {
    if outcomes.len() != ENSEMBLE_SIZE {
        return Err(PredictError::ProtocolViolation {
            expected: ENSEMBLE_SIZE,
            actual: outcomes.len(),
        });
    }

    let successful = outcomes
        .iter()
        .filter(|o| o.label == SuccessLabel::Successful)
        .count() as u32;
    let not_successful = ENSEMBLE_SIZE as u32 - successful;

    let label = if successful >= 2 {
        SuccessLabel::Successful
    } else {
        SuccessLabel::NotSuccessful
    };

    let average_probability = outcomes
        .iter()
        .map(PredictionOutcome::probability)
        .sum::<f64>()
        / ENSEMBLE_SIZE as f64
        * 100.0;

    Ok(EnsembleOutcome {
        label,
        average_probability,
        votes: VoteCount {
            successful,
            not_successful,
        },
    })
}
