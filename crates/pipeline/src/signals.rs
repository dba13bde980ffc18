//! Signal models: one fitted classifier plus two simulated signals.
//!
//! Only the first model is real. The synthetic signals perturb the fitted
//! model's success probability inside a bounded interval to emulate the
//! disagreement of independent models; they are deliberately typed and
//! labeled as derived so they are never mistaken for separately trained
//! artifacts.

use crate::error::{PredictError, Result};
use crate::features::FeatureVector;
use artifacts::ArtifactSet;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Display name of the fitted classifier.
pub const FITTED_MODEL_NAME: &str = "Logistic Regression";

/// Names and interval half-widths of the two simulated signals. The widths
/// differ on purpose; each signal has its own fixed personality.
pub const SYNTHETIC_B: (&str, f64) = ("Synthetic B", 0.15);
pub const SYNTHETIC_C: (&str, f64) = ("Synthetic C", 0.12);

/// Binary outcome label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuccessLabel {
    Successful,
    #[serde(rename = "Not Successful")]
    NotSuccessful,
}

impl SuccessLabel {
    pub fn from_probability(p_success: f64) -> Self {
        if p_success > 0.5 {
            Self::Successful
        } else {
            Self::NotSuccessful
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Successful => "Successful",
            Self::NotSuccessful => "Not Successful",
        }
    }
}

/// One model's verdict on a request.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionOutcome {
    #[serde(rename = "model")]
    pub model_name: String,
    #[serde(rename = "prediction")]
    pub label: SuccessLabel,
    /// Probability of success as a percentage, 0-100
    pub success_probability: f64,
    /// `max(p, 1-p) * 100`; always in [50, 100]
    pub confidence: f64,
    /// True for signals derived from the fitted model rather than trained
    pub synthetic: bool,
}

impl PredictionOutcome {
    /// Build an outcome from a raw success probability in [0, 1].
    fn from_probability(model_name: &str, p_success: f64, synthetic: bool) -> Self {
        Self {
            model_name: model_name.to_string(),
            label: SuccessLabel::from_probability(p_success),
            success_probability: p_success * 100.0,
            confidence: p_success.max(1.0 - p_success) * 100.0,
            synthetic,
        }
    }

    /// The raw success probability in [0, 1].
    pub fn probability(&self) -> f64 {
        self.success_probability / 100.0
    }
}

/// A simulated signal that perturbs a base probability inside
/// `[-spread, +spread]` and clamps the result to [0, 1].
#[derive(Debug, Clone)]
pub struct SyntheticSignalModel {
    name: String,
    spread: f64,
}

impl SyntheticSignalModel {
    pub fn new(name: impl Into<String>, spread: f64) -> Self {
        Self {
            name: name.into(),
            spread,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Derive an outcome from the fitted model's success probability.
    pub fn derive(&self, base_probability: f64, rng: &mut impl Rng) -> PredictionOutcome {
        let offset = rng.random_range(-self.spread..=self.spread);
        let p = (base_probability + offset).clamp(0.0, 1.0);
        debug!(
            "{}: base {:.4} offset {:+.4} -> {:.4}",
            self.name, base_probability, offset, p
        );
        PredictionOutcome::from_probability(&self.name, p, true)
    }
}

/// The fixed stack of signal models consulted for every request: the
/// fitted classifier first, then the simulated signals in order.
#[derive(Clone)]
pub struct SignalStack {
    artifacts: Arc<ArtifactSet>,
    synthetic: Vec<SyntheticSignalModel>,
}

impl SignalStack {
    pub fn new(artifacts: Arc<ArtifactSet>) -> Self {
        Self {
            artifacts,
            synthetic: vec![
                SyntheticSignalModel::new(SYNTHETIC_B.0, SYNTHETIC_B.1),
                SyntheticSignalModel::new(SYNTHETIC_C.0, SYNTHETIC_C.1),
            ],
        }
    }

    /// Names of every model in stack order.
    pub fn model_names(&self) -> Vec<String> {
        let mut names = vec![FITTED_MODEL_NAME.to_string()];
        names.extend(self.synthetic.iter().map(|s| s.name().to_string()));
        names
    }

    /// Run every signal against one feature vector.
    ///
    /// Always returns exactly one outcome per model, fitted model first.
    pub fn run(
        &self,
        features: &FeatureVector,
        rng: &mut impl Rng,
    ) -> Result<Vec<PredictionOutcome>> {
        let (_, proba) = self
            .artifacts
            .model
            .predict(&features.numeric, &features.text)
            .map_err(PredictError::Artifact)?;
        let base = proba[1];

        let mut outcomes = Vec::with_capacity(1 + self.synthetic.len());
        outcomes.push(PredictionOutcome::from_probability(
            FITTED_MODEL_NAME,
            base,
            false,
        ));
        for signal in &self.synthetic {
            outcomes.push(signal.derive(base, rng));
        }
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artifacts::{LogisticModel, SparseVector, StandardScaler, TfidfVectorizer};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn stack_with_intercept(intercept: f64) -> SignalStack {
        SignalStack::new(Arc::new(ArtifactSet {
            scaler: StandardScaler {
                mean: vec![0.0, 0.0],
                scale: vec![1.0, 1.0],
            },
            vectorizer: TfidfVectorizer {
                vocabulary: HashMap::new(),
                idf: vec![],
            },
            model: LogisticModel {
                coefficients: vec![0.0, 0.0],
                intercept,
            },
        }))
    }

    fn features() -> FeatureVector {
        FeatureVector {
            numeric: vec![1.0, 2.0],
            text: SparseVector {
                indices: vec![],
                values: vec![],
                width: 0,
            },
        }
    }

    #[test]
    fn stack_produces_three_outcomes_fitted_first() {
        let stack = stack_with_intercept(0.0);
        let mut rng = StdRng::seed_from_u64(1);

        let outcomes = stack.run(&features(), &mut rng).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].model_name, FITTED_MODEL_NAME);
        assert!(!outcomes[0].synthetic);
        assert!(outcomes[1].synthetic && outcomes[2].synthetic);
    }

    #[test]
    fn synthetic_probabilities_stay_clamped() {
        // intercept 10 => fitted probability ~ 1.0; offsets cannot push past it
        let stack = stack_with_intercept(10.0);
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..200 {
            let outcomes = stack.run(&features(), &mut rng).unwrap();
            for outcome in &outcomes {
                let p = outcome.probability();
                assert!((0.0..=1.0).contains(&p), "probability {} out of range", p);
            }
        }
    }

    #[test]
    fn confidence_is_always_at_least_fifty() {
        let stack = stack_with_intercept(0.0);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            for outcome in stack.run(&features(), &mut rng).unwrap() {
                assert!(
                    (50.0..=100.0).contains(&outcome.confidence),
                    "confidence {} out of range",
                    outcome.confidence
                );
            }
        }
    }

    #[test]
    fn synthetic_offsets_respect_their_spread() {
        let signal = SyntheticSignalModel::new("Narrow", 0.12);
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..500 {
            let outcome = signal.derive(0.5, &mut rng);
            let p = outcome.probability();
            assert!(
                (0.38..=0.62).contains(&p),
                "offset escaped the +/-0.12 interval: {}",
                p
            );
        }
    }

    #[test]
    fn fixed_seed_reproduces_identical_outcomes() {
        let stack = stack_with_intercept(0.4);

        let a = stack
            .run(&features(), &mut StdRng::seed_from_u64(1234))
            .unwrap();
        let b = stack
            .run(&features(), &mut StdRng::seed_from_u64(1234))
            .unwrap();

        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.success_probability, y.success_probability);
            assert_eq!(x.label, y.label);
        }
    }

    #[test]
    fn probability_exactly_half_labels_not_successful() {
        assert_eq!(
            SuccessLabel::from_probability(0.5),
            SuccessLabel::NotSuccessful
        );
        assert_eq!(
            SuccessLabel::from_probability(0.500001),
            SuccessLabel::Successful
        );
    }
}
