//! Fitted logistic-regression classifier over the fused feature row.

use crate::error::{ArtifactError, Result};
use crate::vectorizer::SparseVector;
use serde::Deserialize;

/// Binary logistic-regression model fitted by the external training
/// pipeline.
///
/// The coefficient vector spans the fused feature row: the scaled numeric
/// block first, then the tf-idf text block, in that fixed order. The model
/// is consumed as-is; no retraining or calibration happens here.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModel {
    /// Total feature width the model was fitted on.
    pub fn feature_width(&self) -> usize {
        self.coefficients.len()
    }

    /// Probability vector `[p_not_successful, p_successful]` for one fused row.
    pub fn predict_proba(&self, numeric: &[f64], text: &SparseVector) -> Result<[f64; 2]> {
        let row_width = numeric.len() + text.width;
        if row_width != self.coefficients.len() {
            return Err(ArtifactError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: row_width,
            });
        }

        let mut z = self.intercept;
        for (i, &x) in numeric.iter().enumerate() {
            z += self.coefficients[i] * x;
        }
        for (&idx, &v) in text.indices.iter().zip(text.values.iter()) {
            z += self.coefficients[numeric.len() + idx] * v;
        }

        let p_success = sigmoid(z);
        Ok([1.0 - p_success, p_success])
    }

    /// Class label (1 = successful) plus the probability vector.
    pub fn predict(&self, numeric: &[f64], text: &SparseVector) -> Result<(u8, [f64; 2])> {
        let proba = self.predict_proba(numeric, text)?;
        let label = u8::from(proba[1] > 0.5);
        Ok((label, proba))
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_text(width: usize) -> SparseVector {
        SparseVector {
            indices: vec![],
            values: vec![],
            width,
        }
    }

    #[test]
    fn zero_model_predicts_even_odds() {
        let model = LogisticModel {
            coefficients: vec![0.0, 0.0],
            intercept: 0.0,
        };

        let (label, proba) = model.predict(&[1.0, -1.0], &empty_text(0)).unwrap();
        assert_eq!(label, 0, "p == 0.5 must not count as successful");
        assert!((proba[1] - 0.5).abs() < 1e-12);
        assert!((proba[0] + proba[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn positive_logit_predicts_success() {
        let model = LogisticModel {
            coefficients: vec![2.0, 0.5],
            intercept: -0.5,
        };
        let text = SparseVector {
            indices: vec![0],
            values: vec![1.0],
            width: 1,
        };

        let (label, proba) = model.predict(&[1.0], &text).unwrap();
        // z = -0.5 + 2.0 + 0.5 = 2.0
        assert_eq!(label, 1);
        assert!(proba[1] > 0.85 && proba[1] < 0.9);
    }

    #[test]
    fn width_mismatch_is_rejected() {
        let model = LogisticModel {
            coefficients: vec![1.0, 1.0, 1.0],
            intercept: 0.0,
        };

        let result = model.predict_proba(&[1.0], &empty_text(1));
        assert!(matches!(
            result,
            Err(ArtifactError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }
}
