// ============================================================
// Layer 5 — Regression Model
// ============================================================
// The deserialized form of the trained artifact: an ordered
// feature schema, one coefficient per schema column, and an
// intercept. Prediction is the closed-form linear combination
//
//   score = intercept + Σ coefficients[i] * features[i]
//
// The model is read-only for the process lifetime. There is no
// training or incremental update here — fitting happened
// offline, this layer only evaluates.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::traits::Scorer;

/// A fitted linear regression, loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Ordered column names of the training frame — the contract
    /// every inference-time vector must match exactly
    pub feature_names_in: Vec<String>,

    /// One weight per schema column, same order
    pub coefficients: Vec<f64>,

    /// The fitted bias term
    pub intercept: f64,
}

impl LinearModel {
    /// Score one feature vector. The vector must be aligned to
    /// `feature_names_in`; a width mismatch is the only runtime
    /// failure a well-formed artifact can produce.
    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            anyhow::bail!(
                "feature vector has {} values but the model expects {}",
                features.len(),
                self.coefficients.len()
            );
        }
        let weighted: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(coefficient, value)| coefficient * value)
            .sum();
        Ok(self.intercept + weighted)
    }
}

impl Scorer for LinearModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names_in
    }

    fn score(&self, features: &[f64]) -> Result<f64> {
        self.predict(features)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn toy_model() -> LinearModel {
        LinearModel {
            feature_names_in: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            coefficients:     vec![1.0, -2.0, 0.5],
            intercept:        4.0,
        }
    }

    #[test]
    fn test_predict_is_intercept_plus_dot_product() {
        let model = toy_model();
        // 4.0 + 1*2 - 2*1 + 0.5*4 = 6.0
        let score = model.predict(&[2.0, 1.0, 4.0]).unwrap();
        assert!((score - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector_predicts_the_intercept() {
        let model = toy_model();
        assert_eq!(model.predict(&[0.0, 0.0, 0.0]).unwrap(), 4.0);
    }

    #[test]
    fn test_width_mismatch_is_an_error() {
        let model = toy_model();
        let err = model.predict(&[1.0, 2.0]).unwrap_err();
        assert!(err.to_string().contains("expects 3"));
    }

    #[test]
    fn test_negative_scores_are_legal() {
        // Unconstrained regression: nothing clamps the output
        let model = LinearModel {
            feature_names_in: vec!["a".to_string()],
            coefficients:     vec![-10.0],
            intercept:        0.0,
        };
        assert_eq!(model.predict(&[1.0]).unwrap(), -10.0);
    }
}
