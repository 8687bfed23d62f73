// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Loads the trained model artifact from disk.
//
// The artifact is a single JSON file:
//   model/stress_model.json
//     feature_names_in  ← ordered training-frame columns
//     coefficients      ← one weight per column
//     intercept         ← fitted bias
//
// Loading happens exactly once, at process start, for both the
// web server and the one-shot predict command. A missing or
// malformed artifact aborts startup — the process must never
// reach its first prediction with no model behind it.
//
// Two structural checks run at load:
//   1. the schema must be non-empty and match the coefficient
//      count (a width mismatch would otherwise surface as a
//      confusing per-request error),
//   2. every schema column the encoder has no mapping for is
//      logged as a warning — such columns encode as a constant
//      0.0 on every request, which is worth knowing about once
//      rather than silently degrading forever.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::data::encoder;
use crate::ml::model::LinearModel;

/// Path-owning loader for the model artifact.
pub struct ArtifactStore {
    path: PathBuf,
}

impl ArtifactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read, parse, and structurally check the artifact.
    pub fn load(&self) -> Result<LinearModel> {
        let json = fs::read_to_string(&self.path).with_context(|| {
            format!(
                "Cannot load model artifact from '{}'. \
                 Pass --model-path if it lives elsewhere.",
                self.path.display()
            )
        })?;

        let model: LinearModel = serde_json::from_str(&json).with_context(|| {
            format!("Model artifact '{}' is not valid", self.path.display())
        })?;

        if model.feature_names_in.is_empty() {
            anyhow::bail!(
                "Model artifact '{}' declares an empty feature schema",
                self.path.display()
            );
        }
        if model.coefficients.len() != model.feature_names_in.len() {
            anyhow::bail!(
                "Model artifact '{}' has {} coefficients for {} schema columns",
                self.path.display(),
                model.coefficients.len(),
                model.feature_names_in.len()
            );
        }

        // Surface columns the encoder will zero-fill on every request
        for column in &model.feature_names_in {
            if !encoder::is_known_column(column) {
                tracing::warn!(
                    "Schema column '{}' has no input field and will always encode as 0",
                    column
                );
            }
        }

        tracing::info!(
            "Loaded model artifact with {} features from '{}'",
            model.feature_names_in.len(),
            self.path.display()
        );
        Ok(model)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// Write a JSON string to a unique temp file and return its path.
    fn write_artifact(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir()
            .join(format!("stress_model_{}_{}.json", name, std::process::id()));
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_load_round_trips_a_valid_artifact() {
        let path = write_artifact(
            "valid",
            r#"{
                "feature_names_in": ["Age", "Financial Stress"],
                "coefficients": [0.01, 0.45],
                "intercept": 2.5
            }"#,
        );
        let model = ArtifactStore::new(&path).load().unwrap();
        assert_eq!(model.feature_names_in.len(), 2);
        assert_eq!(model.intercept, 2.5);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_artifact_fails_at_load() {
        // Fail-fast contract: a missing file is an error at startup,
        // never deferred to the first prediction.
        let store = ArtifactStore::new("/nonexistent/stress_model.json");
        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("Cannot load model artifact"));
    }

    #[test]
    fn test_malformed_json_fails_at_load() {
        let path = write_artifact("malformed", "{ not json ");
        assert!(ArtifactStore::new(&path).load().is_err());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_width_mismatch_fails_at_load() {
        let path = write_artifact(
            "mismatch",
            r#"{
                "feature_names_in": ["Age", "Financial Stress"],
                "coefficients": [0.01],
                "intercept": 2.5
            }"#,
        );
        let err = ArtifactStore::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("coefficients"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_empty_schema_fails_at_load() {
        let path = write_artifact(
            "empty",
            r#"{ "feature_names_in": [], "coefficients": [], "intercept": 0.0 }"#,
        );
        assert!(ArtifactStore::new(&path).load().is_err());
        fs::remove_file(path).ok();
    }
}
