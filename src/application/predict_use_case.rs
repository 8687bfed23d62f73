// ============================================================
// Layer 2 — Predict Use Case
// ============================================================
// Orchestrates one prediction end to end:
//
//   Step 1: Validate the record     (Layer 3 - domain)
//   Step 2: Encode against schema   (Layer 4 - data)
//   Step 3: Score the vector        (Layer 5 - ml)
//   Step 4: Classify into a tier    (Layer 3 - domain)
//
// The use case owns the loaded scorer and nothing else. It is
// the explicitly constructed, read-only context that both the
// web handlers and the CLI share — there is no hidden process
// global, so the whole pipeline is testable with a stub scorer
// and no UI at all.

use anyhow::Result;

use crate::data::encoder;
use crate::domain::record::StudentRecord;
use crate::domain::tier::StressTier;
use crate::domain::traits::Scorer;
use crate::domain::validate;
use crate::infra::artifact::ArtifactStore;

/// The outcome of one prediction: the raw score and its band.
/// Ephemeral — recomputed on every submission, never cached.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub score: f64,
    pub tier:  StressTier,
}

/// Owns the loaded model and runs the predict pipeline.
pub struct PredictUseCase {
    scorer: Box<dyn Scorer + Send + Sync>,
}

impl PredictUseCase {
    /// Build the use case from the artifact on disk.
    /// Fails here, at startup, if the artifact is unusable.
    pub fn load(model_path: &str) -> Result<Self> {
        let model = ArtifactStore::new(model_path).load()?;
        Ok(Self::new(Box::new(model)))
    }

    /// Build the use case around an already-loaded scorer.
    /// This is the constructor tests use to inject stubs.
    pub fn new(scorer: Box<dyn Scorer + Send + Sync>) -> Self {
        Self { scorer }
    }

    /// Run one prediction for one record.
    pub fn execute(&self, record: &StudentRecord) -> Result<Prediction> {
        // ── Step 1: Validate against the declared field ranges ────────────────
        validate::validate(record)?;

        // ── Step 2: Encode to the trained schema's column order ───────────────
        let features = encoder::encode(record, self.scorer.feature_names());

        // ── Step 3: Score ─────────────────────────────────────────────────────
        let score = self.scorer.score(&features)?;

        // ── Step 4: Classify into a band ──────────────────────────────────────
        let tier = StressTier::classify(score);
        tracing::info!("Predicted stress level {:.2} ({})", score, tier.label());

        Ok(Prediction { score, tier })
    }
}
