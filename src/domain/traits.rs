// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// the application layer can swap implementations without
// changing the code that uses them. For example:
//   - LinearModel implements Scorer
//   - A test stub returning a fixed score also implements Scorer
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

/// Any component that can turn an encoded feature vector into
/// a stress score.
///
/// Implementations:
///   - LinearModel → the deserialized regression artifact
///   - test stubs  → fixed scores for band-boundary scenarios
pub trait Scorer {
    /// The ordered feature columns this scorer was fit against.
    /// The encoder must produce vectors aligned to exactly this
    /// set, in this order.
    fn feature_names(&self) -> &[String];

    /// Score a feature vector aligned to `feature_names`.
    fn score(&self, features: &[f64]) -> Result<f64>;
}
