// ============================================================
// Layer 3 — Stress Tier Classifier
// ============================================================
// Maps the raw regression score onto one of four ordered bands,
// each with a fixed interpretation, display color, and advice.
//
// The bands are half-open on the right:
//
//   score < 3          → Low
//   3 ≤ score < 6      → Moderate
//   6 ≤ score < 8      → High
//   score ≥ 8          → Very High
//
// The model is an unconstrained regression, so classify() must
// be total over the whole real line — negative scores land in
// Low, anything at or above 8 in Very High.

use serde::Serialize;

/// One of the four ordered stress bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StressTier {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl StressTier {
    /// Classify a raw score into its band. Boundaries are
    /// closed on the left: 3.0 is Moderate, 8.0 is Very High.
    pub fn classify(score: f64) -> Self {
        if score < 3.0 {
            Self::Low
        } else if score < 6.0 {
            Self::Moderate
        } else if score < 8.0 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// Human-readable band name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low      => "Low",
            Self::Moderate => "Moderate",
            Self::High     => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// CSS color the interpretation line is rendered in
    pub fn color(&self) -> &'static str {
        match self {
            Self::Low      => "green",
            Self::Moderate => "orange",
            Self::High     => "red",
            Self::VeryHigh => "darkred",
        }
    }

    /// The one-sentence interpretation shown under the score
    pub fn interpretation(&self) -> &'static str {
        match self {
            Self::Low =>
                "Low stress level. You seem to be managing well.",
            Self::Moderate =>
                "Moderate stress level. This is common among students. \
                 Consider stress management techniques if you feel overwhelmed.",
            Self::High =>
                "High stress level. It might be beneficial to seek support \
                 or implement stress reduction strategies.",
            Self::VeryHigh =>
                "Very high stress level. It's recommended to talk to a \
                 counselor or mental health professional for support.",
        }
    }

    /// Heading of the tips block for this band
    pub fn tips_title(&self) -> &'static str {
        match self {
            Self::Low      => "Tips to maintain low stress:",
            Self::Moderate => "Tips to manage moderate stress:",
            Self::High     => "Tips to reduce high stress:",
            Self::VeryHigh => "Tips for very high stress:",
        }
    }

    /// The fixed advice list for this band
    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            Self::Low => &[
                "Continue your current stress management techniques",
                "Practice regular self-care activities like exercise and hobbies",
                "Use positive self-talk to reinforce good habits",
                "Maintain relaxation techniques like deep breathing or meditation",
            ],
            Self::Moderate => &[
                "Increase physical activity to release tension",
                "Try new relaxation techniques like yoga or tai chi",
                "Implement time management strategies to reduce daily pressures",
                "Connect more with supportive friends and family",
                "Consider cutting back on caffeine and sugar intake",
            ],
            Self::High => &[
                "Prioritize sleep and establish a consistent sleep routine",
                "Seek professional help or counseling for additional support",
                "Use stress-stopping techniques like counting to 10 or taking breaks",
                "Analyze and potentially reduce commitments that cause stress",
                "Practice mindfulness or guided imagery to calm your mind",
                "Consider lifestyle changes that might be contributing to stress",
            ],
            Self::VeryHigh => &[
                "Seek immediate professional help or counseling",
                "Prioritize self-care and stress reduction activities",
                "Communicate with trusted friends, family, or mentors about your stress",
                "Consider temporary adjustments to your workload or commitments",
                "Practice relaxation techniques regularly (e.g., deep breathing, meditation)",
                "Ensure you're getting adequate sleep and nutrition",
            ],
        }
    }
}
