// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the filesystem lives here, behind
// small path-owning types the other layers call.

// Loads and checks the trained model artifact
pub mod artifact;
