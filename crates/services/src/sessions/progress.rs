use serde::Serialize;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    /// Position of the cursor as a fraction of the bank, in `[0, 1)`.
    /// Informational only; completion is signalled by `is_complete`.
    pub fraction: f64,
    pub is_complete: bool,
}
