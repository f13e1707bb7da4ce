/// Text similarity scoring used for attribution.
///
/// The heuristic calculator in `provenant-confidence` is the default
/// implementation. Implementations must be pure: the same inputs always give
/// the same score, and the score is always within [0.0, 1.0].
pub trait ITextScorer: Send + Sync {
    /// Score how well `query_text` is attributable to `source_text`.
    fn score(&self, source_text: &str, query_text: &str) -> f64;

    /// Human-readable scorer name, recorded in logs.
    fn name(&self) -> &str;
}
