use serde::{Deserialize, Serialize};

use super::defaults;

/// Tuning constants for text, synthesis, and decay scoring.
///
/// The bands are chosen so that substring matches always land in
/// `(substring_floor, substring_floor + substring_span)` and token overlap in
/// `[overlap_floor, overlap_cap]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Confidence given to a contribution tracked without one.
    pub default_confidence: f64,
    /// Synthesis confidence when no source confidences are known.
    pub no_sources_confidence: f64,
    /// Score for texts equal after trim + case-fold but not byte-equal.
    pub normalized_match_score: f64,
    /// Lower (exclusive) bound of the substring band.
    pub substring_floor: f64,
    /// Width of the substring band, scaled by the shorter/longer length ratio.
    pub substring_span: f64,
    /// Score of a token-overlap comparison with no shared tokens.
    pub overlap_floor: f64,
    /// Width of the token-overlap band, scaled by Jaccard similarity.
    pub overlap_span: f64,
    /// Hard cap on token-overlap scores.
    pub overlap_cap: f64,
    /// Multiplier applied to consensus under `conflict_resolution`.
    pub conflict_penalty: f64,
    /// Multiplier applied to the strongest source under `build_on`.
    pub build_on_factor: f64,
    /// Exponential decay constant `k` in `c · e^(-k·hours)`.
    pub decay_rate_per_hour: f64,
    /// Linear penalty per transformation.
    pub transformation_decay_rate: f64,
    /// Floor for transformation decay.
    pub min_confidence: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            default_confidence: defaults::DEFAULT_CONTRIBUTION_CONFIDENCE,
            no_sources_confidence: defaults::DEFAULT_NO_SOURCES_CONFIDENCE,
            normalized_match_score: defaults::DEFAULT_NORMALIZED_MATCH_SCORE,
            substring_floor: defaults::DEFAULT_SUBSTRING_FLOOR,
            substring_span: defaults::DEFAULT_SUBSTRING_SPAN,
            overlap_floor: defaults::DEFAULT_OVERLAP_FLOOR,
            overlap_span: defaults::DEFAULT_OVERLAP_SPAN,
            overlap_cap: defaults::DEFAULT_OVERLAP_CAP,
            conflict_penalty: defaults::DEFAULT_CONFLICT_PENALTY,
            build_on_factor: defaults::DEFAULT_BUILD_ON_FACTOR,
            decay_rate_per_hour: defaults::DEFAULT_DECAY_RATE_PER_HOUR,
            transformation_decay_rate: defaults::DEFAULT_TRANSFORMATION_DECAY_RATE,
            min_confidence: defaults::DEFAULT_MIN_CONFIDENCE,
        }
    }
}
