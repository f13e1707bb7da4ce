//! Confidence decay.
//!
//! - temporal: `confidence × e^(-k × hours)`, continuous and small (~3% per day by default)
//! - transformation: linear penalty per derivation step, floored at `min_confidence`
//!
//! Neither ever raises confidence above its (clamped) input.

use provenant_core::confidence::clamp_unit;
use provenant_core::config::ConfidenceConfig;
use provenant_core::constants::MS_PER_HOUR;

/// Temporal decay after `elapsed_ms` milliseconds.
pub fn temporal(confidence: f64, elapsed_ms: u64, config: &ConfidenceConfig) -> f64 {
    let base = clamp_unit(confidence);
    if elapsed_ms == 0 {
        return base;
    }
    let hours = elapsed_ms as f64 / MS_PER_HOUR;
    let factor = (-config.decay_rate_per_hour.max(0.0) * hours).exp();
    (base * factor).clamp(0.0, base)
}

/// Decay for a value that passed through `transformations` derivation steps.
///
/// `complexity` scales the per-step penalty; non-finite or negative values count as 1.0 / 0.0.
pub fn transformation(
    confidence: f64,
    transformations: u32,
    complexity: f64,
    config: &ConfidenceConfig,
) -> f64 {
    let base = clamp_unit(confidence);
    let complexity = if complexity.is_finite() {
        complexity.max(0.0)
    } else {
        1.0
    };
    let penalty = config.transformation_decay_rate * f64::from(transformations) * complexity;
    (base - penalty).max(config.min_confidence).min(base)
}
