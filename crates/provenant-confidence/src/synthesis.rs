//! Synthesis confidence aggregation.
//!
//! Every source confidence is clamped to [0.0, 1.0] before aggregation, so
//! invalid inputs never leak out of range. An empty source list yields the
//! configured "unknown" default (0.5), not zero.

use provenant_core::confidence::clamp_unit;
use provenant_core::config::ConfidenceConfig;
use serde::{Deserialize, Serialize};

/// How a synthesis combined its sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisStrategy {
    /// Sources agree: weighted mean.
    Consensus,
    /// Weighted mean of the sources.
    WeightedMerge,
    /// Sources disagree: consensus discounted by the spread between sources.
    ConflictResolution,
    /// Synthesis extends the strongest source.
    BuildOn,
    /// Any other tag: plain mean.
    Average,
}

impl SynthesisStrategy {
    /// Parse a synthesis type tag. Unrecognised tags fall back to `Average`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "consensus" => Self::Consensus,
            "weighted_merge" => Self::WeightedMerge,
            "conflict_resolution" => Self::ConflictResolution,
            "build_on" | "builds_on" => Self::BuildOn,
            _ => Self::Average,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consensus => "consensus",
            Self::WeightedMerge => "weighted_merge",
            Self::ConflictResolution => "conflict_resolution",
            Self::BuildOn => "build_on",
            Self::Average => "average",
        }
    }
}

/// One input to a synthesis: the source's confidence and optional weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceConfidence {
    pub confidence: f64,
    /// Defaults to 1.0 when absent.
    pub weight: Option<f64>,
}

impl SourceConfidence {
    /// A source with the default weight.
    pub fn new(confidence: f64) -> Self {
        Self {
            confidence,
            weight: None,
        }
    }

    pub fn weighted(confidence: f64, weight: f64) -> Self {
        Self {
            confidence,
            weight: Some(weight),
        }
    }

    /// Effective weight: missing or non-finite → 1.0, negative → 0.0.
    fn effective_weight(&self) -> f64 {
        match self.weight {
            Some(w) if w.is_finite() => w.max(0.0),
            _ => 1.0,
        }
    }
}

/// Aggregate source confidences with the given strategy.
pub fn aggregate(
    sources: &[SourceConfidence],
    strategy: SynthesisStrategy,
    config: &ConfidenceConfig,
) -> f64 {
    if sources.is_empty() {
        return clamp_unit(config.no_sources_confidence);
    }

    let result = match strategy {
        SynthesisStrategy::Consensus | SynthesisStrategy::WeightedMerge => weighted_mean(sources),
        SynthesisStrategy::ConflictResolution => {
            let disagreement = spread(sources);
            weighted_mean(sources) * config.conflict_penalty * (1.0 - disagreement / 2.0)
        }
        SynthesisStrategy::BuildOn => {
            let strongest = sources
                .iter()
                .map(|s| clamp_unit(s.confidence))
                .fold(0.0_f64, f64::max);
            strongest * config.build_on_factor
        }
        SynthesisStrategy::Average => mean(sources),
    };

    clamp_unit(result)
}

/// Weighted mean of clamped confidences. Zero total weight falls back to the plain mean.
fn weighted_mean(sources: &[SourceConfidence]) -> f64 {
    let total_weight: f64 = sources.iter().map(SourceConfidence::effective_weight).sum();
    if total_weight <= 0.0 {
        return mean(sources);
    }
    let weighted_sum: f64 = sources
        .iter()
        .map(|s| clamp_unit(s.confidence) * s.effective_weight())
        .sum();
    weighted_sum / total_weight
}

fn mean(sources: &[SourceConfidence]) -> f64 {
    let sum: f64 = sources.iter().map(|s| clamp_unit(s.confidence)).sum();
    sum / sources.len() as f64
}

/// Max minus min of the clamped confidences, in [0.0, 1.0].
fn spread(sources: &[SourceConfidence]) -> f64 {
    let (lo, hi) = sources
        .iter()
        .map(|s| clamp_unit(s.confidence))
        .fold((1.0_f64, 0.0_f64), |(lo, hi), c| (lo.min(c), hi.max(c)));
    (hi - lo).max(0.0)
}
