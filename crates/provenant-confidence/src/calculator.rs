use provenant_core::config::ConfidenceConfig;
use provenant_core::traits::ITextScorer;

use crate::decay;
use crate::synthesis::{self, SourceConfidence, SynthesisStrategy};
use crate::text;

/// Heuristic confidence calculator: text similarity, synthesis aggregation, decay.
///
/// All methods are pure functions of their inputs and the configured constants.
#[derive(Debug, Clone, Default)]
pub struct ConfidenceCalculator {
    config: ConfidenceConfig,
}

impl ConfidenceCalculator {
    /// Create a calculator with the default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom constants.
    pub fn with_config(config: ConfidenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConfidenceConfig {
        &self.config
    }

    /// Similarity confidence of `query` against `source`, in [0.0, 1.0].
    pub fn calculate_text_confidence(&self, source: &str, query: &str) -> f64 {
        text::text_confidence(source, query, &self.config)
    }

    /// Aggregate confidence for a synthesis of `sources`, in [0.0, 1.0].
    pub fn calculate_synthesis_confidence(
        &self,
        sources: &[SourceConfidence],
        strategy: SynthesisStrategy,
    ) -> f64 {
        synthesis::aggregate(sources, strategy, &self.config)
    }

    /// Confidence after `elapsed_ms` of exponential decay.
    pub fn apply_temporal_decay(&self, confidence: f64, elapsed_ms: u64) -> f64 {
        decay::temporal(confidence, elapsed_ms, &self.config)
    }

    /// Confidence after `transformations` derivation steps of the given complexity.
    pub fn apply_transformation_decay(
        &self,
        confidence: f64,
        transformations: u32,
        complexity: f64,
    ) -> f64 {
        decay::transformation(confidence, transformations, complexity, &self.config)
    }
}

impl ITextScorer for ConfidenceCalculator {
    fn score(&self, source_text: &str, query_text: &str) -> f64 {
        self.calculate_text_confidence(source_text, query_text)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
