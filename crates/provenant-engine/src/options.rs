use provenant_core::models::Metadata;

/// Optional inputs to `track_contribution` and `track_synthesis`.
#[derive(Debug, Clone, Default)]
pub struct ContributionOptions {
    /// Explicit confidence. Clamped to [0.0, 1.0]. When absent a contribution
    /// gets the configured default and a synthesis aggregates its sources.
    pub confidence: Option<f64>,
    pub metadata: Metadata,
}

impl ContributionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Add one metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
