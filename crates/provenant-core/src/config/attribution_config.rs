use serde::{Deserialize, Serialize};

use super::defaults;

/// Attribution query configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributionConfig {
    /// Maximum attributions returned per query. 0 disables the limit.
    pub max_attributions: usize,
    /// Index hits re-scored per query, as a multiple of `max_attributions`.
    /// Hits are taken best-first by index similarity. Must be at least 1.
    pub candidate_pool_factor: usize,
}

impl AttributionConfig {
    /// Number of index hits to re-score. 0 means all of them.
    pub fn candidate_pool(&self) -> usize {
        self.max_attributions
            .saturating_mul(self.candidate_pool_factor.max(1))
    }
}

impl Default for AttributionConfig {
    fn default() -> Self {
        Self {
            max_attributions: defaults::DEFAULT_MAX_ATTRIBUTIONS,
            candidate_pool_factor: defaults::DEFAULT_CANDIDATE_POOL_FACTOR,
        }
    }
}
