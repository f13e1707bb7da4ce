use serde::{Deserialize, Serialize};

use super::defaults;

/// Segment index scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Lower (exclusive) bound of substring similarity.
    pub substring_floor: f64,
    /// Jaccard similarity is multiplied by this for token-only matches.
    pub token_overlap_scale: f64,
    /// Scan every distinct segment for substring relations. When off, only
    /// segments sharing a token with the query are checked, which misses
    /// fragments of unspaced scripts such as CJK.
    pub substring_scan: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            substring_floor: defaults::DEFAULT_INDEX_SUBSTRING_FLOOR,
            token_overlap_scale: defaults::DEFAULT_TOKEN_OVERLAP_SCALE,
            substring_scan: defaults::DEFAULT_SUBSTRING_SCAN,
        }
    }
}
