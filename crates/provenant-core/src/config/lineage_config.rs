use serde::{Deserialize, Serialize};

/// Lineage traversal configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineageConfig {
    /// Depth limit applied by `get_lineage`. `None` walks the full ancestry.
    pub default_max_depth: Option<usize>,
}
