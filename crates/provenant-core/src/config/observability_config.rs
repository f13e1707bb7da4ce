use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging configuration consumed by `init_tracing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive string, e.g. `provenant=debug`.
    pub log_filter: String,
    /// Emit structured JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: defaults::DEFAULT_LOG_FILTER.to_string(),
            json: defaults::DEFAULT_JSON_LOGS,
        }
    }
}
