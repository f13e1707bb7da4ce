//! Engine configuration. Every section is `#[serde(default)]`, so an empty
//! TOML document yields the compiled defaults.

mod attribution_config;
mod confidence_config;
pub mod defaults;
mod index_config;
mod lineage_config;
mod observability_config;

pub use attribution_config::AttributionConfig;
pub use confidence_config::ConfidenceConfig;
pub use index_config::IndexConfig;
pub use lineage_config::LineageConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub confidence: ConfidenceConfig,
    pub index: IndexConfig,
    pub attribution: AttributionConfig,
    pub lineage: LineageConfig,
    pub observability: ObservabilityConfig,
}

impl TrackerConfig {
    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.confidence;
        let unit_fields = [
            ("confidence.default_confidence", c.default_confidence),
            ("confidence.no_sources_confidence", c.no_sources_confidence),
            ("confidence.normalized_match_score", c.normalized_match_score),
            ("confidence.substring_floor", c.substring_floor),
            ("confidence.substring_span", c.substring_span),
            ("confidence.overlap_floor", c.overlap_floor),
            ("confidence.overlap_span", c.overlap_span),
            ("confidence.overlap_cap", c.overlap_cap),
            ("confidence.conflict_penalty", c.conflict_penalty),
            ("confidence.build_on_factor", c.build_on_factor),
            ("confidence.min_confidence", c.min_confidence),
            ("index.substring_floor", self.index.substring_floor),
            ("index.token_overlap_scale", self.index.token_overlap_scale),
        ];
        for (field, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if c.substring_floor + c.substring_span > 1.0 {
            return Err(ConfigError::ValidationFailed {
                field: "confidence.substring_span".to_string(),
                message: "substring_floor + substring_span must not exceed 1.0".to_string(),
            });
        }
        if self.attribution.candidate_pool_factor == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "attribution.candidate_pool_factor".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        let rates = [
            ("confidence.decay_rate_per_hour", c.decay_rate_per_hour),
            (
                "confidence.transformation_decay_rate",
                c.transformation_decay_rate,
            ),
        ];
        for (field, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }
        Ok(())
    }
}
