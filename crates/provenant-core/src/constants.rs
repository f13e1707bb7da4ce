/// Provenant version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Milliseconds per hour, used by temporal decay.
pub const MS_PER_HOUR: f64 = 3_600_000.0;

/// Source label given to synthesized contributions.
pub const SYNTHESIS_SOURCE: &str = "synthesis";

/// Metadata key read as a source's weight when a synthesis aggregates confidence.
pub const WEIGHT_METADATA_KEY: &str = "weight";
