// Single source of truth for all default values.

// --- Confidence ---
pub const DEFAULT_CONTRIBUTION_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_NO_SOURCES_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_NORMALIZED_MATCH_SCORE: f64 = 0.98;
pub const DEFAULT_SUBSTRING_FLOOR: f64 = 0.8;
pub const DEFAULT_SUBSTRING_SPAN: f64 = 0.2;
pub const DEFAULT_OVERLAP_FLOOR: f64 = 0.4;
pub const DEFAULT_OVERLAP_SPAN: f64 = 0.4;
pub const DEFAULT_OVERLAP_CAP: f64 = 0.8;
pub const DEFAULT_CONFLICT_PENALTY: f64 = 0.9;
pub const DEFAULT_BUILD_ON_FACTOR: f64 = 0.95;
pub const DEFAULT_DECAY_RATE_PER_HOUR: f64 = 0.00127; // ~3% after 24h
pub const DEFAULT_TRANSFORMATION_DECAY_RATE: f64 = 0.05;
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.1;

// --- Index ---
pub const DEFAULT_INDEX_SUBSTRING_FLOOR: f64 = 0.5;
pub const DEFAULT_TOKEN_OVERLAP_SCALE: f64 = 0.5;
pub const DEFAULT_SUBSTRING_SCAN: bool = true;

// --- Attribution ---
pub const DEFAULT_MAX_ATTRIBUTIONS: usize = 100;
pub const DEFAULT_CANDIDATE_POOL_FACTOR: usize = 4;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "provenant=info";
pub const DEFAULT_JSON_LOGS: bool = false;
