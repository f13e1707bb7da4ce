//! Error types. Tracking itself never fails: errors only surface from
//! configuration loading, export serialization, and poisoned locks.

mod config_error;
mod tracker_error;

pub use config_error::ConfigError;
pub use tracker_error::TrackerError;

/// Convenience alias used across the workspace.
pub type TrackerResult<T> = Result<T, TrackerError>;
