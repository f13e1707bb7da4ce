use super::ConfigError;

/// Top-level error for the Provenant workspace.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization failed: {reason}")]
    SerializationError { reason: String },

    #[error("lock poisoned: {0}")]
    ConcurrencyError(String),
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}
