use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A contribution matched back to a query text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Attribution {
    pub contribution_id: String,
    pub source: String,
    /// Text-scorer confidence of the query against the contribution text, [0.0, 1.0].
    pub confidence: f64,
    /// Raw contribution text that matched.
    pub segment: String,
    /// Index similarity that surfaced the match.
    pub similarity: f64,
}
