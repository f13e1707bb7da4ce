use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::contribution::Metadata;

/// A recorded relationship between two sources (agrees, challenges, builds_on, ...).
///
/// Independent of the lineage graph: the sources need not be tracked ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interaction {
    pub id: String,
    pub source_a: String,
    pub source_b: String,
    #[serde(rename = "type")]
    pub interaction_type: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "std::collections::BTreeMap::is_empty")]
    #[ts(type = "Record<string, unknown>")]
    pub metadata: Metadata,
}

impl Interaction {
    /// Whether this interaction links `a` and `b`, in either direction.
    pub fn involves_pair(&self, a: &str, b: &str) -> bool {
        (self.source_a == a && self.source_b == b) || (self.source_a == b && self.source_b == a)
    }
}
