use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::confidence::Confidence;

/// Open string-keyed metadata bag. Never interpreted by the engine.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Extra fields carried by a contribution that was synthesized from others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SynthesisInfo {
    /// Ids of the contributions this one was derived from, in caller order.
    /// May be empty and may repeat ids.
    pub source_ids: Vec<String>,
    /// Open tag naming how the sources were combined, e.g. `weighted_merge`.
    pub synthesis_type: String,
}

/// An attributable piece of text from a named source.
///
/// Immutable once created; the store hands out clones or `Arc`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Contribution {
    pub id: String,
    pub source: String,
    pub text: String,
    pub confidence: Confidence,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    #[ts(type = "Record<string, unknown>")]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    /// Present only for syntheses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthesis: Option<SynthesisInfo>,
}

impl Contribution {
    /// Whether this contribution was derived from other contributions.
    pub fn is_synthesis(&self) -> bool {
        self.synthesis.is_some()
    }

    /// Source ids for a synthesis, empty for a plain contribution.
    pub fn source_ids(&self) -> &[String] {
        self.synthesis
            .as_ref()
            .map(|s| s.source_ids.as_slice())
            .unwrap_or(&[])
    }
}
