use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What a lineage node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A plain contribution.
    Contribution,
    /// A contribution derived from others.
    Synthesis,
    /// Placeholder created for an edge endpoint that was never tracked.
    External,
}

/// Relation carried by a lineage edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EdgeRelation {
    /// Source contribution fed into a synthesis.
    ContributedTo,
    /// Edge added directly by the caller.
    Linked,
}

impl EdgeRelation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContributedTo => "contributed_to",
            Self::Linked => "linked",
        }
    }
}

/// A directed derivation edge: `from_id` contributed to `to_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineageEdge {
    pub from_id: String,
    pub to_id: String,
    pub relation: EdgeRelation,
    pub created_at: DateTime<Utc>,
}

/// One node of an ancestry (or descendant) walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AncestryEntry {
    pub id: String,
    /// Hops from the queried node; 0 is the node itself.
    pub depth: usize,
}
