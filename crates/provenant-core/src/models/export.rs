use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Contribution, Interaction, LineageEdge};

/// Counts summarising an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExportStats {
    pub contributions: usize,
    pub syntheses: usize,
    pub interactions: usize,
    pub edges: usize,
}

/// Deterministic snapshot of everything the engine has tracked.
///
/// All lists are in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrackingExport {
    pub exported_at: DateTime<Utc>,
    pub contributions: Vec<Contribution>,
    pub interactions: Vec<Interaction>,
    pub lineage: Vec<LineageEdge>,
    pub stats: ExportStats,
}
