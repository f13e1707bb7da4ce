//! Data model shared by the store, graph, index, and export.

mod attribution;
mod contribution;
mod export;
mod interaction;
mod lineage;

pub use attribution::Attribution;
pub use contribution::{Contribution, Metadata, SynthesisInfo};
pub use export::{ExportStats, TrackingExport};
pub use interaction::Interaction;
pub use lineage::{AncestryEntry, EdgeRelation, LineageEdge, NodeKind};
