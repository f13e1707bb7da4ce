//! # provenant-core
//!
//! Foundation crate for the Provenant attribution engine.
//! Defines the contribution/interaction/lineage models, the scoring trait seam,
//! errors, config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod confidence;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TrackerConfig;
pub use confidence::Confidence;
pub use errors::{TrackerError, TrackerResult};
pub use models::{
    AncestryEntry, Attribution, Contribution, EdgeRelation, ExportStats, Interaction,
    LineageEdge, Metadata, NodeKind, SynthesisInfo, TrackingExport,
};
pub use traits::ITextScorer;
