//! # provenant-engine
//!
//! The tracking facade. Records contributions and syntheses, indexes their
//! text for attribution, maintains the derivation graph, logs interactions
//! between sources, and exports a deterministic snapshot of all of it.
//!
//! Every operation takes `&self`; share one engine across threads with `Arc`.

pub mod engine;
pub mod interactions;
pub mod options;
pub mod store;
pub mod tracing_setup;

pub use engine::TrackingEngine;
pub use interactions::InteractionLog;
pub use options::ContributionOptions;
pub use store::ContributionStore;
pub use tracing_setup::init_tracing;

pub use provenant_lineage::{Direction, LineageQuery};
