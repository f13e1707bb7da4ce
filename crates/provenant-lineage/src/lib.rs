//! # provenant-lineage
//!
//! The derivation graph. An arena graph (`petgraph::StableGraph`) keyed by
//! contribution id, with cycle-safe breadth-first traversal in both directions
//! and iterative cycle detection. The graph never rejects an edge: cycles are
//! legal and reported, not prevented.

pub mod graph;
pub mod traversal;

pub use graph::stable_graph::{IndexedGraph, LineageEdgeWeight, LineageNode};
pub use graph::GraphManager;
pub use traversal::{Direction, LineageQuery};
