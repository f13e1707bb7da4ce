//! Graph storage and the thread-safe manager around it.

pub mod cycles;
pub mod stable_graph;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use provenant_core::errors::{TrackerError, TrackerResult};
use provenant_core::models::{AncestryEntry, EdgeRelation, LineageEdge, NodeKind};

use self::stable_graph::{IndexedGraph, LineageEdgeWeight};
use crate::traversal::{self, LineageQuery};

/// Thread-safe owner of the lineage graph.
///
/// Readers share the lock; node and edge inserts take it exclusively.
/// A poisoned lock surfaces as `TrackerError::ConcurrencyError`.
#[derive(Debug, Clone, Default)]
pub struct GraphManager {
    graph: Arc<RwLock<IndexedGraph>>,
}

impl GraphManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared graph handle, for callers that batch several reads under one lock.
    pub fn shared(&self) -> Arc<RwLock<IndexedGraph>> {
        Arc::clone(&self.graph)
    }

    fn read(&self) -> TrackerResult<RwLockReadGuard<'_, IndexedGraph>> {
        self.graph
            .read()
            .map_err(|e| TrackerError::ConcurrencyError(e.to_string()))
    }

    fn write(&self) -> TrackerResult<RwLockWriteGuard<'_, IndexedGraph>> {
        self.graph
            .write()
            .map_err(|e| TrackerError::ConcurrencyError(e.to_string()))
    }

    // --- Mutation ---

    /// Add (or upgrade a placeholder into) a node.
    pub fn add_node(&self, id: &str, kind: NodeKind, label: &str) -> TrackerResult<()> {
        self.write()?.ensure_node(id, kind, label);
        Ok(())
    }

    /// Add an edge `from → to`. Never rejected, even when it closes a cycle.
    pub fn add_edge(&self, from_id: &str, to_id: &str, relation: EdgeRelation) -> TrackerResult<()> {
        let weight = LineageEdgeWeight::now(relation);
        self.write()?.add_edge(from_id, to_id, weight);
        Ok(())
    }

    /// Add a node and its incoming edges under a single write lock.
    pub fn add_derived_node(
        &self,
        id: &str,
        kind: NodeKind,
        label: &str,
        source_ids: &[String],
        relation: EdgeRelation,
    ) -> TrackerResult<()> {
        let mut graph = self.write()?;
        graph.ensure_node(id, kind, label);
        for source_id in source_ids {
            graph.add_edge(source_id, id, LineageEdgeWeight::now(relation));
        }
        Ok(())
    }

    // --- Queries ---

    pub fn contains(&self, id: &str) -> TrackerResult<bool> {
        Ok(self.read()?.contains(id))
    }

    pub fn node_count(&self) -> TrackerResult<usize> {
        Ok(self.read()?.node_count())
    }

    pub fn edge_count(&self) -> TrackerResult<usize> {
        Ok(self.read()?.edge_count())
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> TrackerResult<Vec<LineageEdge>> {
        Ok(self.read()?.edges())
    }

    pub fn predecessors(&self, id: &str) -> TrackerResult<Vec<String>> {
        Ok(self.read()?.predecessors(id))
    }

    pub fn successors(&self, id: &str) -> TrackerResult<Vec<String>> {
        Ok(self.read()?.successors(id))
    }

    /// Forward breadth-first walk from `start_id`, start included.
    pub fn bfs(&self, start_id: &str) -> TrackerResult<Vec<String>> {
        let graph = self.read()?;
        Ok(traversal::bfs(&graph, start_id))
    }

    /// Full deduplicated ancestry of `id`.
    pub fn get_ancestry(&self, id: &str) -> TrackerResult<Vec<AncestryEntry>> {
        let graph = self.read()?;
        Ok(traversal::ancestry(&graph, id))
    }

    /// Depth-limited walk in either direction.
    pub fn trace(&self, id: &str, query: &LineageQuery) -> TrackerResult<Vec<AncestryEntry>> {
        let graph = self.read()?;
        Ok(traversal::trace(&graph, id, query))
    }

    /// One path per back edge.
    pub fn detect_cycles(&self) -> TrackerResult<Vec<Vec<String>>> {
        let graph = self.read()?;
        Ok(cycles::detect_cycles(&graph))
    }

    /// Cyclic strongly connected components.
    pub fn cyclic_components(&self) -> TrackerResult<Vec<Vec<String>>> {
        let graph = self.read()?;
        Ok(cycles::cyclic_components(&graph))
    }
}
