//! Depth-annotated walks: ancestry (backward) and descendants (forward).

use std::collections::{HashSet, VecDeque};

use provenant_core::models::AncestryEntry;

use super::{Direction, LineageQuery};
use crate::graph::stable_graph::IndexedGraph;

/// Walk from `id` per `query`. Depth 0 is `id` itself; output is ascending by depth.
///
/// Nodes reached by several paths appear once, at their first-discovered
/// (shortest) depth. Unknown id → empty.
pub fn trace(graph: &IndexedGraph, id: &str, query: &LineageQuery) -> Vec<AncestryEntry> {
    let Some(start) = graph.get_node(id) else {
        return Vec::new();
    };
    let edge_direction = query.direction.edge_direction();

    let mut visited = HashSet::new();
    visited.insert(start);
    let mut queue = VecDeque::new();
    queue.push_back((start, 0_usize));
    let mut entries = Vec::new();

    while let Some((current, depth)) = queue.pop_front() {
        if let Some(node_id) = graph.id_of(current) {
            entries.push(AncestryEntry {
                id: node_id.to_string(),
                depth,
            });
        }
        if query.max_depth.is_some_and(|max| depth >= max) {
            continue;
        }
        for neighbor in graph.neighbor_indices(current, edge_direction) {
            if visited.insert(neighbor) {
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    entries
}

/// Everything `id` was derived from, transitively.
pub fn ancestry(graph: &IndexedGraph, id: &str) -> Vec<AncestryEntry> {
    trace(graph, id, &LineageQuery::backward())
}

/// Everything derived from `id`, transitively.
pub fn descendants(graph: &IndexedGraph, id: &str) -> Vec<AncestryEntry> {
    trace(
        graph,
        id,
        &LineageQuery {
            max_depth: None,
            direction: Direction::Forward,
        },
    )
}
