//! Forward breadth-first visit.

use std::collections::{HashSet, VecDeque};

use petgraph::Direction;

use crate::graph::stable_graph::IndexedGraph;

/// Ids reachable from `start_id` along derivation edges, start first, each once.
///
/// Unknown start → empty.
pub fn bfs(graph: &IndexedGraph, start_id: &str) -> Vec<String> {
    let Some(start) = graph.get_node(start_id) else {
        return Vec::new();
    };

    let mut visited = HashSet::new();
    visited.insert(start);
    let mut queue = VecDeque::new();
    queue.push_back(start);
    let mut order = Vec::new();

    while let Some(current) = queue.pop_front() {
        if let Some(id) = graph.id_of(current) {
            order.push(id.to_string());
        }
        for neighbor in graph.neighbor_indices(current, Direction::Outgoing) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    order
}
