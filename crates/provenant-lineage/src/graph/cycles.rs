//! Cycle detection. The graph accepts cycles; these functions report them.
//!
//! `detect_cycles` is an iterative white/gray/black DFS, so deep chains never
//! touch the call stack. `cyclic_components` groups the same information by
//! strongly connected component via Tarjan's SCC.

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;

use super::stable_graph::IndexedGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Colour {
    White,
    Gray,
    Black,
}

/// One cycle per back edge, as the node path from the edge's target around to its source.
///
/// Start nodes and successors are visited in insertion order, so the output is
/// deterministic for a given graph.
pub fn detect_cycles(graph: &IndexedGraph) -> Vec<Vec<String>> {
    let mut colour: HashMap<NodeIndex, Colour> = graph
        .graph
        .node_indices()
        .map(|idx| (idx, Colour::White))
        .collect();
    let mut cycles = Vec::new();

    for root in graph.graph.node_indices() {
        if colour.get(&root) != Some(&Colour::White) {
            continue;
        }

        // Explicit DFS stack: (node, its successors, next successor to visit).
        let mut stack: Vec<(NodeIndex, Vec<NodeIndex>, usize)> = Vec::new();
        // Current gray path and each node's position on it.
        let mut path: Vec<NodeIndex> = Vec::new();
        let mut on_path: HashMap<NodeIndex, usize> = HashMap::new();

        colour.insert(root, Colour::Gray);
        on_path.insert(root, 0);
        path.push(root);
        stack.push((root, graph.neighbor_indices(root, Direction::Outgoing), 0));

        while let Some((node, successors, next)) = stack.last_mut() {
            if *next >= successors.len() {
                let finished = *node;
                stack.pop();
                path.pop();
                on_path.remove(&finished);
                colour.insert(finished, Colour::Black);
                continue;
            }

            let succ = successors[*next];
            *next += 1;

            match colour.get(&succ).copied().unwrap_or(Colour::White) {
                Colour::White => {
                    colour.insert(succ, Colour::Gray);
                    on_path.insert(succ, path.len());
                    path.push(succ);
                    let succ_neighbors = graph.neighbor_indices(succ, Direction::Outgoing);
                    stack.push((succ, succ_neighbors, 0));
                }
                Colour::Gray => {
                    if let Some(&start) = on_path.get(&succ) {
                        let cycle: Vec<String> = path[start..]
                            .iter()
                            .filter_map(|&idx| graph.id_of(idx).map(str::to_string))
                            .collect();
                        cycles.push(cycle);
                    }
                }
                Colour::Black => {}
            }
        }
    }

    if !cycles.is_empty() {
        tracing::debug!(event = "cycles_detected", count = cycles.len(), "lineage cycles found");
    }
    cycles
}

/// Strongly connected components that contain a cycle: more than one node,
/// or a single node with a self-loop.
pub fn cyclic_components(graph: &IndexedGraph) -> Vec<Vec<String>> {
    tarjan_scc(&graph.graph)
        .into_iter()
        .filter(|scc| match scc.as_slice() {
            [single] => graph.graph.find_edge(*single, *single).is_some(),
            _ => true,
        })
        .map(|scc| {
            scc.into_iter()
                .filter_map(|idx| graph.id_of(idx).map(str::to_string))
                .collect()
        })
        .collect()
}

/// Whether the graph contains any cycle.
pub fn has_cycle(graph: &IndexedGraph) -> bool {
    !cyclic_components(graph).is_empty()
}
