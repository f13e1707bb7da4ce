//! Property tests for provenant-lineage: termination, deduplication, depth bounds.

use std::collections::HashSet;

use proptest::prelude::*;

use provenant_core::models::EdgeRelation;
use provenant_lineage::graph::cycles;
use provenant_lineage::traversal::{self, LineageQuery};
use provenant_lineage::{IndexedGraph, LineageEdgeWeight};

/// Arbitrary directed graph on `n` nodes; cycles and self-loops allowed.
fn build_random_graph(edges: &[(usize, usize)]) -> IndexedGraph {
    let mut graph = IndexedGraph::new();
    for &(from, to) in edges {
        graph.add_edge(
            &format!("n{from}"),
            &format!("n{to}"),
            LineageEdgeWeight::now(EdgeRelation::Linked),
        );
    }
    graph
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..n, 0..n), 1..n * 3)
}

// =============================================================================
// Ancestry: no duplicates, ascending depth, start at depth 0
// =============================================================================
proptest! {
    #[test]
    fn ancestry_is_deduplicated_and_ordered(edges in edge_strategy(25)) {
        let graph = build_random_graph(&edges);
        let start = format!("n{}", edges[0].1);
        let lineage = traversal::ancestry(&graph, &start);

        prop_assert!(!lineage.is_empty());
        prop_assert_eq!(&lineage[0].id, &start);
        prop_assert_eq!(lineage[0].depth, 0);

        let unique: HashSet<&str> = lineage.iter().map(|e| e.id.as_str()).collect();
        prop_assert_eq!(unique.len(), lineage.len());
        prop_assert!(lineage.len() <= graph.node_count());
        for pair in lineage.windows(2) {
            prop_assert!(pair[0].depth <= pair[1].depth);
        }
    }
}

// =============================================================================
// Depth limit is respected
// =============================================================================
proptest! {
    #[test]
    fn trace_respects_max_depth(edges in edge_strategy(25), max_depth in 0_usize..6) {
        let graph = build_random_graph(&edges);
        let start = format!("n{}", edges[0].0);
        let query = LineageQuery::forward().with_max_depth(max_depth);
        let reached = traversal::trace(&graph, &start, &query);
        prop_assert!(reached.iter().all(|e| e.depth <= max_depth));

        let unbounded = traversal::trace(&graph, &start, &LineageQuery::forward());
        prop_assert!(reached.len() <= unbounded.len());
    }
}

// =============================================================================
// BFS visits each reachable node once; cycle reports agree with Tarjan
// =============================================================================
proptest! {
    #[test]
    fn bfs_and_cycle_detection_agree(edges in edge_strategy(20)) {
        let graph = build_random_graph(&edges);
        let start = format!("n{}", edges[0].0);
        let visited = traversal::bfs(&graph, &start);
        let unique: HashSet<&String> = visited.iter().collect();
        prop_assert_eq!(unique.len(), visited.len());

        let found = cycles::detect_cycles(&graph);
        let components = cycles::cyclic_components(&graph);
        prop_assert_eq!(found.is_empty(), components.is_empty());
        for cycle in &found {
            prop_assert!(!cycle.is_empty());
        }
    }
}
