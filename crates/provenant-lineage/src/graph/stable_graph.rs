//! petgraph::StableGraph wrapper with LineageNode and LineageEdgeWeight types.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use provenant_core::models::{EdgeRelation, LineageEdge, NodeKind};

/// A node in the lineage graph, representing a contribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineageNode {
    /// The contribution id this node represents.
    pub id: String,
    pub kind: NodeKind,
    /// Short label, usually the contribution source.
    pub label: String,
}

/// Weight on a lineage edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineageEdgeWeight {
    pub relation: EdgeRelation,
    pub created_at: DateTime<Utc>,
}

impl LineageEdgeWeight {
    /// Weight stamped with the current time.
    pub fn now(relation: EdgeRelation) -> Self {
        Self {
            relation,
            created_at: Utc::now(),
        }
    }
}

/// The underlying directed graph type.
pub type LineageStableGraph = StableGraph<LineageNode, LineageEdgeWeight, Directed>;

/// Wrapper providing id-keyed access to the lineage graph.
#[derive(Debug, Clone)]
pub struct IndexedGraph {
    /// The petgraph stable graph.
    pub graph: LineageStableGraph,
    /// Map from contribution id → NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
}

impl IndexedGraph {
    /// Create an empty indexed graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Get or create a node for the given id.
    ///
    /// An existing `External` placeholder is upgraded to `kind` when the real
    /// contribution shows up later; any other existing node is left untouched.
    pub fn ensure_node(&mut self, id: &str, kind: NodeKind, label: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(id) {
            if kind != NodeKind::External {
                if let Some(node) = self.graph.node_weight_mut(idx) {
                    if node.kind == NodeKind::External {
                        node.kind = kind;
                        node.label = label.to_string();
                    }
                }
            }
            return idx;
        }
        let node = LineageNode {
            id: id.to_string(),
            kind,
            label: label.to_string(),
        };
        let idx = self.graph.add_node(node);
        self.node_index.insert(id.to_string(), idx);
        idx
    }

    /// Add a directed edge `from → to`. Unknown endpoints become `External` placeholders.
    ///
    /// No cycle or duplicate check: parallel edges and cycles are both legal.
    pub fn add_edge(&mut self, from_id: &str, to_id: &str, weight: LineageEdgeWeight) {
        let from = self.ensure_node(from_id, NodeKind::External, "");
        let to = self.ensure_node(to_id, NodeKind::External, "");
        self.graph.add_edge(from, to, weight);
    }

    /// Look up a node index by id.
    pub fn get_node(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Node data by id.
    pub fn node(&self, id: &str) -> Option<&LineageNode> {
        self.get_node(id).and_then(|idx| self.graph.node_weight(idx))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Id of the node at `idx`.
    pub fn id_of(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(|n| n.id.as_str())
    }

    /// Distinct neighbor indices in edge insertion order.
    ///
    /// petgraph walks adjacency lists newest-first, so the list is reversed.
    pub fn neighbor_indices(&self, idx: NodeIndex, direction: Direction) -> Vec<NodeIndex> {
        let mut all: Vec<NodeIndex> = self.graph.neighbors_directed(idx, direction).collect();
        all.reverse();
        let mut seen = HashSet::with_capacity(all.len());
        all.retain(|n| seen.insert(*n));
        all
    }

    /// Ids of nodes with an edge into `id`.
    pub fn predecessors(&self, id: &str) -> Vec<String> {
        self.neighbor_ids(id, Direction::Incoming)
    }

    /// Ids of nodes `id` has an edge to.
    pub fn successors(&self, id: &str) -> Vec<String> {
        self.neighbor_ids(id, Direction::Outgoing)
    }

    fn neighbor_ids(&self, id: &str, direction: Direction) -> Vec<String> {
        let Some(idx) = self.get_node(id) else {
            return Vec::new();
        };
        self.neighbor_indices(idx, direction)
            .into_iter()
            .filter_map(|n| self.id_of(n).map(str::to_string))
            .collect()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> Vec<LineageEdge> {
        self.graph
            .edge_indices()
            .filter_map(|edge| {
                let (source, target) = self.graph.edge_endpoints(edge)?;
                let weight = self.graph.edge_weight(edge)?;
                Some(LineageEdge {
                    from_id: self.id_of(source)?.to_string(),
                    to_id: self.id_of(target)?.to_string(),
                    relation: weight.relation,
                    created_at: weight.created_at,
                })
            })
            .collect()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for IndexedGraph {
    fn default() -> Self {
        Self::new()
    }
}
