//! Breadth-first lineage walks. Every walk keeps a visited set, so cycles
//! terminate and each node is reported once, at its shortest distance.

pub mod ancestry;
pub mod bfs;

use serde::{Deserialize, Serialize};

pub use ancestry::{ancestry, descendants, trace};
pub use bfs::bfs;

/// Which way to walk derivation edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toward sources: "what was this derived from?"
    #[default]
    Backward,
    /// Toward syntheses: "what was derived from this?"
    Forward,
}

impl Direction {
    pub(crate) fn edge_direction(self) -> petgraph::Direction {
        match self {
            Self::Backward => petgraph::Direction::Incoming,
            Self::Forward => petgraph::Direction::Outgoing,
        }
    }
}

/// Options for a lineage walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineageQuery {
    /// Deepest hop to report; `None` walks everything reachable.
    pub max_depth: Option<usize>,
    pub direction: Direction,
}

impl LineageQuery {
    /// Unbounded ancestry.
    pub fn backward() -> Self {
        Self::default()
    }

    /// Unbounded descendants.
    pub fn forward() -> Self {
        Self {
            max_depth: None,
            direction: Direction::Forward,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
