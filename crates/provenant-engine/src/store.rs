//! ContributionStore: concurrent id lookup via DashMap plus an insertion-ordered id list.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use dashmap::DashMap;

use provenant_core::models::Contribution;

/// Owns every tracked contribution. Append-only.
#[derive(Debug, Default)]
pub struct ContributionStore {
    by_id: DashMap<String, Arc<Contribution>>,
    order: RwLock<Vec<String>>,
}

impl ContributionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a contribution. Its id must be fresh.
    pub fn insert(&self, contribution: Contribution) -> Arc<Contribution> {
        let id = contribution.id.clone();
        let stored = Arc::new(contribution);
        self.by_id.insert(id.clone(), Arc::clone(&stored));
        self.write_order().push(id);
        stored
    }

    pub fn get(&self, id: &str) -> Option<Arc<Contribution>> {
        self.by_id.get(id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Number of stored syntheses.
    pub fn synthesis_count(&self) -> usize {
        self.by_id.iter().filter(|entry| entry.is_synthesis()).count()
    }

    /// Every contribution in insertion order.
    pub fn snapshot(&self) -> Vec<Contribution> {
        self.read_order()
            .iter()
            .filter_map(|id| self.by_id.get(id).map(|entry| entry.value().as_ref().clone()))
            .collect()
    }

    fn read_order(&self) -> RwLockReadGuard<'_, Vec<String>> {
        self.order.read().unwrap_or_else(|poisoned| {
            tracing::warn!(component = "contribution_store", "recovering poisoned lock");
            poisoned.into_inner()
        })
    }

    fn write_order(&self) -> RwLockWriteGuard<'_, Vec<String>> {
        self.order.write().unwrap_or_else(|poisoned| {
            tracing::warn!(component = "contribution_store", "recovering poisoned lock");
            poisoned.into_inner()
        })
    }
}
