//! Append-only log of interactions between sources.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use provenant_core::models::Interaction;

#[derive(Debug, Default)]
pub struct InteractionLog {
    entries: RwLock<Vec<Interaction>>,
}

impl InteractionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, interaction: Interaction) {
        self.write().push(interaction);
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// All interactions in insertion order.
    pub fn snapshot(&self) -> Vec<Interaction> {
        self.read().clone()
    }

    /// Interactions linking `a` and `b`, in either direction.
    pub fn between(&self, a: &str, b: &str) -> Vec<Interaction> {
        self.filtered(|i| i.involves_pair(a, b))
    }

    /// Interactions tagged `interaction_type`.
    pub fn of_type(&self, interaction_type: &str) -> Vec<Interaction> {
        self.filtered(|i| i.interaction_type == interaction_type)
    }

    fn filtered(&self, predicate: impl Fn(&Interaction) -> bool) -> Vec<Interaction> {
        self.read().iter().filter(|i| predicate(i)).cloned().collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Interaction>> {
        self.entries.read().unwrap_or_else(|poisoned| {
            tracing::warn!(component = "interaction_log", "recovering poisoned lock");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Interaction>> {
        self.entries.write().unwrap_or_else(|poisoned| {
            tracing::warn!(component = "interaction_log", "recovering poisoned lock");
            poisoned.into_inner()
        })
    }
}
