//! Visited-state ledger.
//!
//! Maps each distinct state to its current best arena node. Unlike a plain
//! closed set, entries stay mutable: when a cheaper path to a visited state
//! is found, the engine updates the node in place rather than inserting a
//! duplicate, so the ledger always holds exactly one node per state.

use std::collections::HashMap;
use std::hash::Hash;

use crate::node::NodeId;

/// Engine-owned mapping from state identity to its best-known node.
#[derive(Debug)]
pub struct VisitedLedger<S> {
    entries: HashMap<S, NodeId>,
}

impl<S: Eq + Hash> VisitedLedger<S> {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `id` as the current node for `state`, overwriting any prior
    /// entry.
    pub fn visit(&mut self, state: S, id: NodeId) {
        self.entries.insert(state, id);
    }

    /// The current node for `state`, if it has been visited.
    #[must_use]
    pub fn entry(&self, state: &S) -> Option<NodeId> {
        self.entries.get(state).copied()
    }

    /// Count of distinct states ever visited.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no state has been visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the ledger for a fresh run on the same engine instance.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<S: Eq + Hash> Default for VisitedLedger<S> {
    fn default() -> Self {
        Self::new()
    }
}
