//! The A* engine: expansion loop over an open heap and a visited ledger.

use crate::contract::SearchDomain;
use crate::error::SearchError;
use crate::heap::FibonacciHeap;
use crate::ledger::VisitedLedger;
use crate::metrics;
use crate::node::{Cost, NodeId, SearchNode};

/// The root node's arena index.
const ROOT: NodeId = NodeId(0);

/// A single-threaded A* search over a lazily generated state space.
///
/// Owns the node arena, the open heap and the visited ledger; the heap holds
/// arena ids only, so a node outlives its extraction and stays addressable
/// for path reconstruction and statistics.
///
/// Construction seeds the root node (`g = 0`, `h = heuristic(start)`).
/// Calling [`search`](AStar::search) a second time without
/// [`clear`](AStar::clear) reuses stale ledger state and carries no
/// correctness guarantee — a documented limitation, not detected at runtime.
pub struct AStar<D: SearchDomain> {
    domain: D,
    start: D::State,
    nodes: Vec<SearchNode<D::State>>,
    open: FibonacciHeap<NodeId>,
    ledger: VisitedLedger<D::State>,
    goal: Option<NodeId>,
}

impl<D: SearchDomain> AStar<D> {
    /// Set up a search from `start`, seeding the root node.
    pub fn new(domain: D, start: D::State) -> Self {
        let mut engine = Self {
            domain,
            start,
            nodes: Vec::new(),
            open: FibonacciHeap::new(),
            ledger: VisitedLedger::new(),
            goal: None,
        };
        engine.seed_root();
        engine
    }

    fn seed_root(&mut self) {
        let h = self.domain.heuristic(&self.start);
        let root = SearchNode::new(self.start.clone(), Cost::ZERO, h, None);
        let f = root.f();
        self.nodes.push(root);
        self.ledger.visit(self.start.clone(), ROOT);
        let handle = self.open.insert(ROOT, f);
        self.nodes[ROOT.0].open = Some(handle);
    }

    /// Run the search to completion.
    ///
    /// `Ok(true)` when a goal state is popped from the open set, `Ok(false)`
    /// when the open set is exhausted without reaching a goal. Exhaustion is
    /// a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Queue errors ([`SearchError::EmptyQueue`], [`SearchError::InvalidKey`],
    /// [`SearchError::StaleHandle`]) indicate an internal invariant violation;
    /// they do not occur in normal operation.
    pub fn search(&mut self) -> Result<bool, SearchError> {
        while !self.open.is_empty() {
            let (current, _f) = self.open.extract_min()?;
            self.nodes[current.0].open = None;

            if self.domain.is_goal(&self.nodes[current.0].state) {
                self.goal = Some(current);
                tracing::debug!(
                    nodes = self.nodes.len(),
                    goal = current.index(),
                    "goal reached"
                );
                return Ok(true);
            }

            self.expand(current)?;
        }
        tracing::debug!(nodes = self.nodes.len(), "open set exhausted");
        Ok(false)
    }

    /// Generate successors of `current` and fold them into the open set and
    /// ledger.
    fn expand(&mut self, current: NodeId) -> Result<(), SearchError> {
        let state = self.nodes[current.0].state.clone();
        let g_current = self.nodes[current.0].g;
        let successors = self.domain.successors(&state);
        self.nodes[current.0].expanded = true;
        tracing::trace!(
            node = current.index(),
            successors = successors.len(),
            "expand"
        );

        for (succ, step) in successors {
            let g_new = g_current + step;
            match self.ledger.entry(&succ) {
                None => {
                    let h = self.domain.heuristic(&succ);
                    let id = NodeId(self.nodes.len());
                    let node = SearchNode::new(succ.clone(), g_new, h, Some(current));
                    let f = node.f();
                    self.nodes.push(node);
                    self.nodes[current.0].children.push(id);
                    self.ledger.visit(succ, id);
                    let handle = self.open.insert(id, f);
                    self.nodes[id.0].open = Some(handle);
                }
                Some(id) if g_new < self.nodes[id.0].g => {
                    // Cheaper path: update in place. The old parent keeps
                    // the node in its children list; the improving parent
                    // gains it too. Both entries feed the branching-factor
                    // statistics.
                    self.nodes[id.0].g = g_new;
                    self.nodes[id.0].parent = Some(current);
                    self.nodes[current.0].children.push(id);
                    let f = self.nodes[id.0].f();
                    if let Some(handle) = self.nodes[id.0].open {
                        // Still open: g strictly decreased and h is fixed,
                        // so f strictly decreased and the key moves down.
                        self.open.decrease_key(handle, f)?;
                    } else {
                        // Closed rediscovery; reachable only under an
                        // inconsistent heuristic.
                        let handle = self.open.insert(id, f);
                        self.nodes[id.0].open = Some(handle);
                    }
                }
                Some(_) => {} // equal-or-worse path: ignore
            }
        }
        Ok(())
    }

    /// Count of distinct states ever entered in the ledger.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.ledger.len()
    }

    /// The ordered states from start to goal.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoSolution`] before a successful search.
    pub fn result_path(&self) -> Result<Vec<D::State>, SearchError> {
        let goal = self.goal.ok_or(SearchError::NoSolution)?;
        let mut path = Vec::new();
        let mut cursor = Some(goal);
        while let Some(id) = cursor {
            path.push(self.nodes[id.0].state.clone());
            cursor = self.nodes[id.0].parent;
        }
        path.reverse();
        Ok(path)
    }

    /// Total cost of the found path (the goal node's `g`).
    ///
    /// # Errors
    ///
    /// [`SearchError::NoSolution`] before a successful search.
    pub fn path_cost(&self) -> Result<Cost, SearchError> {
        let goal = self.goal.ok_or(SearchError::NoSolution)?;
        Ok(self.nodes[goal.0].g)
    }

    /// Mean child count over all expanded nodes of the expansion tree.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoSolution`] before a successful search;
    /// [`SearchError::NoData`] when no node was expanded (start == goal).
    pub fn branching_factor(&self) -> Result<f64, SearchError> {
        if self.goal.is_none() {
            return Err(SearchError::NoSolution);
        }
        metrics::branching_factor(&self.nodes)
    }

    /// Discard all search state and re-seed the root, making the engine safe
    /// to run again.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.ledger.clear();
        self.goal = None;
        self.seed_root();
    }

    /// The node currently recorded for `state`, if visited.
    #[must_use]
    pub fn visited_node(&self, state: &D::State) -> Option<&SearchNode<D::State>> {
        self.ledger.entry(state).map(|id| &self.nodes[id.0])
    }

    /// The full node arena (root first, creation order).
    #[must_use]
    pub fn nodes(&self) -> &[SearchNode<D::State>] {
        &self.nodes
    }

    /// The domain this engine searches.
    #[must_use]
    pub fn domain(&self) -> &D {
        &self.domain
    }
}
