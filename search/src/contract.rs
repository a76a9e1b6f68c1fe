//! Domain plugin contract.

use std::hash::Hash;

use crate::node::Cost;

/// Trait for domains that supply a state space to the engine.
///
/// The engine treats states as opaque: it compares them only by equality and
/// hashes them for the visited ledger.
///
/// # Contract
///
/// - `successors` must return non-negative step costs; an empty list marks a
///   dead end.
/// - `successors` must be deterministic: same state, same list, same order.
///   The engine's reproducibility guarantee depends on it.
/// - `heuristic` must be admissible (never overestimate the true remaining
///   cost) and consistent (triangle inequality along every edge) for the
///   engine's optimality guarantee to hold. The engine does not verify
///   either property; a violating heuristic silently degrades optimality
///   but never termination.
pub trait SearchDomain {
    /// A point in the search space.
    type State: Clone + Eq + Hash;

    /// All states reachable from `state` in one step, with step costs.
    fn successors(&self, state: &Self::State) -> Vec<(Self::State, Cost)>;

    /// Estimated cost from `state` to the goal.
    fn heuristic(&self, state: &Self::State) -> Cost;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;
}
