//! Core cost and search-node types.

use std::fmt;
use std::ops::Add;

use crate::heap::HeapHandle;

/// A non-negative, finite path or heuristic cost.
///
/// Wraps `f64` with a total order (`f64::total_cmp`) so costs can key the
/// heap. The constructor rejects NaN and negative values in debug builds;
/// the engine never produces either from valid domain input, which keeps the
/// `Eq` impl sound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cost(f64);

impl Cost {
    /// The zero cost (root `g`, null heuristic).
    pub const ZERO: Cost = Cost(0.0);

    /// Construct a cost from a non-negative, finite value.
    #[must_use]
    pub fn new(value: f64) -> Self {
        debug_assert!(
            value.is_finite() && value >= 0.0,
            "cost must be non-negative and finite, got {value}"
        );
        Cost(value)
    }

    /// The raw value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        Cost(self.0 + rhs.0)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a node in the engine's arena. The root is always `NodeId(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// An arena-allocated search node.
///
/// Carries two distinct relations over the expansion tree:
///
/// - `parent` is the *current best* predecessor, mutated in place when a
///   cheaper path to this state is found. Path reconstruction follows it.
/// - `children` is append-only: every node generated (created or improved)
///   while this node was being expanded. Entries are never removed, even
///   after a later cost improvement re-parents a child elsewhere — the
///   branching-factor statistics are defined over this relation.
#[derive(Debug)]
pub struct SearchNode<S> {
    /// The domain state this node wraps.
    pub state: S,
    /// Best-known path cost from the start state.
    pub g: Cost,
    /// Heuristic estimate to the goal. Fixed at creation: `h` depends only
    /// on the state, so cost improvements never touch it.
    pub h: Cost,
    /// Current best parent (`None` for the root).
    pub parent: Option<NodeId>,
    /// All nodes generated during this node's expansion (append-only).
    pub children: Vec<NodeId>,
    /// True once successors have been generated for this node.
    pub expanded: bool,
    /// Live heap entry while the node is open; `None` once extracted.
    pub(crate) open: Option<HeapHandle>,
}

impl<S> SearchNode<S> {
    /// Construct an unexpanded node.
    #[must_use]
    pub fn new(state: S, g: Cost, h: Cost, parent: Option<NodeId>) -> Self {
        Self {
            state,
            g,
            h,
            parent,
            children: Vec::new(),
            expanded: false,
            open: None,
        }
    }

    /// The priority key `f = g + h`.
    #[must_use]
    pub fn f(&self) -> Cost {
        self.g + self.h
    }
}
