//! Typed search errors.
//!
//! Queue errors (`EmptyQueue`, `InvalidKey`, `StaleHandle`) are internal
//! invariant violations: the engine is structured so they never occur in
//! normal operation, and the lock tests assert as much. `NoSolution` and `NoData`
//! are precondition failures on the result accessors — fatal to the call,
//! not to the process. Exhaustion of the search space is *not* an error; it
//! is the `Ok(false)` result of [`crate::engine::AStar::search`].

use crate::node::Cost;

/// Typed failure for engine and queue operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchError {
    /// `extract_min` was called on an empty queue.
    EmptyQueue,
    /// `decrease_key` was asked to move a key upward. The queue is left
    /// unchanged.
    InvalidKey {
        /// The key currently stored for the entry.
        current: Cost,
        /// The larger key that was requested.
        requested: Cost,
    },
    /// `decrease_key` was given a handle whose entry was already extracted.
    /// The queue is left unchanged.
    StaleHandle,
    /// A result accessor was called before a successful search.
    NoSolution,
    /// Branching factor requested but no node was ever expanded (the mean
    /// of an empty set).
    NoData,
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyQueue => write!(f, "extract_min on an empty queue"),
            Self::InvalidKey { current, requested } => write!(
                f,
                "decrease_key must not increase a key: current {current}, requested {requested}"
            ),
            Self::StaleHandle => write!(f, "decrease_key on an already-extracted entry"),
            Self::NoSolution => write!(f, "no solution available; run a successful search first"),
            Self::NoData => write!(f, "no nodes were expanded; branching factor is undefined"),
        }
    }
}

impl std::error::Error for SearchError {}
