//! Ladder Search: a deterministic best-first (A*) search engine.
//!
//! Generic over an implicit state space supplied through the
//! [`contract::SearchDomain`] trait: states are generated lazily by a
//! successor function, costs are non-negative reals, and an admissible,
//! consistent heuristic steers the expansion. The open set sits on a
//! Fibonacci heap (amortized O(1) insert and decrease-key, O(log n)
//! extract-min) with FIFO tie-breaking, so identical inputs always produce
//! identical searches.
//!
//! # Crate dependency graph
//!
//! ```text
//! ladder_search  ←  ladder_words
//! (heap, engine)    (dictionary, word domain, CLI)
//! ```
//!
//! # Key types
//!
//! - [`engine::AStar`] — the search engine (construct, `search()`, then
//!   `result_path()` / `num_nodes()` / `branching_factor()`)
//! - [`contract::SearchDomain`] — the domain plugin seam
//! - [`heap::FibonacciHeap`] — the open-set priority queue
//! - [`node::Cost`] / [`node::SearchNode`] — costs and arena nodes
//! - [`error::SearchError`] — typed queue and precondition errors

#![forbid(unsafe_code)]

pub mod contract;
pub mod engine;
pub mod error;
pub mod heap;
pub mod ledger;
pub mod metrics;
pub mod node;
