//! Ladder Words: the word-ladder domain plugin for `ladder_search`.
//!
//! The game: morph a start word into a goal word of the same length by
//! changing one letter at a time, landing on a real dictionary word at every
//! step. This crate supplies the pieces the generic engine treats as
//! external: dictionary loading, successor generation by single-letter
//! substitution, the edit-distance heuristic, and the `ladder` CLI binary.

#![forbid(unsafe_code)]

pub mod dict;
pub mod heuristic;
pub mod morph;
pub mod report;
