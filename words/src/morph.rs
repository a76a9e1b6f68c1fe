//! The word-morph search domain.

use ladder_search::contract::SearchDomain;
use ladder_search::node::Cost;

use crate::dict::Dictionary;
use crate::heuristic::levenshtein;

/// Heuristic strategy, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicMode {
    /// `h(state) = 0`: A* degenerates to uniform-cost search.
    Null,
    /// Edit distance to the goal word.
    EditDistance,
}

/// The change-one-letter game as a [`SearchDomain`].
///
/// Successors of a word are all dictionary words of the same length that
/// differ in exactly one letter (a–z substitutions), each one step of cost 1.
#[derive(Debug, Clone)]
pub struct WordMorph {
    dict: Dictionary,
    goal: String,
    mode: HeuristicMode,
}

impl WordMorph {
    /// Build the domain from a loaded dictionary, a goal word, and a
    /// heuristic strategy.
    pub fn new(dict: Dictionary, goal: impl Into<String>, mode: HeuristicMode) -> Self {
        Self {
            dict,
            goal: goal.into(),
            mode,
        }
    }

    /// The goal word.
    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }
}

impl SearchDomain for WordMorph {
    type State = String;

    fn successors(&self, state: &String) -> Vec<(String, Cost)> {
        let chars: Vec<char> = state.chars().collect();
        let mut out = Vec::new();
        for (i, &original) in chars.iter().enumerate() {
            for letter in b'a'..=b'z' {
                let letter = char::from(letter);
                if letter == original {
                    continue;
                }
                let mut candidate = chars.clone();
                candidate[i] = letter;
                let word: String = candidate.into_iter().collect();
                if self.dict.contains(&word) {
                    out.push((word, Cost::new(1.0)));
                }
            }
        }
        out
    }

    fn heuristic(&self, state: &String) -> Cost {
        match self.mode {
            HeuristicMode::Null => Cost::ZERO,
            #[allow(clippy::cast_precision_loss)]
            HeuristicMode::EditDistance => Cost::new(levenshtein(state, &self.goal) as f64),
        }
    }

    fn is_goal(&self, state: &String) -> bool {
        *state == self.goal
    }
}
