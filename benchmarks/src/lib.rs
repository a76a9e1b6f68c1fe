//! Shared domains for the benchmark suite.

#![forbid(unsafe_code)]

use ladder_search::contract::SearchDomain;
use ladder_search::node::Cost;

/// A `side × side` grid with unit-cost moves right and down and a Manhattan
/// heuristic toward the far corner. Small state, high revisit rate — a good
/// stand-in for dense lazily-expanded graphs.
#[derive(Debug, Clone, Copy)]
pub struct Lattice {
    pub side: u32,
}

impl SearchDomain for Lattice {
    type State = (u32, u32);

    fn successors(&self, state: &(u32, u32)) -> Vec<((u32, u32), Cost)> {
        let (x, y) = *state;
        let mut out = Vec::with_capacity(2);
        if x + 1 < self.side {
            out.push(((x + 1, y), Cost::new(1.0)));
        }
        if y + 1 < self.side {
            out.push(((x, y + 1), Cost::new(1.0)));
        }
        out
    }

    fn heuristic(&self, state: &(u32, u32)) -> Cost {
        let (x, y) = *state;
        Cost::new(f64::from(self.side - 1 - x) + f64::from(self.side - 1 - y))
    }

    fn is_goal(&self, state: &(u32, u32)) -> bool {
        *state == (self.side - 1, self.side - 1)
    }
}
