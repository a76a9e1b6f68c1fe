//! Report formatting for the `ladder` binary.
//!
//! Both output modes carry the same facts: node count, average branching
//! factor (when defined), path cost, and the ladder itself.

use ladder_search::node::Cost;

/// The facts reported after a successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct LadderReport {
    /// Distinct states entered in the ledger.
    pub nodes: usize,
    /// Mean child count over expanded nodes; `None` when nothing was
    /// expanded (start == goal).
    pub branching_factor: Option<f64>,
    /// Total cost of the found path.
    pub cost: Cost,
    /// The ladder, start first.
    pub path: Vec<String>,
}

impl LadderReport {
    /// Plain-text rendering, one ladder word per line.
    #[must_use]
    pub fn text(&self) -> String {
        let mut lines = vec![format!("Search succeeded with {} nodes", self.nodes)];
        if let Some(bf) = self.branching_factor {
            lines.push(format!("Average branching factor: {bf:.3}"));
        }
        lines.push(format!("Path cost: {}", self.cost));
        lines.extend(self.path.iter().cloned());
        lines.join("\n")
    }

    /// JSON rendering with the same fields.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::json!({
            "found": true,
            "nodes": self.nodes,
            "branching_factor": self.branching_factor,
            "cost": self.cost.value(),
            "path": self.path,
        })
    }
}
