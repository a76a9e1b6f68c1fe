//! Search statistics over the expansion tree.

use crate::error::SearchError;
use crate::node::{NodeId, SearchNode};

/// Mean child count across all expanded nodes.
///
/// Walks the expansion tree from the root along `children` links with an
/// explicit stack (solution chains can be long enough to overflow a
/// recursive walk). A node re-parented by a cost improvement appears in two
/// children lists; the seen-set guarantees it contributes its own child
/// count exactly once. Unexpanded nodes (the goal, dead leaves never
/// popped) contribute nothing.
///
/// # Errors
///
/// [`SearchError::NoData`] if no node was ever expanded.
pub fn branching_factor<S>(nodes: &[SearchNode<S>]) -> Result<f64, SearchError> {
    if nodes.is_empty() {
        return Err(SearchError::NoData);
    }

    let mut seen = vec![false; nodes.len()];
    let mut stack = vec![NodeId(0)];
    seen[0] = true;
    let mut child_total: usize = 0;
    let mut expanded_count: usize = 0;

    while let Some(id) = stack.pop() {
        let node = &nodes[id.index()];
        if node.expanded {
            child_total += node.children.len();
            expanded_count += 1;
        }
        for &child in &node.children {
            if !seen[child.index()] {
                seen[child.index()] = true;
                stack.push(child);
            }
        }
    }

    if expanded_count == 0 {
        return Err(SearchError::NoData);
    }
    #[allow(clippy::cast_precision_loss)]
    Ok(child_total as f64 / expanded_count as f64)
}
