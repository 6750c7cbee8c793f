//! UCB1 child selection.
//!
//! Formula: (wins - losses) / N_child + c × sqrt(2 × ln(N_parent) / N_child)

use crate::mcts::node::NodeId;
use crate::mcts::tree::SearchTree;

/// UCB1 score of a child.
///
/// # Arguments
/// * `q` - Net reward of the child (wins - losses)
/// * `child_visits` - Visits of the child, must be > 0
/// * `parent_visits` - Visits of the parent
/// * `exploration` - Exploration constant
pub fn ucb1_score(q: f64, child_visits: u32, parent_visits: u32, exploration: f64) -> f64 {
    let n = child_visits as f64;
    let parent = parent_visits as f64;
    q / n + exploration * (2.0 * parent.ln() / n).sqrt()
}

/// Selects the child of `node` with the highest UCB1 score.
///
/// Ties go to the child expanded first. Returns `None` when the node has no children.
pub fn select_best_child(tree: &SearchTree, node: NodeId, exploration: f64) -> Option<NodeId> {
    let parent = tree.get(node);
    let mut best: Option<(NodeId, f64)> = None;

    for &child_id in &parent.children {
        let child = tree.get(child_id);
        debug_assert!(child.visits > 0, "child selected before its first rollout");
        let score = ucb1_score(child.q(), child.visits, parent.visits, exploration);

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((child_id, score)),
        }
    }

    best.map(|(id, _)| id)
}
