use crate::mcts::node::NodeId;
use crate::mcts::tree::SearchTree;
use serde::{Deserialize, Serialize};

/// Statistics of one root child after a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildStats {
    pub action: usize,
    pub visits: u32,
    pub wins: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MCTSResult {
    pub best_action: usize,
    pub iterations: usize,
    pub root_visits: u32,
    pub tree_size: usize,
    /// Root children in expansion order
    pub children: Vec<ChildStats>,
}

impl MCTSResult {
    pub(crate) fn from_tree(tree: &SearchTree, best_action: usize, iterations: usize) -> Self {
        let root = tree.get(NodeId::ROOT);
        let children = root
            .children
            .iter()
            .map(|&id| {
                let child = tree.get(id);
                ChildStats {
                    action: child.action.unwrap_or_default(),
                    visits: child.visits,
                    wins: child.wins,
                    losses: child.losses,
                }
            })
            .collect();

        Self {
            best_action,
            iterations,
            root_visits: root.visits,
            tree_size: tree.len(),
            children,
        }
    }

    pub fn best_child_stats(&self) -> Option<&ChildStats> {
        self.children.iter().find(|c| c.action == self.best_action)
    }
}
