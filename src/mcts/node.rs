//! Search tree node.
//!
//! Nodes live in the arena owned by [`crate::mcts::tree::SearchTree`] and refer to their
//! parent and children by [`NodeId`]. All statistics are measured from the point of view
//! of the optimizing player fixed when the root was created.

use crate::game::game_state::GameState;

/// Index of a node inside the search tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Position reached by `action` from the parent
    pub state: GameState,

    pub parent: Option<NodeId>,

    /// Action that produced this node, `None` for the root
    pub action: Option<usize>,

    pub children: Vec<NodeId>,

    pub visits: u32,

    /// Rollouts rewarded +1
    pub wins: u32,

    /// Rollouts rewarded -1
    pub losses: u32,

    /// Actions not expanded yet; consumed from the back
    pub untried_actions: Vec<usize>,
}

impl SearchNode {
    pub fn new(state: GameState, parent: Option<NodeId>, action: Option<usize>) -> Self {
        let untried_actions = state.legal_actions();
        Self {
            state,
            parent,
            action,
            children: Vec::new(),
            visits: 0,
            wins: 0,
            losses: 0,
            untried_actions,
        }
    }

    pub fn root(state: GameState) -> Self {
        Self::new(state, None, None)
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_decided()
    }

    pub fn is_fully_expanded(&self) -> bool {
        self.untried_actions.is_empty()
    }

    /// Net rollout result, wins minus losses.
    pub fn q(&self) -> f64 {
        self.wins as f64 - self.losses as f64
    }

    /// Records one rollout reward (+1 or -1).
    pub fn record(&mut self, reward: i8) {
        self.visits += 1;
        if reward > 0 {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    /// Mean reward, 0.0 before the first visit.
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.q() / self.visits as f64
        }
    }
}
