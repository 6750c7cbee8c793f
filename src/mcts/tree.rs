//! Arena-allocated search tree.
//!
//! Nodes are stored in a `Vec` and linked by [`NodeId`], so backpropagation is a plain
//! loop over parent indices and the whole tree is dropped in one go after a search.

use crate::game::game_state::GameState;
use crate::game::mark::Mark;
use crate::mcts::node::{NodeId, SearchNode};
use crate::mcts::rollout::{outcome_reward, simulate_playout};
use crate::mcts::selection::select_best_child;
use rand::Rng;

#[derive(Debug)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
    optimizing_player: Mark,
}

impl SearchTree {
    /// Creates a tree whose statistics are kept for the side to move in `state`.
    pub fn new(state: GameState) -> Self {
        let optimizing_player = state.current_player();
        Self {
            nodes: vec![SearchNode::root(state)],
            optimizing_player,
        }
    }

    pub fn optimizing_player(&self) -> Mark {
        self.optimizing_player
    }

    /// # Panics
    /// Panics if the NodeId is invalid.
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// # Panics
    /// Panics if the NodeId is invalid.
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }

    pub fn root(&self) -> &SearchNode {
        self.get(NodeId::ROOT)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Expands one untried action of `id`, returning the new child.
    pub fn expand(&mut self, id: NodeId) -> Option<NodeId> {
        let node = &mut self.nodes[id.0];
        let action = node.untried_actions.pop()?;
        let mut state = node.state.clone();
        state.apply(action);

        let child_id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode::new(state, Some(id), Some(action)));
        self.nodes[id.0].children.push(child_id);
        Some(child_id)
    }

    pub fn best_child(&self, id: NodeId, exploration: f64) -> Option<NodeId> {
        select_best_child(self, id, exploration)
    }

    /// Descends from the root until it expands a new node or reaches a terminal one.
    pub fn tree_policy(&mut self, exploration: f64) -> NodeId {
        let mut current = NodeId::ROOT;
        while !self.get(current).is_terminal() {
            if !self.get(current).is_fully_expanded() {
                if let Some(child) = self.expand(current) {
                    return child;
                }
            }
            match self.best_child(current, exploration) {
                Some(child) => current = child,
                None => break,
            }
        }
        current
    }

    /// Random playout from a copy of the node's state, scored for the optimizing player.
    pub fn rollout<R: Rng + ?Sized>(&self, id: NodeId, rng: &mut R) -> i8 {
        let outcome = simulate_playout(self.get(id).state.clone(), rng);
        outcome_reward(outcome, self.optimizing_player, rng)
    }

    /// Adds `reward` to `id` and every ancestor, without changing its sign.
    pub fn backpropagate(&mut self, id: NodeId, reward: i8) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &mut self.nodes[node_id.0];
            node.record(reward);
            current = node.parent;
        }
    }
}
