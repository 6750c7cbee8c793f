//! Monte Carlo Tree Search move selection.
//!
//! Every iteration runs the tree policy from the root, a full random playout from the
//! selected node and a backpropagation of the reward to the root. After the budget is spent
//! the root child with the best net reward (no exploration bonus) is recommended.
use crate::game::game_state::GameState;
use crate::mcts::hyperparameters::MCTSHyperparameters;
use crate::mcts::mcts_result::MCTSResult;
use crate::mcts::node::NodeId;
use crate::mcts::tree::SearchTree;
use rand::Rng;

/// Random-playout MCTS engine.
#[derive(Debug, Clone, Default)]
pub struct MctsEngine {
    hyperparams: MCTSHyperparameters,
}

impl MctsEngine {
    pub fn new(hyperparams: MCTSHyperparameters) -> Self {
        Self { hyperparams }
    }

    /// Recommended action for the side to move, or `None` if the game is decided.
    pub fn choose_move(&self, state: &GameState, iterations: usize) -> Option<usize> {
        self.choose_move_with_rng(state, iterations, &mut rand::rng())
    }

    pub fn choose_move_with_rng<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        iterations: usize,
        rng: &mut R,
    ) -> Option<usize> {
        self.search(state, iterations, rng)
            .map(|result| result.best_action)
    }

    /// Runs `iterations` rollouts from `state` and reports the root statistics.
    ///
    /// Returns `None` without searching when `state` is already decided. `state` itself is
    /// never modified; the tree works on its own copies.
    pub fn search<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        iterations: usize,
        rng: &mut R,
    ) -> Option<MCTSResult> {
        if state.is_decided() {
            return None;
        }

        let mut tree = SearchTree::new(state.clone());
        for _ in 0..iterations {
            let leaf = tree.tree_policy(self.hyperparams.exploration_constant);
            let reward = tree.rollout(leaf, rng);
            tree.backpropagate(leaf, reward);
        }

        let best = tree.best_child(NodeId::ROOT, self.hyperparams.final_exploration)?;
        let best_action = tree.get(best).action?;
        let result = MCTSResult::from_tree(&tree, best_action, iterations);

        log::debug!(
            "MCTS {} for {:?}: {} iterations, {} nodes, action {} ({:?})",
            self.hyperparams.to_config_string(),
            tree.optimizing_player(),
            iterations,
            result.tree_size,
            best_action,
            result.best_child_stats()
        );

        Some(result)
    }
}

/// Convenience wrapper with default hyperparameters.
pub fn mcts_choose_move(state: &GameState, iterations: usize) -> Option<usize> {
    MctsEngine::default().choose_move(state, iterations)
}
