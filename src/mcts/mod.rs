pub mod algorithm;
pub mod hyperparameters;
pub mod mcts_result;
pub mod node;
pub mod rollout;
pub mod selection;
pub mod tree;

pub use algorithm::{mcts_choose_move, MctsEngine};
pub use hyperparameters::MCTSHyperparameters;
pub use mcts_result::{ChildStats, MCTSResult};
