//! MCTS Hyperparameters Configuration
//!
//! The search only has two tunables: the UCB1 exploration constant used while descending
//! the tree, and the one used when the final move is read off the root.

use serde::{Deserialize, Serialize};

/// MCTS hyperparameters configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MCTSHyperparameters {
    /// Exploration constant of the tree policy
    /// Default: 0.1
    pub exploration_constant: f64,

    /// Exploration constant when picking the recommended move
    /// 0.0 = pure exploitation
    /// Default: 0.0
    pub final_exploration: f64,
}

impl Default for MCTSHyperparameters {
    fn default() -> Self {
        Self {
            exploration_constant: 0.1,
            final_exploration: 0.0,
        }
    }
}

impl MCTSHyperparameters {
    /// Validate that both constants are finite and non-negative
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("exploration_constant", self.exploration_constant),
            ("final_exploration", self.final_exploration),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a finite value >= 0, got {}", name, value));
            }
        }
        Ok(())
    }

    /// Create a configuration string for logging
    pub fn to_config_string(&self) -> String {
        format!(
            "c[{:.2}]_final[{:.2}]",
            self.exploration_constant, self.final_exploration
        )
    }
}
