use crate::game::game_state::{BoardSnapshot, GameState};
use crate::{Result, UltimateTttError};

/// Ordered snapshots of a game, one per applied action plus the initial position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    snapshots: Vec<BoardSnapshot>,
}

impl GameHistory {
    pub fn new(initial: &GameState) -> Self {
        Self {
            snapshots: vec![initial.snapshot()],
        }
    }

    pub fn record(&mut self, state: &GameState) {
        self.snapshots.push(state.snapshot());
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drops every snapshot after `step` and rebuilds the state at that step.
    pub fn jump_to(&mut self, step: usize) -> Result<GameState> {
        if step >= self.snapshots.len() {
            return Err(UltimateTttError::Game(format!(
                "history step {} out of range ({} recorded)",
                step,
                self.snapshots.len()
            )));
        }
        self.snapshots.truncate(step + 1);
        GameState::from_snapshot(self.snapshots[step].clone())
    }
}
