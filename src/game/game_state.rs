//! Full ultimate tic-tac-toe position and its turn rule.
//!
//! A turn normally places a mark in the active sub-board and sends the opponent to the
//! sub-board matching the cell just played. When a player is sent to a full sub-board the
//! turn takes two calls to [`GameState::apply`]: the first picks any open sub-board
//! (redirect mode) without placing a mark or switching players, the second places the mark.

use crate::game::mark::{Mark, Outcome};
use crate::game::sub_board::{SubBoard, BOARD_CELLS, CENTER_INDEX};
use crate::game::super_board::SuperBoard;
use crate::{Result, UltimateTttError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    super_board: SuperBoard,
    current_player: Mark,
    active_sub_board: usize,
    winner: Outcome,
}

/// Canonical value form of a [`GameState`], used for history and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub sub_boards: SuperBoard,
    pub current_sub_board: usize,
    pub current_player: Mark,
    pub winner: Outcome,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            super_board: SuperBoard::new(),
            current_player: Mark::STARTING_PLAYER,
            active_sub_board: CENTER_INDEX,
            winner: Outcome::Undecided,
        }
    }

    pub fn super_board(&self) -> &SuperBoard {
        &self.super_board
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn active_sub_board(&self) -> usize {
        self.active_sub_board
    }

    pub fn current_sub_board(&self) -> &SubBoard {
        self.super_board.sub_board(self.active_sub_board)
    }

    pub fn winner(&self) -> Outcome {
        self.winner
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_decided()
    }

    /// True when the mover was sent to a full sub-board and must pick another one.
    pub fn is_redirect_phase(&self) -> bool {
        self.current_sub_board().is_full()
    }

    pub fn is_current_sub_board_cell_blank(&self, index: usize) -> bool {
        self.current_sub_board().is_cell_blank(index)
    }

    /// Legal actions for the current phase: open sub-boards in redirect mode,
    /// blank cells of the active sub-board otherwise. Empty once decided.
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_decided() {
            return Vec::new();
        }
        if self.is_redirect_phase() {
            self.super_board.open_sub_boards()
        } else {
            self.current_sub_board().blank_cells()
        }
    }

    /// Applies a legal action. Legality is the caller's responsibility.
    pub fn apply(&mut self, action: usize) {
        debug_assert!(action < BOARD_CELLS, "action {} out of range", action);
        debug_assert!(!self.is_decided(), "game already decided");

        if self.is_redirect_phase() {
            debug_assert!(!self.super_board.sub_board(action).is_full());
            self.active_sub_board = action;
        } else {
            self.place(action);
        }
    }

    fn place(&mut self, index: usize) {
        let player = self.current_player;
        self.super_board
            .sub_board_mut(self.active_sub_board)
            .place(index, player);

        let line = self.super_board.line_winner();
        if !line.is_blank() {
            self.winner = Outcome::Win(line);
        }
        // Runs last: a winning move that fills the last cell is scored as a tie.
        if self.super_board.all_cells_filled() {
            self.winner = Outcome::Tie;
        }

        self.active_sub_board = index;
        self.current_player = player.opponent();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            sub_boards: self.super_board.clone(),
            current_sub_board: self.active_sub_board,
            current_player: self.current_player,
            winner: self.winner,
        }
    }

    pub fn from_snapshot(snapshot: BoardSnapshot) -> Result<Self> {
        if snapshot.current_sub_board >= BOARD_CELLS {
            return Err(UltimateTttError::Game(format!(
                "current sub-board {} out of range",
                snapshot.current_sub_board
            )));
        }
        if snapshot.current_player.is_blank() {
            return Err(UltimateTttError::Game(
                "current player cannot be blank".to_string(),
            ));
        }
        Ok(Self {
            super_board: snapshot.sub_boards,
            current_player: snapshot.current_player,
            active_sub_board: snapshot.current_sub_board,
            winner: snapshot.winner,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outer_row in 0..3 {
            for inner_row in 0..3 {
                let line: Vec<String> = (0..3)
                    .map(|outer_col| {
                        let board = self.super_board.sub_board(outer_row * 3 + outer_col);
                        (0..3)
                            .map(|inner_col| board.squares[inner_row * 3 + inner_col].to_string())
                            .collect::<String>()
                    })
                    .collect();
                writeln!(f, "{}", line.join(" | "))?;
            }
            if outer_row < 2 {
                writeln!(f, "----+-----+----")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    const DRAWN: [Mark; 9] = [X, O, X, X, O, O, O, X, X];

    fn drawn_board() -> SubBoard {
        SubBoard {
            squares: DRAWN,
            winner: Mark::Blank,
        }
    }

    #[test]
    fn test_new_game_starts_in_center() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Mark::X);
        assert_eq!(state.active_sub_board(), CENTER_INDEX);
        assert_eq!(state.winner(), Outcome::Undecided);
        assert_eq!(state.legal_actions(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_center_of_center() {
        let mut state = GameState::new();
        state.apply(4);
        assert_eq!(state.super_board().sub_board(4).squares[4], Mark::X);
        assert_eq!(state.active_sub_board(), 4);
        assert!(!state.is_redirect_phase());
        assert_eq!(state.current_player(), Mark::O);
        assert_eq!(state.winner(), Outcome::Undecided);
        assert!(!state.legal_actions().contains(&4));
    }

    #[test]
    fn test_placement_sends_to_matching_sub_board() {
        let mut state = GameState::new();
        state.apply(2);
        assert_eq!(state.active_sub_board(), 2);
        state.apply(7);
        assert_eq!(state.super_board().sub_board(2).squares[7], Mark::O);
        assert_eq!(state.active_sub_board(), 7);
        assert_eq!(state.current_player(), Mark::X);
    }

    #[test]
    fn test_redirect_changes_only_active_sub_board() {
        let mut state = GameState::new();
        state.super_board.sub_boards[3] = drawn_board();
        state.active_sub_board = 3;
        state.current_player = Mark::O;

        assert!(state.is_redirect_phase());
        let legal = state.legal_actions();
        assert_eq!(legal, vec![0, 1, 2, 4, 5, 6, 7, 8]);

        let before = state.clone();
        state.apply(5);
        assert_eq!(state.active_sub_board(), 5);
        assert_eq!(state.current_player(), Mark::O);
        assert_eq!(state.super_board(), before.super_board());
        assert_eq!(state.winner(), before.winner());

        state.apply(0);
        assert_eq!(state.super_board().sub_board(5).squares[0], Mark::O);
        assert_eq!(state.current_player(), Mark::X);
        assert_eq!(state.active_sub_board(), 0);
    }

    #[test]
    fn test_sub_board_and_game_win() {
        let mut state = GameState::new();
        for board in [0, 4] {
            for cell in [0, 1, 2] {
                state.super_board.sub_boards[board].place(cell, Mark::X);
            }
        }
        assert_eq!(state.super_board().sub_board(0).winner, Mark::X);

        state.super_board.sub_boards[8].place(0, Mark::X);
        state.super_board.sub_boards[8].place(1, Mark::X);
        state.active_sub_board = 8;
        state.apply(2);

        assert_eq!(state.super_board().sub_board(8).winner, Mark::X);
        assert_eq!(state.winner(), Outcome::Win(Mark::X));
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_filling_last_cell_without_line_is_tie() {
        let mut state = GameState::new();
        for board in 0..9 {
            state.super_board.sub_boards[board] = drawn_board();
        }
        state.super_board.sub_boards[6].squares[8] = Mark::Blank;
        state.active_sub_board = 6;
        state.current_player = Mark::X;

        assert_eq!(state.legal_actions(), vec![8]);
        state.apply(8);
        assert_eq!(state.winner(), Outcome::Tie);
    }

    #[test]
    fn test_tie_check_overrides_winning_last_move() {
        let mut state = GameState::new();
        let won = SubBoard {
            squares: [X, X, X, O, O, X, X, O, O],
            winner: Mark::X,
        };
        for board in 0..8 {
            state.super_board.sub_boards[board] = drawn_board();
        }
        state.super_board.sub_boards[0] = won.clone();
        state.super_board.sub_boards[4] = won;
        state.super_board.sub_boards[8] = SubBoard {
            squares: [O, X, O, O, O, X, X, X, Mark::Blank],
            winner: Mark::Blank,
        };
        state.active_sub_board = 8;
        state.current_player = Mark::X;

        state.apply(8);
        assert_eq!(state.super_board().sub_board(8).winner, Mark::X);
        assert_eq!(state.super_board().line_winner(), Mark::X);
        assert_eq!(state.winner(), Outcome::Tie);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = GameState::new();
        original.apply(4);
        let mut copy = original.clone();
        let snapshot = original.snapshot();

        copy.apply(0);
        copy.apply(8);
        assert_eq!(original.snapshot(), snapshot);
        assert_ne!(copy.snapshot(), snapshot);

        let copy_snapshot = copy.snapshot();
        original.apply(1);
        assert_eq!(copy.snapshot(), copy_snapshot);
    }

    #[test]
    fn test_random_play_keeps_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut state = GameState::new();
            let mut decided = None;
            while !state.is_decided() {
                let legal = state.legal_actions();
                assert!(!legal.is_empty());
                let redirect = state.is_redirect_phase();
                for &action in &legal {
                    if redirect {
                        assert!(!state.super_board().sub_board(action).is_full());
                    } else {
                        assert!(state.is_current_sub_board_cell_blank(action));
                    }
                }
                let action = legal[rng.random_range(0..legal.len())];
                state.apply(action);
                if state.is_decided() && decided.is_none() {
                    decided = Some(state.winner());
                }
            }
            assert_eq!(Some(state.winner()), decided);
            assert!(state.legal_actions().is_empty());
        }
    }

    #[test]
    fn test_snapshot_restores_equivalent_state() {
        let mut state = GameState::new();
        for action in [4, 0, 8, 4] {
            state.apply(action);
        }
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        let parsed: BoardSnapshot = serde_json::from_str(&json).unwrap();
        let restored = GameState::from_snapshot(parsed).unwrap();
        assert_eq!(restored, state);

        let value = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(value["currentSubBoard"], 4);
        assert_eq!(value["currentPlayer"], 1);
        assert_eq!(value["subBoards"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn test_snapshot_rejects_invalid_fields() {
        let mut snapshot = GameState::new().snapshot();
        snapshot.current_sub_board = 9;
        assert!(GameState::from_snapshot(snapshot).is_err());

        let mut snapshot = GameState::new().snapshot();
        snapshot.current_player = Mark::Blank;
        assert!(GameState::from_snapshot(snapshot).is_err());
    }
}
