use crate::game::mark::Mark;
use crate::game::win_patterns::line_winner;
use serde::{Deserialize, Serialize};

/// Number of cells in a sub-board, and of sub-boards in the super-board.
pub const BOARD_CELLS: usize = 9;

/// Index of the centre cell / centre sub-board.
pub const CENTER_INDEX: usize = 4;

/// Converts external (x, y) coordinates to a cell index.
///
/// `x` is the column from the left, `y` the row counted upward from the bottom,
/// so `(0, 2)` is the top-left cell (index 0) and `(2, 0)` the bottom-right (index 8).
pub fn index_from_xy(x: usize, y: usize) -> usize {
    x + 3 * (2 - y)
}

/// Inverse of [`index_from_xy`].
pub fn xy_from_index(index: usize) -> (usize, usize) {
    (index % 3, 2 - index / 3)
}

/// One of the nine inner boards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubBoard {
    pub squares: [Mark; BOARD_CELLS],
    pub winner: Mark,
}

impl SubBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|square| !square.is_blank())
    }

    pub fn is_cell_blank(&self, index: usize) -> bool {
        self.squares[index].is_blank()
    }

    pub fn blank_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, square)| if square.is_blank() { Some(i) } else { None })
            .collect()
    }

    /// Places `mark` and scores the board. A decided winner is never replaced.
    pub fn place(&mut self, index: usize, mark: Mark) {
        debug_assert!(self.is_cell_blank(index), "cell {} already played", index);
        self.squares[index] = mark;
        if self.winner.is_blank() {
            self.winner = line_winner(&self.squares);
        }
    }
}
