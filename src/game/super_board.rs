use crate::game::mark::Mark;
use crate::game::sub_board::{SubBoard, BOARD_CELLS};
use crate::game::win_patterns::line_winner;
use serde::{Deserialize, Serialize};

/// The 3x3 arrangement of sub-boards, indexed like the cells of a sub-board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuperBoard {
    pub sub_boards: [SubBoard; BOARD_CELLS],
}

impl SuperBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sub_board(&self, index: usize) -> &SubBoard {
        &self.sub_boards[index]
    }

    pub fn sub_board_mut(&mut self, index: usize) -> &mut SubBoard {
        &mut self.sub_boards[index]
    }

    /// Winners of the sub-boards, used as the marks of the outer grid.
    pub fn sub_board_winners(&self) -> [Mark; BOARD_CELLS] {
        std::array::from_fn(|i| self.sub_boards[i].winner)
    }

    /// Mark owning a line of sub-board winners, or `Blank`.
    pub fn line_winner(&self) -> Mark {
        line_winner(&self.sub_board_winners())
    }

    /// True once all 81 cells are filled.
    pub fn all_cells_filled(&self) -> bool {
        self.sub_boards.iter().all(SubBoard::is_full)
    }

    pub fn open_sub_boards(&self) -> Vec<usize> {
        self.sub_boards
            .iter()
            .enumerate()
            .filter_map(|(i, board)| if board.is_full() { None } else { Some(i) })
            .collect()
    }
}
