pub mod game_state;
pub mod history;
pub mod mark;
pub mod sub_board;
pub mod super_board;
pub mod win_patterns;

pub use game_state::{BoardSnapshot, GameState};
pub use history::GameHistory;
pub use mark::{Mark, Outcome};
pub use sub_board::{SubBoard, BOARD_CELLS, CENTER_INDEX};
pub use super_board::SuperBoard;
