use crate::game::mark::Mark;

/// The 8 winning lines of a 3x3 grid, in evaluation order.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Sum of the signed mark values along a pattern.
pub fn line_sum(marks: &[Mark; 9], pattern: &[usize; 3]) -> i8 {
    pattern.iter().map(|&i| marks[i].value()).sum()
}

/// Returns the mark owning the first complete line, or `Blank` if there is none.
///
/// Applied to cells this scores a sub-board, applied to sub-board winners it scores the game.
pub fn line_winner(marks: &[Mark; 9]) -> Mark {
    for pattern in WIN_PATTERNS.iter() {
        match line_sum(marks, pattern) {
            3 => return Mark::X,
            -3 => return Mark::O,
            _ => {}
        }
    }
    Mark::Blank
}
