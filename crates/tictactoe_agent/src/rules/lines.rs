//! The eight winning lines and the open-line count.

use crate::{Board, Mark};
use tracing::instrument;

/// Three flat cell indices forming a row, column or diagonal.
pub type Line = [usize; 3];

/// Rows, then columns, then the two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns true if no cell of `line` holds `mark`.
pub(crate) fn line_free_of(board: &Board, line: &Line, mark: Mark) -> bool {
    line.iter().all(|&i| board.get_flat(i) != mark)
}

/// Counts the lines that contain no mark of `mark`'s opponent (0..=8).
///
/// A larger count means more lines are still open for `mark`. The count
/// says nothing about whether any of them can actually be completed.
#[instrument(level = "trace", skip(board))]
pub fn chances_to_win(board: &Board, mark: Mark) -> u32 {
    let opponent = mark.opponent();
    LINES
        .iter()
        .filter(|line| line_free_of(board, line, opponent))
        .count() as u32
}
