//! Win detection for tic-tac-toe.

use super::lines::{LINES, Line};
use crate::{Board, Mark};
use tracing::instrument;

/// Placements still needed on `line`, or 3 if the opponent already holds a cell of it.
fn steps_on_line(board: &Board, line: &Line, mark: Mark) -> u32 {
    let opponent = mark.opponent();
    let mut steps = 3;
    for &i in line {
        let cell = board.get_flat(i);
        if cell == opponent {
            return 3;
        }
        if cell == mark {
            steps -= 1;
        }
    }
    steps
}

/// Fewest placements `mark` needs to complete any line (0..=3).
///
/// Lines holding an opponent mark count as 3. A result of 0 means
/// some line is already entirely `mark`.
#[instrument(level = "trace", skip(board))]
pub fn minimum_steps_to_win(board: &Board, mark: Mark) -> u32 {
    LINES
        .iter()
        .map(|line| steps_on_line(board, line, mark))
        .min()
        .unwrap_or(3)
}

/// Returns the side holding a complete line, checking `SideA` first.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::SideA, Mark::SideB]
        .into_iter()
        .find(|&mark| minimum_steps_to_win(board, mark) == 0)
}
