//! Static evaluation at the search horizon.
//!
//! The score packs four line statistics into decimal places, most
//! significant first:
//!
//! | weight | term | source |
//! |---|---|---|
//! | 1000 | `10 - minimum_steps_to_win(mark)` | how close `mark` is to a line |
//! | 100 | `minimum_steps_to_win(opponent)` | how far the opponent is from a line |
//! | 10 | `10 - chances_to_win(opponent)` | lines closed to the opponent |
//! | 1 | `chances_to_win(mark)` | lines still open to `mark` |
//!
//! The weights assume the 8-line geometry of the 3x3 grid.

use crate::rules::{chances_to_win, minimum_steps_to_win};
use crate::{Board, Mark};
use tracing::instrument;

const MY_STEPS_WEIGHT: i32 = 1000;
const OPPONENT_STEPS_WEIGHT: i32 = 100;
const OPPONENT_CHANCES_WEIGHT: i32 = 10;
const MY_CHANCES_WEIGHT: i32 = 1;

const OFFSET: i32 = 10;

/// Evaluates `board` from `mark`'s point of view. Higher is better.
#[must_use]
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board, mark: Mark) -> i32 {
    let opponent = mark.opponent();

    let my_steps = OFFSET - minimum_steps_to_win(board, mark) as i32;
    let opponent_steps = minimum_steps_to_win(board, opponent) as i32;
    let opponent_chances = OFFSET - chances_to_win(board, opponent) as i32;
    let my_chances = chances_to_win(board, mark) as i32;

    my_steps * MY_STEPS_WEIGHT
        + opponent_steps * OPPONENT_STEPS_WEIGHT
        + opponent_chances * OPPONENT_CHANCES_WEIGHT
        + my_chances * MY_CHANCES_WEIGHT
}
