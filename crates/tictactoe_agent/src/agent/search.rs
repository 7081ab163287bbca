//! Bounded-depth best-move search.

use std::num::NonZeroU32;

use super::heuristic::evaluate;
use super::{Choice, ILLEGAL_UTILITY};
use crate::{Board, Mark};
use tracing::instrument;

/// Utility of `mark` playing `(row, col)` with `depth` plies of lookahead.
///
/// Occupied cells score [`ILLEGAL_UTILITY`]. At depth 1 the resulting
/// position is evaluated statically. Deeper, the opponent replies with its
/// own best choice one ply shallower, and the utility is that of `mark`'s
/// best follow-up at the same reduced depth.
#[instrument(level = "trace", skip(board))]
pub(super) fn utility(board: &Board, mark: Mark, row: usize, col: usize, depth: NonZeroU32) -> i32 {
    if !board.is_empty_at(row, col) {
        return ILLEGAL_UTILITY;
    }

    let mut next = board.duplicate();
    next.place(row, col, mark);

    let Some(shallower) = NonZeroU32::new(depth.get() - 1) else {
        return evaluate(&next, mark);
    };

    let opponent = mark.opponent();
    let Some(reply) = best_choice(&next, opponent, shallower) else {
        // The candidate filled the board.
        return evaluate(&next, mark);
    };
    next.place(reply.row, reply.col, opponent);

    match best_choice(&next, mark, shallower) {
        Some(follow_up) => follow_up.utility,
        None => evaluate(&next, mark),
    }
}

/// Highest-utility placement for `mark`, or `None` when the board is full.
///
/// Cells are scanned in row-major order and only a strictly greater
/// utility replaces the current best, so ties go to the earliest cell.
#[instrument(level = "trace", skip(board))]
pub(super) fn best_choice(board: &Board, mark: Mark, depth: NonZeroU32) -> Option<Choice> {
    let mut best = None;
    let mut max = ILLEGAL_UTILITY;
    for cell in board.cells() {
        let value = utility(board, mark, cell.row, cell.col, depth);
        if max < value {
            max = value;
            best = Some(Choice::new(cell.row, cell.col, value));
        }
    }
    best
}
