//! Heuristic move selection.
//!
//! [`Agent`] holds no state: every query reads the caller's board and does
//! its speculative placements on private duplicates, so the caller's board
//! and its listeners are never touched.

mod choice;
pub mod heuristic;
mod search;

use std::num::NonZeroU32;

use tracing::{debug, instrument};

use crate::error::AgentError;
use crate::{Board, Mark, rules};

pub use choice::Choice;

/// Utility assigned to an occupied cell. No legal placement scores this low.
pub const ILLEGAL_UTILITY: i32 = i32::MIN;

/// Lookahead used by [`Agent::best_choice`].
pub const DEFAULT_DEPTH: u32 = 1;

/// Stateless move-selection engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Agent;

impl Agent {
    /// Creates an agent.
    pub fn new() -> Self {
        Self
    }

    /// Number of lines holding no opponent mark (0..=8).
    pub fn chances_to_win(&self, board: &Board, mark: Mark) -> u32 {
        rules::chances_to_win(board, mark)
    }

    /// Fewest placements `mark` needs to complete a line (0..=3).
    pub fn minimum_steps_to_win(&self, board: &Board, mark: Mark) -> u32 {
        rules::minimum_steps_to_win(board, mark)
    }

    /// Utility of `mark` playing `(row, col)` with `depth` plies of lookahead.
    ///
    /// Returns [`ILLEGAL_UTILITY`] for an occupied cell.
    #[instrument(skip(self, board))]
    pub fn utility(
        &self,
        board: &Board,
        mark: Mark,
        row: usize,
        col: usize,
        depth: u32,
    ) -> Result<i32, AgentError> {
        let depth = validate(mark, depth)?;
        Ok(search::utility(board, mark, row, col, depth))
    }

    /// Best placement for `mark` searching `depth` plies.
    ///
    /// Returns `Ok(None)` when no cell is empty. Ties resolve to the
    /// earliest cell in row-major order.
    #[instrument(skip(self, board))]
    pub fn best_choice_at(
        &self,
        board: &Board,
        mark: Mark,
        depth: u32,
    ) -> Result<Option<Choice>, AgentError> {
        let depth = validate(mark, depth)?;
        let choice = search::best_choice(board, mark, depth);
        match &choice {
            Some(choice) => debug!(%mark, %choice, "Agent chose cell"),
            None => debug!(%mark, "No legal move"),
        }
        Ok(choice)
    }

    /// Best placement for `mark` with [`DEFAULT_DEPTH`] lookahead.
    pub fn best_choice(&self, board: &Board, mark: Mark) -> Result<Option<Choice>, AgentError> {
        self.best_choice_at(board, mark, DEFAULT_DEPTH)
    }
}

/// Rejects inputs the search has no meaning for.
fn validate(mark: Mark, depth: u32) -> Result<NonZeroU32, AgentError> {
    if mark.is_empty() {
        return Err(AgentError::EmptyMark);
    }
    NonZeroU32::new(depth).ok_or(AgentError::InvalidDepth(depth))
}
