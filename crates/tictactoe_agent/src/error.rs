//! Error types for board placement and move selection.

use crate::Mark;

/// Error raised by checked board operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Coordinates outside the 3x3 grid.
    #[display("Cell ({}, {}) is outside the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied by {}", row, col, mark)]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Mark found in the cell.
        mark: Mark,
    },

    /// Attempted to place `Mark::Empty` through a checked placement.
    #[display("Cannot place an empty mark")]
    EmptyMark,

    /// Board notation could not be parsed.
    #[display("Invalid board notation: {}", _0)]
    Parse(String),
}

impl std::error::Error for BoardError {}

/// Error raised at the agent's API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AgentError {
    /// Search depth must be at least one ply.
    #[display("Search depth must be at least 1 (got {})", _0)]
    InvalidDepth(u32),

    /// The searching side must be `SideA` or `SideB`.
    #[display("Cannot search on behalf of the empty mark")]
    EmptyMark,
}

impl std::error::Error for AgentError {}

/// Error raised by a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,

    /// It is the agent's turn, not the human's (or the reverse).
    #[display("It is not {}'s turn", _0)]
    NotYourTurn(Mark),

    /// The agent found no empty cell to play.
    #[display("No legal move available")]
    NoLegalMove,

    /// The requested placement was rejected by the board.
    #[display("{}", _0)]
    Board(BoardError),

    /// The agent rejected its configuration.
    #[display("{}", _0)]
    Agent(AgentError),
}

impl std::error::Error for SessionError {}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

impl From<AgentError> for SessionError {
    fn from(err: AgentError) -> Self {
        Self::Agent(err)
    }
}
