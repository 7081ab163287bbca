//! Tic-tac-toe board model with a heuristic move-selection agent.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, placement with change notification, status
//! - **Rules**: line scans shared by status detection and the heuristic
//! - **Agent**: static evaluation plus bounded-depth best-move search
//! - **Session**: a human-versus-agent game on a live board
//!
//! # Example
//!
//! ```
//! use tictactoe_agent::{Agent, Board, Mark, Status};
//!
//! let mut board = Board::new();
//! board.place(0, 0, Mark::SideA);
//!
//! let choice = Agent::new()
//!     .best_choice(&board, Mark::SideB)
//!     .expect("valid query")
//!     .expect("board has empty cells");
//! board.place(choice.row, choice.col, Mark::SideB);
//! assert_eq!(board.status(), Status::Running);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod agent;
mod board;
mod error;
mod listener;
mod mark;
pub mod rules;
mod session;
mod status;

pub use agent::{Agent, Choice, DEFAULT_DEPTH, ILLEGAL_UTILITY};
pub use board::{Board, BoardCell, CELLS, Cells, SIZE};
pub use error::{AgentError, BoardError, SessionError};
pub use listener::{CellListener, ListenerId};
pub use mark::Mark;
pub use session::{AGENT, FirstPlayer, HUMAN, Session, SessionSettings, Turn};
pub use status::Status;
