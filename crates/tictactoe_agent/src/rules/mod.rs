//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), evaluated line by line.
//! Both the board's status and the agent's heuristic are built from them.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::is_full;
pub use lines::{LINES, Line, chances_to_win};
pub use win::{minimum_steps_to_win, winner};
