//! Human-versus-agent game on a live board.
//!
//! The human plays [`HUMAN`] and the agent plays [`AGENT`]. Front ends
//! observe the game by registering listeners on [`Session::board_mut`];
//! every placement, human or agent, goes through [`Board::place`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::agent::{Agent, Choice, DEFAULT_DEPTH};
use crate::error::{AgentError, SessionError};
use crate::{Board, Mark, Status};

/// Mark played by the human.
pub const HUMAN: Mark = Mark::SideA;

/// Mark played by the agent.
pub const AGENT: Mark = Mark::SideB;

/// Which side takes the first move in a new game.
///
/// Defaults to [`FirstPlayer::Human`] so the player moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FirstPlayer {
    /// The human opens.
    #[default]
    Human,
    /// The agent opens.
    Agent,
}

impl FirstPlayer {
    /// Toggles between `Human` and `Agent`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Agent,
            Self::Agent => Self::Human,
        }
    }

    /// Mark that moves first.
    pub fn mark(self) -> Mark {
        match self {
            Self::Human => HUMAN,
            Self::Agent => AGENT,
        }
    }
}

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct SessionSettings {
    /// Who opens each game.
    pub first_player: FirstPlayer,
    /// Agent lookahead in plies (at least 1).
    pub depth: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::default(),
            depth: DEFAULT_DEPTH,
        }
    }
}

/// Outcome of one human move and the agent's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Cell the human played.
    pub human: (usize, usize),
    /// The agent's reply, if the game was still running.
    pub agent: Option<Choice>,
    /// Status after both placements.
    pub status: Status,
}

/// A game between a human and the agent.
#[derive(Debug)]
pub struct Session {
    board: Board,
    agent: Agent,
    settings: SessionSettings,
    to_move: Mark,
}

impl Session {
    /// Starts a game. When the agent opens, its first move is already played.
    #[instrument]
    pub fn new(settings: SessionSettings) -> Result<Self, SessionError> {
        Self::with_board(Board::new(), settings)
    }

    /// Starts a game on a prepared board.
    ///
    /// Marks and listeners already on `board` are kept, so a position can
    /// be resumed with `settings.first_player` to move.
    #[instrument(skip(board))]
    pub fn with_board(board: Board, settings: SessionSettings) -> Result<Self, SessionError> {
        if settings.depth == 0 {
            return Err(AgentError::InvalidDepth(settings.depth).into());
        }
        let mut session = Self {
            board,
            agent: Agent::new(),
            settings,
            to_move: settings.first_player.mark(),
        };
        info!(first = %settings.first_player, depth = settings.depth, "Game started");
        if session.to_move == AGENT {
            session.agent_move()?;
        }
        Ok(session)
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the live board, for registering listeners.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Returns the session settings.
    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    /// Mark expected to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Current game status.
    pub fn status(&self) -> Status {
        self.board.status()
    }

    /// Plays the human's mark at `(row, col)`, then lets the agent answer.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, row: usize, col: usize) -> Result<Turn, SessionError> {
        self.ensure_turn(HUMAN)?;
        self.board.try_place(row, col, HUMAN)?;
        self.to_move = AGENT;

        let agent = if self.status().is_over() {
            None
        } else {
            Some(self.agent_move()?)
        };

        let status = self.status();
        if status.is_over() {
            info!(%status, "Game finished");
        }
        Ok(Turn {
            human: (row, col),
            agent,
            status,
        })
    }

    /// Lets the agent choose and play its move on the live board.
    #[instrument(skip(self))]
    pub fn agent_move(&mut self) -> Result<Choice, SessionError> {
        self.ensure_turn(AGENT)?;
        let choice = self
            .agent
            .best_choice_at(&self.board, AGENT, self.settings.depth)?
            .ok_or(SessionError::NoLegalMove)?;
        self.board.place(choice.row, choice.col, AGENT);
        self.to_move = HUMAN;
        debug!(%choice, "Agent played");
        Ok(choice)
    }

    /// Starts a new game, keeping the board's listeners and the settings.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let mut fresh = Board::new();
        self.board.transfer_listeners(&mut fresh);
        self.board = fresh;
        self.to_move = self.settings.first_player.mark();
        info!(first = %self.settings.first_player, "Game restarted");
        if self.to_move == AGENT {
            self.agent_move()?;
        }
        Ok(())
    }

    fn ensure_turn(&self, mark: Mark) -> Result<(), SessionError> {
        if self.status().is_over() {
            warn!("Move after game over");
            return Err(SessionError::GameOver);
        }
        if self.to_move != mark {
            warn!(%mark, to_move = %self.to_move, "Move out of turn");
            return Err(SessionError::NotYourTurn(mark));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    #[test]
    fn test_first_player_toggle() {
        assert_eq!(FirstPlayer::Human.toggle(), FirstPlayer::Agent);
        assert_eq!(FirstPlayer::Agent.toggle().toggle(), FirstPlayer::Agent);
        assert_eq!("agent".parse::<FirstPlayer>().unwrap(), FirstPlayer::Agent);
        assert_eq!(FirstPlayer::Human.to_string(), "human");
    }

    #[test]
    fn test_agent_opens_in_center() {
        let session =
            Session::new(SessionSettings::new(FirstPlayer::Agent, 1)).unwrap();
        assert_eq!(session.board().get(1, 1), AGENT);
        assert_eq!(session.to_move(), HUMAN);
    }

    #[test]
    fn test_human_move_gets_reply() {
        let mut session = Session::new(SessionSettings::default()).unwrap();
        let turn = session.human_move(0, 0).unwrap();
        let reply = turn.agent.unwrap();
        assert_ne!((reply.row, reply.col), (0, 0));
        assert_eq!(session.board().get(reply.row, reply.col), AGENT);
        assert_eq!(turn.status, Status::Running);
        assert_eq!(session.board().count(HUMAN), 1);
        assert_eq!(session.board().count(AGENT), 1);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut session = Session::new(SessionSettings::default()).unwrap();
        let reply = session.human_move(0, 0).unwrap().agent.unwrap();
        let err = session.human_move(reply.row, reply.col).unwrap_err();
        assert!(matches!(err, SessionError::Board(BoardError::Occupied { .. })));
        assert_eq!(session.to_move(), HUMAN);
    }

    #[test]
    fn test_agent_cannot_move_twice() {
        let mut session = Session::new(SessionSettings::default()).unwrap();
        assert_eq!(
            session.agent_move(),
            Err(SessionError::NotYourTurn(AGENT))
        );
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert_eq!(
            Session::new(SessionSettings::new(FirstPlayer::Human, 0)).unwrap_err(),
            SessionError::Agent(AgentError::InvalidDepth(0))
        );
    }

    #[test]
    fn test_restart_keeps_listeners() {
        let mut session = Session::new(SessionSettings::default()).unwrap();
        session
            .board_mut()
            .add_listener(|_: usize, _: usize, _: Mark| {});
        session.human_move(1, 1).unwrap();
        session.restart().unwrap();
        assert_eq!(session.board().count(Mark::Empty), 9);
        assert_eq!(session.board().listener_count(), 1);
    }

    #[test]
    fn test_game_runs_to_completion() {
        let mut session = Session::new(SessionSettings::default()).unwrap();
        while !session.status().is_over() {
            let cell = session
                .board()
                .empty_cells()
                .next()
                .expect("running game has an empty cell");
            session.human_move(cell.row, cell.col).unwrap();
        }
        assert_eq!(session.human_move(0, 0), Err(SessionError::GameOver));
    }
}
