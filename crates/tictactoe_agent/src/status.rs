//! Derived game status.

use serde::{Deserialize, Serialize};

use crate::Mark;

/// State of the game, computed from a board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Status {
    /// No line completed and at least one empty cell.
    Running,
    /// `SideA` completed a line.
    SideAWins,
    /// `SideB` completed a line.
    SideBWins,
    /// Board full with no completed line.
    Drawn,
}

impl Status {
    /// Returns true once the game can no longer continue.
    pub fn is_over(self) -> bool {
        self != Status::Running
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Status::SideAWins => Some(Mark::SideA),
            Status::SideBWins => Some(Mark::SideB),
            Status::Running | Status::Drawn => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Running => write!(f, "In progress"),
            Status::SideAWins => write!(f, "{} wins", Mark::SideA),
            Status::SideBWins => write!(f, "{} wins", Mark::SideB),
            Status::Drawn => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_only_running_continues() {
        let running: Vec<_> = Status::iter().filter(|s| !s.is_over()).collect();
        assert_eq!(running, vec![Status::Running]);
    }

    #[test]
    fn test_winner_only_for_wins() {
        for status in Status::iter() {
            let expected = matches!(status, Status::SideAWins | Status::SideBWins);
            assert_eq!(status.winner().is_some(), expected);
        }
        assert_eq!(Status::SideBWins.winner(), Some(Mark::SideB));
        assert_eq!(Status::SideAWins.to_string(), "X wins");
    }
}
