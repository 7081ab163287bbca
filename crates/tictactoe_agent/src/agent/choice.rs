//! The agent's recommended placement.

use serde::{Deserialize, Serialize};

/// Where to place next, and the utility the agent assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Choice {
    /// Row (0-2).
    pub row: usize,
    /// Column (0-2).
    pub col: usize,
    /// Estimated value of the placement for the side that searched.
    pub utility: i32,
}

impl Choice {
    /// Returns the row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the utility.
    pub fn utility(&self) -> i32 {
        self.utility
    }

    /// Row-major flat index of the chosen cell.
    pub fn index(&self) -> usize {
        self.row * crate::board::SIZE + self.col
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) utility={}",
            self.row, self.col, self.utility
        )
    }
}
