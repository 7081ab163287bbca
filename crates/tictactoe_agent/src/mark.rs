//! Marks that can occupy a cell.

use serde::{Deserialize, Serialize};

/// Content of a single cell: one of the two sides, or nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mark {
    /// First side (rendered as `X`).
    SideA,
    /// Second side (rendered as `O`).
    SideB,
    /// Unoccupied cell.
    #[default]
    Empty,
}

impl Mark {
    /// Returns the opposing mark. `Empty` maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::SideA => Mark::SideB,
            Mark::SideB => Mark::SideA,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Numeric polarity: +1 for `SideA`, -1 for `SideB`, 0 for `Empty`.
    pub fn polarity(self) -> i32 {
        match self {
            Mark::SideA => 1,
            Mark::SideB => -1,
            Mark::Empty => 0,
        }
    }

    /// Returns true for `Empty`.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Single-character symbol used in board rendering.
    pub fn symbol(self) -> char {
        match self {
            Mark::SideA => 'X',
            Mark::SideB => 'O',
            Mark::Empty => '.',
        }
    }

    /// Parses a cell symbol. Accepts `X`/`A`, `O`/`B` (any case) and `.`, `-`, `_` for empty.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' | 'A' => Some(Mark::SideA),
            'O' | 'B' => Some(Mark::SideB),
            '.' | '-' | '_' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for mark in Mark::iter() {
            assert_eq!(mark.opponent().opponent(), mark);
        }
        assert_eq!(Mark::Empty.opponent(), Mark::Empty);
        assert_eq!(Mark::SideA.opponent(), Mark::SideB);
    }

    #[test]
    fn test_polarity_is_antisymmetric() {
        for mark in Mark::iter() {
            assert_eq!(mark.polarity(), -mark.opponent().polarity());
        }
    }

    #[test]
    fn test_symbol_parsing() {
        for mark in Mark::iter() {
            assert_eq!(Mark::from_symbol(mark.symbol()), Some(mark));
        }
        assert_eq!(Mark::from_symbol('b'), Some(Mark::SideB));
        assert_eq!(Mark::from_symbol('?'), None);
    }
}
