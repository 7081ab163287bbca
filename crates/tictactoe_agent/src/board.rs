//! The 3x3 board, its cell views and change notification.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::error::BoardError;
use crate::listener::{CellListener, ListenerId, Listeners};
use crate::{Mark, Status, rules};

/// Side length of the grid.
pub const SIZE: usize = 3;

/// Number of cells on the grid.
pub const CELLS: usize = SIZE * SIZE;

/// Read-only view of one cell, produced while enumerating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct BoardCell {
    /// Row (0-2).
    pub row: usize,
    /// Column (0-2).
    pub col: usize,
    /// Mark held by the cell.
    pub mark: Mark,
}

impl BoardCell {
    /// Row-major flat index of the cell.
    pub fn index(&self) -> usize {
        self.row * SIZE + self.col
    }
}

/// Tic-tac-toe board.
///
/// Cells are stored in row-major order. The board is mutated only through
/// [`Board::place`], which notifies registered listeners. Clones and
/// [`Board::duplicate`] copy the cells but never the listeners.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; CELLS],
    #[serde(skip)]
    listeners: Listeners,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `mark` into `(row, col)` and notifies every listener.
    ///
    /// No occupancy check is performed; callers that need one use
    /// [`Board::try_place`]. Coordinates must be within the grid.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) {
        debug_assert!(row < SIZE && col < SIZE, "cell ({row}, {col}) off the board");
        self.cells[row * SIZE + col] = mark;
        self.listeners.notify(row, col, mark);
    }

    /// Places `mark` after checking bounds and occupancy.
    #[instrument(skip(self))]
    pub fn try_place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        if row >= SIZE || col >= SIZE {
            warn!("Placement rejected: out of bounds");
            return Err(BoardError::OutOfBounds { row, col });
        }
        if mark.is_empty() {
            return Err(BoardError::EmptyMark);
        }
        let current = self.get(row, col);
        if !current.is_empty() {
            warn!(%current, "Placement rejected: cell occupied");
            return Err(BoardError::Occupied {
                row,
                col,
                mark: current,
            });
        }
        self.place(row, col, mark);
        Ok(())
    }

    /// Returns the mark at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.cells[row * SIZE + col]
    }

    /// Returns the mark at a row-major flat index (0-8).
    pub fn get_flat(&self, index: usize) -> Mark {
        self.cells[index]
    }

    /// Returns true if `(row, col)` holds no mark.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn marks(&self) -> &[Mark; CELLS] {
        &self.cells
    }

    /// Independent copy of the cells with no listeners attached.
    pub fn duplicate(&self) -> Self {
        Self {
            cells: self.cells,
            listeners: Listeners::default(),
        }
    }

    /// Enumerates the nine cells in row-major order.
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            board: self,
            index: 0,
        }
    }

    /// Enumerates the unoccupied cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = BoardCell> + '_ {
        self.cells().filter(|cell| cell.mark.is_empty())
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    /// Returns true when no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Current state of the game on this board.
    ///
    /// `SideA` is checked before `SideB`; a board without a winner is
    /// drawn once full and running otherwise.
    #[instrument(level = "trace", skip(self))]
    pub fn status(&self) -> Status {
        match rules::winner(self) {
            Some(Mark::SideA) => Status::SideAWins,
            Some(Mark::SideB) => Status::SideBWins,
            _ if self.is_full() => Status::Drawn,
            _ => Status::Running,
        }
    }

    /// Registers a listener called after every placement.
    pub fn add_listener(&mut self, listener: impl CellListener + 'static) -> ListenerId {
        self.listeners.add(Arc::new(listener))
    }

    /// Registers an already shared listener.
    pub fn add_shared_listener(&mut self, listener: Arc<dyn CellListener>) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Unregisters a listener. Returns false if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Moves the listeners of `self` onto `other`, leaving `self` unobserved.
    pub(crate) fn transfer_listeners(&mut self, other: &mut Board) {
        other.listeners = std::mem::take(&mut self.listeners);
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                write!(f, "{}", self.get(row, col))?;
                if col < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cell symbols in row-major order.
    ///
    /// Whitespace and the separators `|` and `/` are ignored, as are whole
    /// lines of `-` and `+` such as `-+-+-`. Both `"X.O|.X.|..O"` and the
    /// output of `Display` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut index = 0;
        for line in s.lines() {
            if is_separator_row(line) {
                continue;
            }
            for c in line.chars() {
                if c.is_whitespace() || matches!(c, '|' | '/') {
                    continue;
                }
                let mark = Mark::from_symbol(c)
                    .ok_or_else(|| BoardError::Parse(format!("unexpected character {:?}", c)))?;
                if index >= CELLS {
                    return Err(BoardError::Parse(format!(
                        "more than {} cells in {:?}",
                        CELLS, s
                    )));
                }
                board.cells[index] = mark;
                index += 1;
            }
        }
        if index != CELLS {
            return Err(BoardError::Parse(format!(
                "expected {} cells, found {}",
                CELLS, index
            )));
        }
        Ok(board)
    }
}

/// A `Display` rule line: only `-` and `+`, with at least one `+`.
fn is_separator_row(line: &str) -> bool {
    let line = line.trim();
    line.contains('+') && line.chars().all(|c| matches!(c, '-' | '+'))
}

/// Row-major iterator over the nine [`BoardCell`]s of a board.
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    board: &'a Board,
    index: usize,
}

impl Iterator for Cells<'_> {
    type Item = BoardCell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= CELLS {
            return None;
        }
        let index = self.index;
        self.index += 1;
        Some(BoardCell::new(
            index / SIZE,
            index % SIZE,
            self.board.cells[index],
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = CELLS - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells<'_> {}

impl<'a> IntoIterator for &'a Board {
    type Item = BoardCell;
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}
