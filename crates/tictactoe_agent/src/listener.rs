//! Change notification for the live board.
//!
//! A [`Board`](crate::Board) keeps an ordered list of listeners and calls
//! each of them synchronously after every placement. Copies of a board never
//! inherit listeners: cloning a [`Listeners`] yields an empty list.

use std::sync::Arc;

use crate::Mark;
use tracing::debug;

/// Receives `(row, col, mark)` whenever a cell is written.
pub trait CellListener: Send + Sync {
    /// Called after the cell at `(row, col)` was set to `mark`.
    fn cell_changed(&self, row: usize, col: usize, mark: Mark);
}

impl<F> CellListener for F
where
    F: Fn(usize, usize, Mark) + Send + Sync,
{
    fn cell_changed(&self, row: usize, col: usize, mark: Mark) {
        self(row, col, mark)
    }
}

/// Handle returned on registration, used to unregister a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("listener#{}", _0)]
pub struct ListenerId(u64);

/// Registration-ordered listener list.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Arc<dyn CellListener>)>,
}

impl Listeners {
    /// Registers a listener at the end of the list.
    pub fn add(&mut self, listener: Arc<dyn CellListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        debug!(%id, count = self.entries.len(), "Listener registered");
        id
    }

    /// Removes a listener. Returns false if the id is unknown.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        let removed = self.entries.len() != before;
        debug!(%id, removed, "Listener unregistered");
        removed
    }

    /// Invokes every listener in registration order.
    pub fn notify(&self, row: usize, col: usize, mark: Mark) {
        for (_, listener) in &self.entries {
            listener.cell_changed(row, col, mark);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// Copies are scratch boards for lookahead and are never observed.
impl Clone for Listeners {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
