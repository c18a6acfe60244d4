//! Snapshot-based undo/redo.
//!
//! Each entry is a complete copy of the value it guards. Restoring an entry
//! hands back that copy; nothing in the stacks is shared with the live
//! value, so later mutation can never reach a stored entry.

use serde::{Deserialize, Serialize};

/// Undo and redo stacks of full snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History<T> {
    undo: Vec<T>,
    redo: Vec<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }
}

impl<T> History<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push the pre-mutation snapshot. Clears the redo stack.
    pub fn record(&mut self, before: T) {
        self.undo.push(before);
        self.redo.clear();
    }

    /// Step back: `current` moves onto the redo stack and the most recent
    /// undo entry is returned. `None` (and no change) when there is nothing
    /// to undo.
    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Mirror of `undo`.
    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Entries available to `undo`.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Entries available to `redo`.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Every stored entry, undo stack first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.undo.iter().chain(self.redo.iter())
    }
}
