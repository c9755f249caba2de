//! Snapshot-based undo/redo for a single field.

use std::collections::VecDeque;

/// Default number of undo steps kept per field.
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

/// Content, cursor and anchor captured before an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub text: String,
    pub cursor: usize,
    pub anchor: usize,
}

impl FieldSnapshot {
    pub fn new(text: impl Into<String>, cursor: usize, anchor: usize) -> Self {
        Self {
            text: text.into(),
            cursor,
            anchor,
        }
    }
}

/// Edit history with undo/redo stacks.
///
/// The undo stack is bounded; the oldest entry is evicted once it is full.
/// While a snapshot is being restored, `record` is ignored so the restore
/// itself never becomes an undoable edit.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: VecDeque<FieldSnapshot>,
    redo_stack: Vec<FieldSnapshot>,
    max_size: usize,
    restoring: bool,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Create a new edit history with default max size
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_DEPTH)
    }

    /// Create a new edit history with specified max size
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(max_size.min(DEFAULT_HISTORY_DEPTH)),
            redo_stack: Vec::new(),
            max_size,
            restoring: false,
        }
    }

    /// Push the pre-edit state (clears redo stack). No-op while restoring.
    pub fn record(&mut self, snapshot: FieldSnapshot) {
        if self.restoring || self.max_size == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_size {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(snapshot);
        self.redo_stack.clear();
        tracing::debug!(depth = self.undo_stack.len(), "recorded undo snapshot");
    }

    /// Swap `current` onto the redo stack and return the state to restore.
    ///
    /// On `Some`, the history stays in restoring mode until [`end_restore`]
    /// is called.
    ///
    /// [`end_restore`]: EditHistory::end_restore
    pub fn undo(&mut self, current: FieldSnapshot) -> Option<FieldSnapshot> {
        let previous = self.undo_stack.pop_back()?;
        self.restoring = true;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Swap `current` onto the undo stack and return the state to restore.
    pub fn redo(&mut self, current: FieldSnapshot) -> Option<FieldSnapshot> {
        let next = self.redo_stack.pop()?;
        self.restoring = true;
        self.undo_stack.push_back(current);
        Some(next)
    }

    /// Leave restoring mode after a snapshot has been applied
    pub fn end_restore(&mut self) {
        self.restoring = false;
    }

    pub fn is_restoring(&self) -> bool {
        self.restoring
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Get the number of snapshots in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of snapshots in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Oldest snapshot still retained
    pub fn oldest(&self) -> Option<&FieldSnapshot> {
        self.undo_stack.front()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}
