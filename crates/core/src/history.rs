//! History module - bounded snapshot stack for single-step undo
//!
//! The stack's top always mirrors the board as of the last recorded move.
//! `undo` drops that top and restores the entry beneath it, so a history
//! holding a single snapshot (the starting position) has nothing to undo.

use std::collections::VecDeque;

use crate::board::Board;
use crate::error::HistoryError;
use crate::snapshot::BoardSnapshot;
use crate::types::HISTORY_CAPACITY;

#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<BoardSnapshot>,
    capacity: usize,
}

impl History {
    /// A capacity of 0 is treated as 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `undo` would restore anything
    pub fn can_undo(&self) -> bool {
        self.entries.len() > 1
    }

    /// Push the board's current state, evicting the oldest entry past capacity
    pub fn snapshot(&mut self, board: &Board) {
        self.push(board.snapshot());
    }

    pub fn push(&mut self, snapshot: BoardSnapshot) {
        self.entries.push_back(snapshot);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Drop the latest snapshot and restore the board from the one beneath it
    pub fn undo(&mut self, board: &mut Board) -> Result<(), HistoryError> {
        if !self.can_undo() {
            return Err(HistoryError::UndoUnavailable);
        }
        self.entries.pop_back();
        let previous = self.entries.back().ok_or(HistoryError::UndoUnavailable)?;
        board.restore(previous);
        Ok(())
    }

    pub fn latest(&self) -> Option<&BoardSnapshot> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}
