//! Bounded, linear undo/redo log.
//!
//! DESIGN
//! ======
//! The history stores and sequences action records but never interprets
//! them: `undo` hands the record back and the caller reverts it against the
//! scene. Capacity bounds only the undo stack; pushing past it evicts the
//! oldest record so the most recent `max_states` edits stay undoable.
//! Pushing a new record discards the redo stack (no branching history).

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

use crate::consts::DEFAULT_MAX_STATES;
use crate::error::{ErrorClass, ErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("nothing to redo")]
    NothingToRedo,
    #[error("history capacity must be at least 1")]
    ZeroCapacity,
}

impl ErrorCode for HistoryError {
    fn class(&self) -> ErrorClass {
        match self {
            Self::NothingToUndo | Self::NothingToRedo => ErrorClass::EmptyHistory,
            Self::ZeroCapacity => ErrorClass::Validation,
        }
    }
}

/// Fixed-capacity undo/redo stacks over caller-defined action records.
#[derive(Debug, Clone)]
pub struct History<A> {
    // Oldest at the front, most recent at the back.
    undo_stack: VecDeque<A>,
    redo_stack: Vec<A>,
    max_states: usize,
}

impl<A> Default for History<A> {
    fn default() -> Self {
        Self { undo_stack: VecDeque::new(), redo_stack: Vec::new(), max_states: DEFAULT_MAX_STATES }
    }
}

impl<A> History<A> {
    /// # Errors
    ///
    /// Returns [`HistoryError::ZeroCapacity`] if `max_states` is 0.
    pub fn new(max_states: usize) -> Result<Self, HistoryError> {
        if max_states == 0 {
            return Err(HistoryError::ZeroCapacity);
        }
        Ok(Self { undo_stack: VecDeque::with_capacity(max_states), redo_stack: Vec::new(), max_states })
    }

    #[must_use]
    pub fn max_states(&self) -> usize {
        self.max_states
    }

    /// Record a committed action. Clears the redo stack and evicts the oldest
    /// undo entry if the stack is over capacity.
    pub fn push(&mut self, action: A) {
        self.redo_stack.clear();
        self.undo_stack.push_back(action);
        while self.undo_stack.len() > self.max_states {
            self.undo_stack.pop_front();
        }
    }

    /// Move the most recent action to the redo stack and return it.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NothingToUndo`] if the undo stack is empty.
    pub fn undo(&mut self) -> Result<&A, HistoryError> {
        let action = self.undo_stack.pop_back().ok_or(HistoryError::NothingToUndo)?;
        self.redo_stack.push(action);
        self.redo_stack.last().ok_or(HistoryError::NothingToUndo)
    }

    /// Move the most recently undone action back to the undo stack and return it.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NothingToRedo`] if the redo stack is empty.
    pub fn redo(&mut self) -> Result<&A, HistoryError> {
        let action = self.redo_stack.pop().ok_or(HistoryError::NothingToRedo)?;
        self.undo_stack.push_back(action);
        while self.undo_stack.len() > self.max_states {
            self.undo_stack.pop_front();
        }
        self.undo_stack.back().ok_or(HistoryError::NothingToRedo)
    }

    /// Put the last undone action back on the undo stack without touching the
    /// redo stack below it. Used when reverting that action failed.
    pub fn cancel_undo(&mut self) {
        if let Some(action) = self.redo_stack.pop() {
            self.undo_stack.push_back(action);
        }
    }

    /// Put the last redone action back on the redo stack. Used when
    /// re-applying that action failed.
    pub fn cancel_redo(&mut self) {
        if let Some(action) = self.undo_stack.pop_back() {
            self.redo_stack.push(action);
        }
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// The action `undo` would return next.
    #[must_use]
    pub fn peek_undo(&self) -> Option<&A> {
        self.undo_stack.back()
    }

    /// The action `redo` would return next.
    #[must_use]
    pub fn peek_redo(&self) -> Option<&A> {
        self.redo_stack.last()
    }

    /// Undoable actions, oldest first.
    pub fn undo_iter(&self) -> impl Iterator<Item = &A> {
        self.undo_stack.iter()
    }
}
