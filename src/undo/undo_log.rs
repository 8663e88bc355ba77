//! LIFO log of undo actions.

use serde::{Deserialize, Serialize};

use crate::core::UndoAction;

/// Undo actions in the order they were recorded (latest = end of vec).
///
/// Push and pop happen only at the tail.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UndoLog {
    actions: Vec<UndoAction>,
}

impl UndoLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: UndoAction) {
        self.actions.push(action);
    }

    /// Remove and return the most recent action.
    pub fn pop(&mut self) -> Option<UndoAction> {
        self.actions.pop()
    }

    /// The most recent action, without removing it.
    #[must_use]
    pub fn last(&self) -> Option<&UndoAction> {
        self.actions.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &UndoAction> {
        self.actions.iter()
    }
}
