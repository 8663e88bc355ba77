//! Undo manager: records forward transitions and inverts the latest one.

use log::{debug, warn};

use super::invert;
use super::undo_log::UndoLog;
use crate::core::{MoveRejection, PlayArea, UndoAction};

/// Owns the undo log and dispatches inversions by action kind.
#[derive(Clone, Debug, Default)]
pub struct UndoManager {
    log: UndoLog,
}

impl UndoManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a forward transition. Call before mutating state.
    pub fn record(&mut self, action: UndoAction) {
        debug!(
            "undo: recorded {:?} from={} to={}",
            action.kind, action.from_card, action.to_card
        );
        self.log.push(action);
    }

    /// Invert the most recent transition.
    ///
    /// On success the action is popped and returned. On failure neither the
    /// log nor the play area changes.
    pub fn undo(&mut self, area: &mut PlayArea) -> Result<UndoAction, MoveRejection> {
        let Some(&action) = self.log.last() else {
            return Err(MoveRejection::NothingToUndo);
        };

        if let Err(rejection) = invert::validate(area, &action) {
            warn!("undo: cannot invert {:?}: {}", action.kind, rejection);
            return Err(rejection);
        }

        self.log.pop();
        invert::apply(area, &action);

        debug!(
            "undo: inverted {:?} from={} to={}",
            action.kind, action.from_card, action.to_card
        );
        Ok(action)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.log.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Forget every recorded transition.
    pub fn clear(&mut self) {
        self.log.clear();
    }

    #[must_use]
    pub fn log(&self) -> &UndoLog {
        &self.log
    }
}
