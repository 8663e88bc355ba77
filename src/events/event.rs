//! Outbound game events.
//!
//! Events are emitted strictly after a mutation commits. They describe what
//! changed so a presentation layer can animate it; nothing in the engine
//! waits on them or reads anything back.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardId, CardMove, UndoAction, UndoKind};

/// A notification for the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A forward transition was applied.
    TransitionApplied {
        kind: UndoKind,
        /// Cards to animate and where to.
        moves: SmallVec<[CardMove; 2]>,
        /// The card pushed out of the tray, if any. It is not animated by
        /// the engine; it stays where it was, untracked.
        evicted: Option<CardId>,
    },

    /// The given action was inverted.
    UndoApplied(UndoAction),

    /// The playfield is empty.
    Won,

    /// No forward move remains and the game is not won.
    NoMovesLeft,

    /// The undo control should be enabled (`true`) or disabled (`false`).
    UndoAvailabilityChanged(bool),

    /// The whole play area was replaced (restart or resume). Rebuild views.
    Reset,
}

impl GameEvent {
    /// Card ids whose presentation this event affects.
    #[must_use]
    pub fn affected_cards(&self) -> SmallVec<[CardId; 2]> {
        match self {
            GameEvent::TransitionApplied { moves, evicted, .. } => {
                moves.iter().map(|m| m.card).chain(evicted.iter().copied()).collect()
            }
            GameEvent::UndoApplied(action) => {
                action.restore_moves().iter().map(|m| m.card).collect()
            }
            _ => SmallVec::new(),
        }
    }
}
