//! Undo actions: minimal, self-sufficient records of forward transitions.
//!
//! An `UndoAction` is captured at the moment a forward move is validated,
//! before any state changes, and holds everything needed to invert that
//! move without consulting any other history:
//!
//! - `from_card`: the card that moved into the tray
//! - `to_card`: the card that was in the tray before the move
//! - `from_position`: where `from_card` must return to
//! - `to_position`: where `to_card` sat in the tray

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::id::CardId;
use super::position::Position;

/// The kind of forward transition an undo action inverts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UndoKind {
    /// The top of the stack replaced the tray card.
    ReplaceFromStack,
    /// A matching playfield card replaced the tray card.
    ReplaceFromPlayfield,
}

/// A card and the coordinate it should be animated to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardMove {
    pub card: CardId,
    pub target: Position,
}

impl CardMove {
    #[must_use]
    pub fn new(card: CardId, target: Position) -> Self {
        Self { card, target }
    }
}

/// A recorded, invertible forward transition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UndoAction {
    pub kind: UndoKind,
    pub from_card: CardId,
    pub to_card: CardId,
    pub from_position: Position,
    pub to_position: Position,
}

impl UndoAction {
    #[must_use]
    pub fn new(
        kind: UndoKind,
        from_card: CardId,
        to_card: CardId,
        from_position: Position,
        to_position: Position,
    ) -> Self {
        Self {
            kind,
            from_card,
            to_card,
            from_position,
            to_position,
        }
    }

    /// The moves that undoing this action performs: `from_card` back to its
    /// origin, `to_card` back into the tray.
    #[must_use]
    pub fn restore_moves(&self) -> SmallVec<[CardMove; 2]> {
        smallvec![
            CardMove::new(self.from_card, self.from_position),
            CardMove::new(self.to_card, self.to_position),
        ]
    }
}
