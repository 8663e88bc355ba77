//! Inverting a recorded transition.
//!
//! Inversion uses only the fields captured in the `UndoAction`. It never
//! searches collections for the evicted tray card; the action says which
//! card it was and where it sat.

use crate::cards::Location;
use crate::core::{MoveRejection, PlayArea, UndoAction, UndoKind};

/// Check that both cards named by `action` still exist.
pub fn validate(area: &PlayArea, action: &UndoAction) -> Result<(), MoveRejection> {
    for id in [action.from_card, action.to_card] {
        if !area.contains(id) {
            return Err(MoveRejection::UndoTargetMissing(id));
        }
    }
    Ok(())
}

/// Apply the inverse of `action` to `area`.
///
/// Callers must `validate` first; missing cards are skipped rather than
/// half-applied.
pub fn apply(area: &mut PlayArea, action: &UndoAction) {
    match action.kind {
        UndoKind::ReplaceFromStack => {
            if let Some(card) = area.card_mut(action.from_card) {
                card.place(Location::Stack, action.from_position, false, false);
            }
            area.push_stack(action.from_card);
        }
        UndoKind::ReplaceFromPlayfield => {
            if let Some(card) = area.card_mut(action.from_card) {
                card.place(Location::Playfield, action.from_position, true, true);
            }
            // Appended, not reinserted at its previous index.
            area.push_playfield(action.from_card);
        }
    }

    if let Some(card) = area.card_mut(action.to_card) {
        card.place(Location::Tray, action.to_position, true, false);
    }
    area.set_tray(Some(action.to_card));
}
