//! Match predicate and game status.
//!
//! Two cards match when their ranks differ by exactly one. Suits are never
//! consulted. Wrapping (K next to A) is not a match.

use serde::{Deserialize, Serialize};

use crate::cards::{Face, Location};
use crate::core::{CardId, PlayArea};

/// Numeric rank of a face (A=1 .. K=13).
#[must_use]
pub fn rank(face: Face) -> i32 {
    face.rank()
}

/// `|rank(a) - rank(b)| == 1`.
#[must_use]
pub fn can_match(a: Face, b: Face) -> bool {
    (rank(a) - rank(b)).abs() == 1
}

/// Where a game stands after the last committed operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one forward move is available.
    InProgress,
    /// The playfield is empty.
    Won,
    /// Not won, the stack is empty, and no playfield card matches the tray.
    Stuck,
}

/// Playfield cards that currently match the tray card, in playfield order.
#[must_use]
pub fn playable_cards(area: &PlayArea) -> Vec<CardId> {
    let Some(tray) = area.tray_card() else {
        return Vec::new();
    };

    area.playfield()
        .iter()
        .filter_map(|&id| area.card(id))
        .filter(|card| card.location == Location::Playfield && card.can_match(tray))
        .map(|card| card.id)
        .collect()
}

/// Can the stack feed the tray right now?
#[must_use]
pub fn can_draw(area: &PlayArea) -> bool {
    !area.stack().is_empty() && area.tray().is_some()
}

/// Evaluate win / stuck / in-progress. Always recomputed, never cached.
#[must_use]
pub fn status(area: &PlayArea) -> GameStatus {
    if area.is_won() {
        GameStatus::Won
    } else if can_draw(area) || !playable_cards(area).is_empty() {
        GameStatus::InProgress
    } else {
        GameStatus::Stuck
    }
}
