//! Persisted snapshot format.
//!
//! ```json
//! {
//!   "cards": [
//!     { "cardId": 0, "face": 3, "suit": 1, "location": 0,
//!       "position": { "x": 250.0, "y": 1000.0 },
//!       "isFlipped": true, "isClickable": true }
//!   ],
//!   "playfieldCardIds": [0],
//!   "stackCardIds": [],
//!   "trayCardId": -1
//! }
//! ```
//!
//! Faces, suits, and locations are integers; `-1` is the "none" sentinel for
//! each of them and for `trayCardId`. Missing keys take the card defaults,
//! so older or hand-written snapshots still load.
//!
//! A snapshot taken between a forward move and its undo contains the evicted
//! tray card: it keeps `location = 1` but appears in no id list.

use serde::{Deserialize, Serialize};

use super::error::SnapshotError;
use super::id::CardId;
use super::position::Position;
use crate::cards::{Card, Face, Location, Suit};

fn none_id() -> i64 {
    CardId::NONE_WIRE
}

/// One card's full field set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    #[serde(default = "none_id")]
    pub card_id: i64,
    #[serde(default)]
    pub face: Face,
    #[serde(default)]
    pub suit: Suit,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub is_flipped: bool,
    #[serde(default)]
    pub is_clickable: bool,
}

impl CardRecord {
    /// Convert back into a card. Fails if `card_id` is not a valid id.
    pub fn to_card(&self) -> Result<Card, SnapshotError> {
        let id = CardId::from_wire(self.card_id).ok_or(SnapshotError::InvalidCardId(self.card_id))?;
        Ok(Card {
            id,
            face: self.face,
            suit: self.suit,
            location: self.location,
            position: self.position,
            flipped: self.is_flipped,
            clickable: self.is_clickable,
        })
    }
}

impl From<&Card> for CardRecord {
    fn from(card: &Card) -> Self {
        Self {
            card_id: i64::from(card.id.0),
            face: card.face,
            suit: card.suit,
            location: card.location,
            position: card.position,
            is_flipped: card.flipped,
            is_clickable: card.clickable,
        }
    }
}

/// A complete play area snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub cards: Vec<CardRecord>,
    #[serde(default)]
    pub playfield_card_ids: Vec<i64>,
    #[serde(default)]
    pub stack_card_ids: Vec<i64>,
    #[serde(default = "none_id")]
    pub tray_card_id: i64,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            playfield_card_ids: Vec::new(),
            stack_card_ids: Vec::new(),
            tray_card_id: CardId::NONE_WIRE,
        }
    }
}

impl Snapshot {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode with the compact binary codec.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from the compact binary codec.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
