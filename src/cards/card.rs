//! Card entities - identity plus runtime attributes.
//!
//! A `Card` has an immutable identity (`id`, `face`, `suit`) and mutable
//! runtime attributes (`location`, `position`, `flipped`, `clickable`).
//! Cards are owned exclusively by the `PlayArea`; presentation objects refer
//! to a card by id, never the other way round.

use serde::{Deserialize, Serialize};

use super::face::{Face, Suit};
use crate::core::{CardId, Position};
use crate::rules;

/// Which collection a card belongs to.
///
/// Encoded as an integer in snapshots: `Playfield` = 0, `Tray` = 1,
/// `Stack` = 2, `None` = -1. Unknown integers decode to `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Location {
    /// Not assigned to any collection.
    #[default]
    None,
    Playfield,
    Tray,
    Stack,
}

impl Location {
    #[must_use]
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => Location::Playfield,
            1 => Location::Tray,
            2 => Location::Stack,
            _ => Location::None,
        }
    }

    #[must_use]
    pub fn index(self) -> i32 {
        match self {
            Location::None => -1,
            Location::Playfield => 0,
            Location::Tray => 1,
            Location::Stack => 2,
        }
    }
}

impl From<i32> for Location {
    fn from(index: i32) -> Self {
        Location::from_index(index)
    }
}

impl From<Location> for i32 {
    fn from(location: Location) -> Self {
        location.index()
    }
}

impl From<i64> for Location {
    fn from(index: i64) -> Self {
        i32::try_from(index).map_or(Location::None, Location::from_index)
    }
}

impl From<Location> for i64 {
    fn from(location: Location) -> Self {
        i64::from(location.index())
    }
}

/// A single card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique id, assigned at generation time.
    pub id: CardId,

    pub face: Face,

    /// Cosmetic only.
    pub suit: Suit,

    /// Current collection.
    pub location: Location,

    /// Presentation coordinate.
    pub position: Position,

    /// Face-up?
    pub flipped: bool,

    /// Can the player click this card?
    pub clickable: bool,
}

impl Card {
    /// Create an unplaced, face-down, unclickable card.
    #[must_use]
    pub fn new(id: CardId, face: Face, suit: Suit) -> Self {
        Self {
            id,
            face,
            suit,
            location: Location::None,
            position: Position::ZERO,
            flipped: false,
            clickable: false,
        }
    }

    /// Numeric rank of this card's face (A=1 .. K=13).
    #[must_use]
    pub fn rank(&self) -> i32 {
        self.face.rank()
    }

    /// Can this card replace (or be replaced by) `other` in the tray?
    #[must_use]
    pub fn can_match(&self, other: &Card) -> bool {
        rules::can_match(self.face, other.face)
    }

    /// Place the card in a collection with the given visibility.
    pub fn place(&mut self, location: Location, position: Position, flipped: bool, clickable: bool) {
        self.location = location;
        self.position = position;
        self.flipped = flipped;
        self.clickable = clickable;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{} #{}", self.face.symbol(), self.suit.symbol(), self.id.0)
    }
}
