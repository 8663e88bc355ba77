//! Cosmetic 2D coordinates.
//!
//! Positions are never consulted by the rules. They are carried through the
//! engine so the presentation layer knows where a card sits and where it
//! must return to on undo.

use serde::{Deserialize, Serialize};

/// A 2D coordinate in presentation space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
}

impl Position {
    /// The origin, used for cards that have not been placed.
    pub const ZERO: Position = Position { x: 0.0, y: 0.0 };

    /// Create a new position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
