//! Card system: faces, suits, locations, and card entities.
//!
//! ## Key Types
//!
//! - `Face`: A..K with a `None` sentinel; the only input to the match rule
//! - `Suit`: Cosmetic, carried for presentation
//! - `Location`: Playfield, Tray, Stack, or unassigned
//! - `Card`: Identity plus mutable runtime attributes

pub mod card;
pub mod face;

pub use card::{Card, Location};
pub use face::{Face, Suit};
