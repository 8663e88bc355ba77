//! Match rules and game status.
//!
//! The controller consults these functions before every forward move and
//! after every commit. They are pure: nothing here mutates a play area.

pub mod matching;

pub use matching::{can_draw, can_match, playable_cards, rank, status, GameStatus};
