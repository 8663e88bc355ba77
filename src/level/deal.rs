//! Seeded level dealing.
//!
//! Builds a `LevelConfig` from a shuffled 52-card deck instead of a file.
//! The same seed and counts always produce the same level.

use super::config::{CardConfig, LevelConfig};
use crate::cards::{Face, Suit};
use crate::core::{GameRng, Position};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

const COLUMNS: usize = 6;
const ORIGIN: Position = Position::new(165.0, 1500.0);
const COLUMN_SPACING: f32 = 150.0;
const ROW_SPACING: f32 = 120.0;

/// A full deck in face-major order (A♣ A♦ A♥ A♠ 2♣ ...).
#[must_use]
pub fn full_deck() -> Vec<(Face, Suit)> {
    Face::ALL
        .iter()
        .flat_map(|&face| Suit::ALL.iter().map(move |&suit| (face, suit)))
        .collect()
}

/// Grid position of the `index`th playfield card.
#[must_use]
pub fn playfield_slot(index: usize) -> Position {
    let column = (index % COLUMNS) as f32;
    let row = (index / COLUMNS) as f32;
    Position::new(
        ORIGIN.x + column * COLUMN_SPACING,
        ORIGIN.y - row * ROW_SPACING,
    )
}

impl LevelConfig {
    /// Deal a level from a shuffled deck.
    ///
    /// Counts are capped so that together they never exceed one deck; the
    /// playfield is filled first.
    #[must_use]
    pub fn dealt(seed: u64, playfield_count: usize, stack_count: usize) -> Self {
        let mut rng = GameRng::new(seed);
        let mut deck = full_deck();
        rng.shuffle(&mut deck);

        let playfield_count = playfield_count.min(DECK_SIZE);
        let stack_count = stack_count.min(DECK_SIZE - playfield_count);

        let mut cards = deck.into_iter();
        let playfield = cards
            .by_ref()
            .take(playfield_count)
            .enumerate()
            .map(|(i, (face, suit))| CardConfig::new(face, suit, playfield_slot(i)))
            .collect();
        let stack = cards
            .take(stack_count)
            .map(|(face, suit)| CardConfig::new(face, suit, Position::ZERO))
            .collect();

        Self {
            level_id: 0,
            playfield,
            stack,
        }
    }
}
