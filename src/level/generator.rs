//! Level configuration → initial play area.
//!
//! ## Id Assignment
//!
//! Ids are assigned sequentially from 0: every playfield entry in order,
//! then every stack entry in order. With N playfield and M stack entries the
//! ids are `0..N+M`, and the tray starts with id `N+M-1` (the last stack
//! entry) when M ≥ 1.
//!
//! ## Initial Placement
//!
//! - Playfield: face-up, clickable, at the configured position
//! - Stack: face-down, not clickable, at the origin
//! - Tray: the top stack card, face-up, not clickable

use log::debug;

use super::config::LevelConfig;
use crate::cards::{Card, Location};
use crate::core::{CardId, CardIdAllocator, ConfigError, PlayArea, Position};

/// The result of a generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Generated {
    pub area: PlayArea,
    /// The id a further allocation would receive.
    pub next_card_id: CardId,
}

/// Generate a play area, failing only when no configuration is supplied.
pub fn generate(config: Option<&LevelConfig>) -> Result<Generated, ConfigError> {
    config.map(generate_level).ok_or(ConfigError::Missing)
}

/// Generate a play area from a configuration. Never fails: invalid faces or
/// suits were already decoded to `None`.
#[must_use]
pub fn generate_level(config: &LevelConfig) -> Generated {
    let mut ids = CardIdAllocator::new();
    let mut area = PlayArea::new();

    for entry in &config.playfield {
        let mut card = Card::new(ids.alloc(), entry.face, entry.suit);
        card.place(Location::Playfield, entry.position, true, true);
        area.push_playfield(card.id);
        area.add_card(card);
    }

    for entry in &config.stack {
        let mut card = Card::new(ids.alloc(), entry.face, entry.suit);
        card.place(Location::Stack, Position::ZERO, false, false);
        area.push_stack(card.id);
        area.add_card(card);
    }

    if let Some(tray_id) = area.pop_stack() {
        if let Some(card) = area.card_mut(tray_id) {
            card.location = Location::Tray;
            card.flipped = true;
            card.clickable = false;
        }
        area.set_tray(Some(tray_id));
    }

    debug!(
        "generator: level {} -> {} playfield, {} stack, tray {:?}",
        config.level_id,
        area.playfield().len(),
        area.stack().len(),
        area.tray()
    );

    Generated {
        area,
        next_card_id: ids.peek(),
    }
}
