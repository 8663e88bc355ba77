//! Levels: configuration documents, slot geometry, and generation.
//!
//! ## Key Types
//!
//! - `LevelConfig` / `CardConfig`: the per-level placement document
//! - `SlotGeometry` / `TableLayout`: tray and stack slot coordinates
//! - `generate` / `generate_level`: configuration → initial `PlayArea`
//!
//! ## Example
//!
//! ```
//! use tray_match::cards::{Face, Suit};
//! use tray_match::core::{CardId, Position};
//! use tray_match::level::{generate_level, LevelConfig};
//!
//! let config = LevelConfig::new(1)
//!     .with_playfield_card(Face::Four, Suit::Clubs, Position::new(200.0, 1200.0))
//!     .with_stack_card(Face::Five, Suit::Hearts);
//!
//! let area = generate_level(&config).area;
//! assert_eq!(area.playfield(), &[CardId(0)]);
//! assert_eq!(area.tray(), Some(CardId(1)));
//! ```

pub mod config;
pub mod deal;
pub mod generator;
pub mod layout;

pub use config::{CardConfig, LevelConfig};
pub use deal::{full_deck, DECK_SIZE};
pub use generator::{generate, generate_level, Generated};
pub use layout::{SlotGeometry, TableLayout};
