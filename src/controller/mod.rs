//! Game controller: validates and applies transitions, drives undo,
//! reports status, and notifies observers.
//!
//! ## Commands
//!
//! - `replace_from_playfield(id)`: a matching playfield card replaces the tray
//! - `replace_from_stack()`: the top stack card replaces the tray
//! - `undo()`: invert the most recent of the above
//! - `click_card(id)`: route a click by the card's location
//!
//! Rejected commands return a `MoveRejection`, log a warning, and change
//! nothing.
//!
//! ## Example
//!
//! ```
//! use tray_match::cards::{Face, Suit};
//! use tray_match::controller::GameController;
//! use tray_match::core::{CardId, Position};
//! use tray_match::level::{LevelConfig, TableLayout};
//!
//! let config = LevelConfig::new(1)
//!     .with_playfield_card(Face::Four, Suit::Clubs, Position::new(200.0, 1200.0))
//!     .with_stack_card(Face::Five, Suit::Hearts);
//!
//! let mut game = GameController::start(Some(config), TableLayout::default()).unwrap();
//!
//! let outcome = game.click_card(CardId(0)).unwrap();
//! assert!(outcome.is_won());
//!
//! game.undo().unwrap();
//! assert_eq!(game.area().tray(), Some(CardId(1)));
//! ```

mod game;

pub use game::{GameController, MoveOutcome};
