//! # tray-match
//!
//! Core of a single-level tray card-matching puzzle.
//!
//! Cards sit in one of three places: a face-up playfield, a face-down stack,
//! or the single-slot tray. A playfield card whose rank differs from the tray
//! card's rank by exactly one replaces the tray card. The top stack card can
//! always replace the tray card. Every such move is recorded and can be
//! undone in reverse order. Clearing the playfield wins the level.
//!
//! ## Design Principles
//!
//! 1. **Validate, then commit**: commands check every precondition before
//!    touching state. A rejected command changes nothing.
//!
//! 2. **Identity by id**: cards are stored once, keyed by `CardId`. The
//!    playfield, stack and tray hold ids only.
//!
//! 3. **Presentation-agnostic**: slot coordinates come from a `SlotGeometry`
//!    and observers receive typed `GameEvent`s. No rendering lives here.
//!
//! ## Modules
//!
//! - `core`: ids, positions, play area, undo actions, snapshots, errors, RNG
//! - `cards`: faces, suits, locations, the card model
//! - `rules`: rank, match predicate, game status
//! - `undo`: the undo log and its inversion logic
//! - `events`: game events and the observer bus
//! - `level`: level documents, slot geometry, generation, dealing
//! - `controller`: the game controller

pub mod core;
pub mod cards;
pub mod rules;
pub mod undo;
pub mod events;
pub mod level;
pub mod controller;

// Re-export commonly used types
pub use crate::core::{
    CardId, CardIdAllocator, Position,
    PlayArea, GameRng,
    CardMove, UndoAction, UndoKind,
    CardRecord, Snapshot,
    ConfigError, MoveRejection, SnapshotError,
};

pub use crate::cards::{Card, Face, Location, Suit};

pub use crate::rules::{can_match, rank, GameStatus};

pub use crate::undo::{UndoLog, UndoManager};

pub use crate::events::{EventBus, EventLog, GameEvent, GameObserver, ObserverId};

pub use crate::level::{
    generate, generate_level, Generated,
    CardConfig, LevelConfig,
    SlotGeometry, TableLayout,
};

pub use crate::controller::{GameController, MoveOutcome};
