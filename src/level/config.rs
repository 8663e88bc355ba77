//! Level configuration: static per-level card placement.
//!
//! ## Document Format
//!
//! ```json
//! {
//!   "Playfield": [
//!     { "CardFace": 3, "CardSuit": 0, "Position": { "x": 250, "y": 1000 } }
//!   ],
//!   "Stack": [
//!     { "CardFace": 4, "CardSuit": 2 }
//!   ]
//! }
//! ```
//!
//! Out-of-range `CardFace` / `CardSuit` values decode to `None` rather than
//! failing. Missing keys default. Stack entries may carry a `Position`, but
//! the generator ignores it.

use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::cards::{Face, Suit};
use crate::core::{ConfigError, Position};

/// One card's placement in a level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(rename = "CardFace", default)]
    pub face: Face,
    #[serde(rename = "CardSuit", default)]
    pub suit: Suit,
    #[serde(rename = "Position", default)]
    pub position: Position,
}

impl CardConfig {
    #[must_use]
    pub fn new(face: Face, suit: Suit, position: Position) -> Self {
        Self { face, suit, position }
    }
}

/// A level: ordered playfield entries and ordered stack entries.
///
/// The last stack entry is the first card dealt to the tray.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    #[serde(rename = "levelId", default)]
    pub level_id: u32,
    #[serde(rename = "Playfield", default)]
    pub playfield: Vec<CardConfig>,
    #[serde(rename = "Stack", default)]
    pub stack: Vec<CardConfig>,
}

impl LevelConfig {
    #[must_use]
    pub fn new(level_id: u32) -> Self {
        Self {
            level_id,
            ..Self::default()
        }
    }

    /// Add a playfield card (builder pattern).
    #[must_use]
    pub fn with_playfield_card(mut self, face: Face, suit: Suit, position: Position) -> Self {
        self.playfield.push(CardConfig::new(face, suit, position));
        self
    }

    /// Add a stack card (builder pattern).
    #[must_use]
    pub fn with_stack_card(mut self, face: Face, suit: Suit) -> Self {
        self.stack.push(CardConfig::new(face, suit, Position::ZERO));
        self
    }

    /// Total number of cards the level deals.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.playfield.len() + self.stack.len()
    }

    /// Parse a level document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a level document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a level file. An empty file counts as missing content.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            warn!("level: failed to read {}: {}", path.display(), e);
            ConfigError::Io(e)
        })?;

        if json.trim().is_empty() {
            warn!("level: {} is empty", path.display());
            return Err(ConfigError::Empty(path.to_path_buf()));
        }

        let config = Self::from_json_str(&json).map_err(|e| {
            warn!("level: failed to parse {}: {}", path.display(), e);
            e
        })?;

        debug!(
            "level: loaded {} ({} playfield, {} stack)",
            path.display(),
            config.playfield.len(),
            config.stack.len()
        );
        Ok(config)
    }

    /// Load `level_<id>.json` from `dir` and tag it with `level_id`.
    pub fn load_level(dir: impl AsRef<Path>, level_id: u32) -> Result<Self, ConfigError> {
        let mut config = Self::load(Self::path_for(dir, level_id))?;
        config.level_id = level_id;
        Ok(config)
    }

    /// Conventional file path for a level id.
    #[must_use]
    pub fn path_for(dir: impl AsRef<Path>, level_id: u32) -> PathBuf {
        dir.as_ref().join(format!("level_{level_id}.json"))
    }
}
