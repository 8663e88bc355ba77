//! Error taxonomy.
//!
//! Two categories exist:
//! - Configuration failures (`ConfigError`) abort game start.
//! - Rejected operations (`MoveRejection`) are no-ops: the caller gets the
//!   reason back, state and undo log are untouched.
//!
//! `SnapshotError` covers the persistence contract's encode/decode paths.

use std::path::PathBuf;

use super::id::CardId;

/// A level configuration could not be produced, so no game can start.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No configuration was supplied.
    #[error("level configuration is missing")]
    Missing,

    /// The level file exists but has no content.
    #[error("level file {} is empty", .0.display())]
    Empty(PathBuf),

    /// The level file could not be read.
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),

    /// The level document is not valid JSON of the expected shape.
    #[error("failed to parse level configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A snapshot could not be encoded or decoded.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot binary encoding error: {0}")]
    Binary(#[from] bincode::Error),

    /// A card record or id collection holds a value that is not a card id.
    #[error("invalid card id {0} in snapshot")]
    InvalidCardId(i64),

    /// Two card records share one id.
    #[error("duplicate {0} in snapshot")]
    DuplicateCardId(CardId),
}

/// Why a controller operation was refused.
///
/// Every rejection leaves the play area and the undo log exactly as they were.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("{0} does not exist")]
    UnknownCard(CardId),

    #[error("{0} is not in the playfield")]
    NotInPlayfield(CardId),

    #[error("{0} is in the tray and cannot be clicked")]
    InTray(CardId),

    #[error("{0} is in the stack; draw from the stack instead")]
    InStack(CardId),

    #[error("there is no tray card to match against")]
    NoTrayCard,

    #[error("{card} does not match tray card {tray}")]
    NoMatch { card: CardId, tray: CardId },

    #[error("the stack is empty")]
    StackEmpty,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("undo refers to missing {0}")]
    UndoTargetMissing(CardId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        let err = MoveRejection::NoMatch { card: CardId(1), tray: CardId(4) };
        assert_eq!(err.to_string(), "Card(1) does not match tray card Card(4)");
        assert_eq!(MoveRejection::NothingToUndo.to_string(), "nothing to undo");
    }

    #[test]
    fn test_config_error_from_parse() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::from(parse);
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse level configuration"));
    }
}
