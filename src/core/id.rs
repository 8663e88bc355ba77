//! Card identification.
//!
//! Every card in a play area has a unique `CardId`. Ids are assigned once,
//! by the level generator, and never reused for the lifetime of the area.
//!
//! ## Wire Format
//!
//! The persisted snapshot stores ids as plain integers with `-1` meaning
//! "no card". `CardId::to_wire` / `CardId::from_wire` convert between the two.
//!
//! ```
//! use tray_match::core::CardId;
//!
//! assert_eq!(CardId::to_wire(Some(CardId::new(7))), 7);
//! assert_eq!(CardId::to_wire(None), -1);
//! assert_eq!(CardId::from_wire(-1), None);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one play area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Wire value for "no card".
    pub const NONE_WIRE: i64 = -1;

    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Encode an optional id for the snapshot format.
    #[must_use]
    pub fn to_wire(id: Option<CardId>) -> i64 {
        id.map_or(Self::NONE_WIRE, |id| i64::from(id.0))
    }

    /// Decode a snapshot id. Negative or out-of-range values yield `None`.
    #[must_use]
    pub fn from_wire(raw: i64) -> Option<CardId> {
        u32::try_from(raw).ok().map(CardId)
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Sequential id source threaded through level generation.
///
/// Each generation run owns its allocator, so repeated runs always start
/// from zero and never share hidden state.
#[derive(Clone, Debug, Default)]
pub struct CardIdAllocator {
    next: u32,
}

impl CardIdAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to `alloc` will return.
    #[must_use]
    pub fn peek(&self) -> CardId {
        CardId(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_raw() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(CardId::from(42), id);
    }

    #[test]
    fn test_wire_round_trip() {
        assert_eq!(CardId::from_wire(CardId::to_wire(Some(CardId(3)))), Some(CardId(3)));
        assert_eq!(CardId::from_wire(CardId::to_wire(None)), None);
    }

    #[test]
    fn test_from_wire_rejects_out_of_range() {
        assert_eq!(CardId::from_wire(-5), None);
        assert_eq!(CardId::from_wire(i64::from(u32::MAX) + 1), None);
        assert_eq!(CardId::from_wire(0), Some(CardId(0)));
    }

    #[test]
    fn test_allocator_is_sequential() {
        let mut ids = CardIdAllocator::new();

        assert_eq!(ids.alloc(), CardId(0));
        assert_eq!(ids.alloc(), CardId(1));
        assert_eq!(ids.peek(), CardId(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "123");
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
