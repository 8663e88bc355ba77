//! Card faces and suits.
//!
//! Both enums carry a `None` sentinel. Level files and snapshots encode them
//! as integers (`0..13` for faces, `0..4` for suits, `-1` for none); any
//! out-of-range integer decodes to `None` instead of failing.
//!
//! ```
//! use tray_match::cards::{Face, Suit};
//!
//! assert_eq!(Face::from_index(0), Face::Ace);
//! assert_eq!(Face::from_index(12), Face::King);
//! assert_eq!(Face::from_index(13), Face::None);
//! assert_eq!(Suit::from_index(-3), Suit::None);
//! assert_eq!(Face::Queen.rank(), 12);
//! ```

use serde::{Deserialize, Serialize};

/// A card face (A, 2..10, J, Q, K).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Face {
    #[default]
    None,
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Face {
    /// All 13 real faces in ordinal order.
    pub const ALL: [Face; 13] = [
        Face::Ace,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
        Face::Seven,
        Face::Eight,
        Face::Nine,
        Face::Ten,
        Face::Jack,
        Face::Queen,
        Face::King,
    ];

    /// Decode a face ordinal, clamping anything outside `0..13` to `None`.
    #[must_use]
    pub fn from_index(index: i32) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(Face::None)
    }

    /// The face ordinal (`Ace` = 0 .. `King` = 12, `None` = -1).
    #[must_use]
    pub fn index(self) -> i32 {
        match self {
            Face::None => -1,
            Face::Ace => 0,
            Face::Two => 1,
            Face::Three => 2,
            Face::Four => 3,
            Face::Five => 4,
            Face::Six => 5,
            Face::Seven => 6,
            Face::Eight => 7,
            Face::Nine => 8,
            Face::Ten => 9,
            Face::Jack => 10,
            Face::Queen => 11,
            Face::King => 12,
        }
    }

    /// Numeric rank: ordinal + 1, so `Ace` = 1 and `King` = 13.
    ///
    /// `None` has rank 0.
    #[must_use]
    pub fn rank(self) -> i32 {
        self.index() + 1
    }

    /// Short display symbol ("A", "10", "K", "?" for none).
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Face::None => "?",
            Face::Ace => "A",
            Face::Two => "2",
            Face::Three => "3",
            Face::Four => "4",
            Face::Five => "5",
            Face::Six => "6",
            Face::Seven => "7",
            Face::Eight => "8",
            Face::Nine => "9",
            Face::Ten => "10",
            Face::Jack => "J",
            Face::Queen => "Q",
            Face::King => "K",
        }
    }
}

impl From<i32> for Face {
    fn from(index: i32) -> Self {
        Face::from_index(index)
    }
}

impl From<Face> for i32 {
    fn from(face: Face) -> Self {
        face.index()
    }
}

/// Wire decoding. Integers outside `i32` clamp to `None` like any other
/// out-of-range value.
impl From<i64> for Face {
    fn from(index: i64) -> Self {
        i32::try_from(index).map_or(Face::None, Face::from_index)
    }
}

impl From<Face> for i64 {
    fn from(face: Face) -> Self {
        i64::from(face.index())
    }
}

/// A card suit. Purely cosmetic: the rules never look at it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Suit {
    #[default]
    None,
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All 4 real suits in ordinal order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Decode a suit ordinal, clamping anything outside `0..4` to `None`.
    #[must_use]
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            3 => Suit::Spades,
            _ => Suit::None,
        }
    }

    /// The suit ordinal (`Clubs` = 0 .. `Spades` = 3, `None` = -1).
    #[must_use]
    pub fn index(self) -> i32 {
        match self {
            Suit::None => -1,
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::None => "?",
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }
}

impl From<i32> for Suit {
    fn from(index: i32) -> Self {
        Suit::from_index(index)
    }
}

impl From<Suit> for i32 {
    fn from(suit: Suit) -> Self {
        suit.index()
    }
}

/// Wire decoding. Integers outside `i32` clamp to `None` like any other
/// out-of-range value.
impl From<i64> for Suit {
    fn from(index: i64) -> Self {
        i32::try_from(index).map_or(Suit::None, Suit::from_index)
    }
}

impl From<Suit> for i64 {
    fn from(suit: Suit) -> Self {
        i64::from(suit.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_index_round_trip() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i as i32);
            assert_eq!(Face::from_index(i as i32), *face);
        }
        assert_eq!(Face::None.index(), -1);
        assert_eq!(Face::from_index(-1), Face::None);
    }

    #[test]
    fn test_face_clamps_out_of_range() {
        assert_eq!(Face::from_index(13), Face::None);
        assert_eq!(Face::from_index(99), Face::None);
        assert_eq!(Face::from_index(i32::MIN), Face::None);
    }

    #[test]
    fn test_rank() {
        assert_eq!(Face::Ace.rank(), 1);
        assert_eq!(Face::Ten.rank(), 10);
        assert_eq!(Face::Jack.rank(), 11);
        assert_eq!(Face::King.rank(), 13);
        assert_eq!(Face::None.rank(), 0);
    }

    #[test]
    fn test_suit_index_round_trip() {
        for (i, suit) in Suit::ALL.iter().enumerate() {
            assert_eq!(suit.index(), i as i32);
            assert_eq!(Suit::from_index(i as i32), *suit);
        }
        assert_eq!(Suit::from_index(4), Suit::None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Face::Ten.symbol(), "10");
        assert_eq!(Face::Queen.symbol(), "Q");
        assert_eq!(Suit::Hearts.symbol(), "♥");
    }

    #[test]
    fn test_serde_as_integers() {
        assert_eq!(serde_json::to_string(&Face::King).unwrap(), "12");
        assert_eq!(serde_json::to_string(&Suit::None).unwrap(), "-1");

        let face: Face = serde_json::from_str("40").unwrap();
        assert_eq!(face, Face::None);
        let suit: Suit = serde_json::from_str("2").unwrap();
        assert_eq!(suit, Suit::Hearts);
    }

    #[test]
    fn test_serde_clamps_integers_wider_than_i32() {
        let face: Face = serde_json::from_str("5000000000").unwrap();
        assert_eq!(face, Face::None);
        let suit: Suit = serde_json::from_str("-5000000000").unwrap();
        assert_eq!(suit, Suit::None);
    }

    #[test]
    fn test_bincode_round_trip() {
        let bytes = bincode::serialize(&(Face::Seven, Suit::Spades, Face::None)).unwrap();
        let decoded: (Face, Suit, Face) = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, (Face::Seven, Suit::Spades, Face::None));
    }
}
