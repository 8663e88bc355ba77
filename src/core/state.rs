//! Play area state: every card and the collection it belongs to.
//!
//! ## Collections
//!
//! - `playfield`: ordered ids the player can match against the tray
//! - `stack`: face-down reserve; the last id is the top
//! - `tray`: at most one face-up card
//!
//! In steady state every card id appears in exactly one collection. The one
//! exception is the card evicted from the tray by a forward move: it keeps
//! `Location::Tray` but is tracked by no collection until the move that
//! evicted it is undone. `untracked_cards` lists such cards.
//!
//! ## Mutation
//!
//! Only the controller and the undo manager mutate a play area, and only one
//! command runs at a time. Collection operations never panic: popping an
//! empty stack returns `None`, removing an absent id returns `false`.

use rustc_hash::{FxHashMap, FxHashSet};

use super::error::SnapshotError;
use super::id::CardId;
use super::snapshot::{CardRecord, Snapshot};
use crate::cards::Card;

/// The authoritative mutable game data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayArea {
    /// Card records by id.
    cards: FxHashMap<CardId, Card>,

    /// Playfield ids, in presentation order.
    playfield: Vec<CardId>,

    /// Stack ids (top = end of vec).
    stack: Vec<CardId>,

    /// Current tray occupant.
    tray: Option<CardId>,
}

impl PlayArea {
    /// Create an empty play area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Cards ===

    /// Add a card record, returning any record it replaced.
    pub fn add_card(&mut self, card: Card) -> Option<Card> {
        self.cards.insert(card.id, card)
    }

    /// Remove a card record. Collections are left untouched.
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        self.cards.remove(&id)
    }

    /// Get a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a mutable card by id.
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(&id)
    }

    /// Check if a card record exists.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Iterate over all cards (unordered).
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// All card ids in ascending order.
    #[must_use]
    pub fn card_ids(&self) -> Vec<CardId> {
        let mut ids: Vec<_> = self.cards.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Total number of card records.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    // === Playfield ===

    #[must_use]
    pub fn playfield(&self) -> &[CardId] {
        &self.playfield
    }

    /// Append an id to the end of the playfield.
    pub fn push_playfield(&mut self, id: CardId) {
        self.playfield.push(id);
    }

    /// Remove the first occurrence of `id`, preserving the order of the rest.
    ///
    /// Returns true if the id was found and removed.
    pub fn remove_from_playfield(&mut self, id: CardId) -> bool {
        if let Some(pos) = self.playfield.iter().position(|&c| c == id) {
            self.playfield.remove(pos);
            true
        } else {
            false
        }
    }

    // === Stack ===

    #[must_use]
    pub fn stack(&self) -> &[CardId] {
        &self.stack
    }

    /// The next card the stack would feed to the tray.
    #[must_use]
    pub fn stack_top(&self) -> Option<CardId> {
        self.stack.last().copied()
    }

    /// Push an id onto the top of the stack.
    pub fn push_stack(&mut self, id: CardId) {
        self.stack.push(id);
    }

    /// Remove and return the top of the stack, or `None` if it is empty.
    pub fn pop_stack(&mut self) -> Option<CardId> {
        self.stack.pop()
    }

    // === Tray ===

    #[must_use]
    pub fn tray(&self) -> Option<CardId> {
        self.tray
    }

    /// The tray card's record, if the tray is occupied.
    #[must_use]
    pub fn tray_card(&self) -> Option<&Card> {
        self.tray.and_then(|id| self.cards.get(&id))
    }

    pub fn set_tray(&mut self, id: Option<CardId>) {
        self.tray = id;
    }

    // === Queries ===

    /// The sole win condition: the playfield is empty.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.playfield.is_empty()
    }

    /// Cards that no collection tracks, in ascending id order.
    ///
    /// Outside a pending forward move this is the list of cards evicted from
    /// the tray whose moves have not been undone.
    #[must_use]
    pub fn untracked_cards(&self) -> Vec<CardId> {
        let tracked: FxHashSet<CardId> = self
            .playfield
            .iter()
            .chain(self.stack.iter())
            .chain(self.tray.iter())
            .copied()
            .collect();

        self.card_ids()
            .into_iter()
            .filter(|id| !tracked.contains(id))
            .collect()
    }

    // === Snapshots ===

    /// Capture a complete snapshot. Cards are written in ascending id order.
    #[must_use]
    pub fn to_snapshot(&self) -> Snapshot {
        let cards = self
            .card_ids()
            .into_iter()
            .filter_map(|id| self.cards.get(&id))
            .map(CardRecord::from)
            .collect();

        Snapshot {
            cards,
            playfield_card_ids: self.playfield.iter().map(|id| i64::from(id.0)).collect(),
            stack_card_ids: self.stack.iter().map(|id| i64::from(id.0)).collect(),
            tray_card_id: CardId::to_wire(self.tray),
        }
    }

    /// Rebuild a play area from a snapshot, verbatim.
    ///
    /// Fails on ids that cannot be card ids (negative or too large) and on
    /// two records sharing one id.
    /// A tray id of `-1` means the tray is empty.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        let mut area = Self::new();

        for record in &snapshot.cards {
            let card = record.to_card()?;
            let id = card.id;
            if area.add_card(card).is_some() {
                return Err(SnapshotError::DuplicateCardId(id));
            }
        }

        area.playfield = decode_ids(&snapshot.playfield_card_ids)?;
        area.stack = decode_ids(&snapshot.stack_card_ids)?;
        area.tray = match snapshot.tray_card_id {
            CardId::NONE_WIRE => None,
            raw => Some(CardId::from_wire(raw).ok_or(SnapshotError::InvalidCardId(raw))?),
        };

        Ok(area)
    }

    /// Discard all current state and replace it with the snapshot's.
    ///
    /// On error the current state is left untouched.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        *self = Self::from_snapshot(snapshot)?;
        Ok(())
    }
}

fn decode_ids(raw: &[i64]) -> Result<Vec<CardId>, SnapshotError> {
    raw.iter()
        .map(|&r| CardId::from_wire(r).ok_or(SnapshotError::InvalidCardId(r)))
        .collect()
}
