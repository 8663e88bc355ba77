//! Game controller implementation.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::cards::Location;
use crate::core::{
    CardId, CardMove, ConfigError, MoveRejection, PlayArea, Position, Snapshot, SnapshotError,
    UndoAction, UndoKind,
};
use crate::events::{EventBus, GameEvent, GameObserver, ObserverId};
use crate::level::{generate_level, LevelConfig, SlotGeometry, TableLayout};
use crate::rules::{self, GameStatus};
use crate::undo::{UndoLog, UndoManager};

/// Result of a committed forward move.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The undo action recorded for the move.
    pub action: UndoAction,
    /// Game status after the move.
    pub status: GameStatus,
}

impl MoveOutcome {
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// Owns one game session: play area, undo history, geometry, observers.
///
/// Commands run to completion one at a time. Each either commits fully
/// (state, undo log, then events) or is rejected with no effect.
pub struct GameController<G: SlotGeometry = TableLayout> {
    area: PlayArea,
    undo: UndoManager,
    geometry: G,
    events: EventBus,
    /// Kept for `restart`. `None` for resumed sessions.
    level: Option<LevelConfig>,
    /// Last availability reported to observers.
    undo_available: bool,
}

fn reject(operation: &str, rejection: MoveRejection) -> MoveRejection {
    warn!("controller: {} rejected: {}", operation, rejection);
    rejection
}

impl<G: SlotGeometry> GameController<G> {
    /// Start a game from a level configuration.
    ///
    /// `None` means the loader could not produce a configuration; the game
    /// cannot start.
    pub fn start(config: Option<LevelConfig>, geometry: G) -> Result<Self, ConfigError> {
        let Some(config) = config else {
            warn!("controller: cannot start, level configuration is missing");
            return Err(ConfigError::Missing);
        };

        let area = generate_level(&config).area;
        info!(
            "controller: started level {} ({} playfield, {} stack)",
            config.level_id,
            area.playfield().len(),
            area.stack().len()
        );

        let mut controller = Self::from_area(area, geometry);
        controller.level = Some(config);
        Ok(controller)
    }

    /// Load `level_<id>.json` from `dir` and start it.
    pub fn start_level(
        dir: impl AsRef<std::path::Path>,
        level_id: u32,
        geometry: G,
    ) -> Result<Self, ConfigError> {
        let config = LevelConfig::load_level(dir, level_id)?;
        Self::start(Some(config), geometry)
    }

    /// Resume a saved session. The undo log starts empty.
    pub fn resume(snapshot: &Snapshot, geometry: G) -> Result<Self, SnapshotError> {
        let area = PlayArea::from_snapshot(snapshot)?;
        info!("controller: resumed session with {} cards", area.card_count());
        Ok(Self::from_area(area, geometry))
    }

    /// Wrap an existing play area.
    #[must_use]
    pub fn from_area(area: PlayArea, geometry: G) -> Self {
        Self {
            area,
            undo: UndoManager::new(),
            geometry,
            events: EventBus::new(),
            level: None,
            undo_available: false,
        }
    }

    // === Observers ===

    /// Register an observer. It immediately receives the current undo
    /// availability.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> ObserverId {
        let id = self.events.register(observer);
        self.events
            .emit_to(id, &GameEvent::UndoAvailabilityChanged(self.undo_available));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.events.unregister(id)
    }

    // === Queries ===

    #[must_use]
    pub fn area(&self) -> &PlayArea {
        &self.area
    }

    #[must_use]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// The configuration this session was generated from, if any.
    #[must_use]
    pub fn level(&self) -> Option<&LevelConfig> {
        self.level.as_ref()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn undo_log(&self) -> &UndoLog {
        self.undo.log()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.area.is_won()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        rules::status(&self.area)
    }

    /// Would clicking this card match the tray?
    #[must_use]
    pub fn can_match_tray(&self, card_id: CardId) -> bool {
        self.plan_playfield_move(card_id).is_ok()
    }

    /// Playfield cards that currently match the tray.
    #[must_use]
    pub fn playable_cards(&self) -> Vec<CardId> {
        rules::playable_cards(&self.area)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.area.to_snapshot()
    }

    // === Commands ===

    /// Route a card click by the card's location.
    ///
    /// Only playfield cards respond; tray and stack cards are ignored.
    pub fn click_card(&mut self, card_id: CardId) -> Result<MoveOutcome, MoveRejection> {
        let location = self
            .area
            .card(card_id)
            .map(|card| card.location)
            .ok_or_else(|| reject("click", MoveRejection::UnknownCard(card_id)))?;

        match location {
            Location::Playfield => self.replace_from_playfield(card_id),
            Location::Tray => Err(reject("click", MoveRejection::InTray(card_id))),
            Location::Stack => Err(reject("click", MoveRejection::InStack(card_id))),
            Location::None => Err(reject("click", MoveRejection::NotInPlayfield(card_id))),
        }
    }

    /// Move a matching playfield card into the tray.
    ///
    /// The previous tray card keeps `Location::Tray` but leaves every
    /// collection; only undoing this move brings it back.
    pub fn replace_from_playfield(&mut self, card_id: CardId) -> Result<MoveOutcome, MoveRejection> {
        let action = self
            .plan_playfield_move(card_id)
            .map_err(|r| reject("replace_from_playfield", r))?;
        let tray_position = self.geometry.tray_position();

        self.undo.record(action);
        self.area.remove_from_playfield(card_id);
        if let Some(card) = self.area.card_mut(card_id) {
            card.location = Location::Tray;
            card.position = tray_position;
        }
        self.area.set_tray(Some(card_id));

        debug!(
            "controller: matched {} onto tray card {}",
            card_id, action.to_card
        );
        Ok(self.commit(action, tray_position))
    }

    /// Draw the top stack card into the tray.
    pub fn replace_from_stack(&mut self) -> Result<MoveOutcome, MoveRejection> {
        let action = self
            .plan_stack_move()
            .map_err(|r| reject("replace_from_stack", r))?;
        let tray_position = self.geometry.tray_position();

        self.undo.record(action);
        self.area.pop_stack();
        if let Some(card) = self.area.card_mut(action.from_card) {
            card.location = Location::Tray;
            card.flipped = true;
            card.position = tray_position;
        }
        self.area.set_tray(Some(action.from_card));

        debug!(
            "controller: drew {} from stack onto tray card {}",
            action.from_card, action.to_card
        );
        Ok(self.commit(action, tray_position))
    }

    /// Invert the most recent forward move.
    pub fn undo(&mut self) -> Result<UndoAction, MoveRejection> {
        let action = self
            .undo
            .undo(&mut self.area)
            .map_err(|r| reject("undo", r))?;

        self.events.emit(&GameEvent::UndoApplied(action));
        self.sync_undo_availability();
        Ok(action)
    }

    /// Regenerate the level this session started from and clear undo history.
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        let Some(config) = self.level.as_ref() else {
            warn!("controller: cannot restart, no level configuration");
            return Err(ConfigError::Missing);
        };

        self.area = generate_level(config).area;
        info!("controller: restarted level {}", config.level_id);
        self.reset_history();
        Ok(())
    }

    /// Replace the play area with a snapshot and clear undo history.
    ///
    /// A snapshot does not record its level, so the session forgets the
    /// level it was started from, as a resumed session does; `restart` then
    /// fails with `ConfigError::Missing`. On error the session is unchanged.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        self.area.restore(snapshot)?;
        self.level = None;
        info!("controller: restored {} cards from snapshot", self.area.card_count());
        self.reset_history();
        Ok(())
    }

    // === Internals ===

    fn plan_playfield_move(&self, card_id: CardId) -> Result<UndoAction, MoveRejection> {
        let card = self
            .area
            .card(card_id)
            .ok_or(MoveRejection::UnknownCard(card_id))?;

        if card.location != Location::Playfield || !self.area.playfield().contains(&card_id) {
            return Err(MoveRejection::NotInPlayfield(card_id));
        }

        let tray = self.area.tray_card().ok_or(MoveRejection::NoTrayCard)?;
        if !card.can_match(tray) {
            return Err(MoveRejection::NoMatch {
                card: card_id,
                tray: tray.id,
            });
        }

        Ok(UndoAction::new(
            UndoKind::ReplaceFromPlayfield,
            card_id,
            tray.id,
            card.position,
            tray.position,
        ))
    }

    fn plan_stack_move(&self) -> Result<UndoAction, MoveRejection> {
        let top = self.area.stack_top().ok_or(MoveRejection::StackEmpty)?;
        if !self.area.contains(top) {
            return Err(MoveRejection::UnknownCard(top));
        }

        let tray = self.area.tray_card().ok_or(MoveRejection::NoTrayCard)?;

        Ok(UndoAction::new(
            UndoKind::ReplaceFromStack,
            top,
            tray.id,
            self.geometry.stack_position(),
            tray.position,
        ))
    }

    /// Notify observers of a committed forward move and evaluate status.
    fn commit(&mut self, action: UndoAction, target: Position) -> MoveOutcome {
        self.events.emit(&GameEvent::TransitionApplied {
            kind: action.kind,
            moves: smallvec![CardMove::new(action.from_card, target)],
            evicted: Some(action.to_card),
        });
        self.sync_undo_availability();

        let status = rules::status(&self.area);
        match status {
            GameStatus::Won => {
                info!("controller: level won");
                self.events.emit(&GameEvent::Won);
            }
            GameStatus::Stuck => {
                info!("controller: no moves left");
                self.events.emit(&GameEvent::NoMovesLeft);
            }
            GameStatus::InProgress => {}
        }

        MoveOutcome { action, status }
    }

    fn reset_history(&mut self) {
        self.undo.clear();
        self.events.emit(&GameEvent::Reset);
        self.sync_undo_availability();
    }

    fn sync_undo_availability(&mut self) {
        let available = self.undo.can_undo();
        if available != self.undo_available {
            self.undo_available = available;
            self.events
                .emit(&GameEvent::UndoAvailabilityChanged(available));
        }
    }
}

impl<G: SlotGeometry + std::fmt::Debug> std::fmt::Debug for GameController<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("area", &self.area)
            .field("undo", &self.undo)
            .field("geometry", &self.geometry)
            .field("events", &self.events)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Face, Suit};
    use crate::events::EventLog;

    /// Playfield [4♣, 6♦], stack [9♠, 5♥] → tray 5♥ (id 3), stack [9♠] (id 2).
    fn level() -> LevelConfig {
        LevelConfig::new(1)
            .with_playfield_card(Face::Four, Suit::Clubs, Position::new(200.0, 1200.0))
            .with_playfield_card(Face::Six, Suit::Diamonds, Position::new(400.0, 1200.0))
            .with_stack_card(Face::Nine, Suit::Spades)
            .with_stack_card(Face::Five, Suit::Hearts)
    }

    fn controller() -> GameController {
        GameController::start(Some(level()), TableLayout::default()).unwrap()
    }

    #[test]
    fn test_start_without_config() {
        let result = GameController::start(None, TableLayout::default());
        assert!(matches!(result, Err(ConfigError::Missing)));
    }

    #[test]
    fn test_match_records_undo_before_mutation() {
        let mut game = controller();

        let outcome = game.replace_from_playfield(CardId(0)).unwrap();

        assert_eq!(outcome.action.kind, UndoKind::ReplaceFromPlayfield);
        assert_eq!(outcome.action.from_card, CardId(0));
        assert_eq!(outcome.action.to_card, CardId(3));
        assert_eq!(outcome.action.from_position, Position::new(200.0, 1200.0));
        assert_eq!(outcome.action.to_position, Position::ZERO);
        assert_eq!(outcome.status, GameStatus::InProgress);
    }

    #[test]
    fn test_match_moves_card_to_tray() {
        let mut game = controller();
        game.replace_from_playfield(CardId(0)).unwrap();

        let card = game.area().card(CardId(0)).unwrap();
        assert_eq!(card.location, Location::Tray);
        assert_eq!(card.position, TableLayout::default().tray);
        assert!(card.flipped);
        assert_eq!(game.area().tray(), Some(CardId(0)));
        assert_eq!(game.area().playfield(), &[CardId(1)]);
    }

    #[test]
    fn test_evicted_tray_card_is_untracked() {
        let mut game = controller();
        game.replace_from_playfield(CardId(0)).unwrap();

        assert_eq!(game.area().card(CardId(3)).unwrap().location, Location::Tray);
        assert_eq!(game.area().untracked_cards(), vec![CardId(3)]);
    }

    #[test]
    fn test_non_matching_card_is_rejected() {
        let mut game = controller();
        game.replace_from_playfield(CardId(0)).unwrap(); // tray is now 4

        let before = game.area().clone();
        let result = game.replace_from_playfield(CardId(1)); // 6 vs 4

        assert_eq!(
            result,
            Err(MoveRejection::NoMatch { card: CardId(1), tray: CardId(0) })
        );
        assert_eq!(game.area(), &before);
        assert_eq!(game.undo_len(), 1);
    }

    #[test]
    fn test_unknown_card_is_rejected() {
        let mut game = controller();
        assert_eq!(
            game.replace_from_playfield(CardId(99)),
            Err(MoveRejection::UnknownCard(CardId(99)))
        );
    }

    #[test]
    fn test_stack_draw() {
        let mut game = controller();

        let outcome = game.replace_from_stack().unwrap();

        assert_eq!(outcome.action.kind, UndoKind::ReplaceFromStack);
        assert_eq!(outcome.action.from_card, CardId(2));
        assert_eq!(outcome.action.from_position, TableLayout::default().stack);
        assert_eq!(game.area().tray(), Some(CardId(2)));
        assert!(game.area().stack().is_empty());

        let drawn = game.area().card(CardId(2)).unwrap();
        assert!(drawn.flipped);
        assert!(!drawn.clickable);
        assert_eq!(drawn.location, Location::Tray);
    }

    #[test]
    fn test_stack_draw_on_empty_stack() {
        let mut game = controller();
        game.replace_from_stack().unwrap();

        let before = game.area().clone();
        assert_eq!(game.replace_from_stack(), Err(MoveRejection::StackEmpty));
        assert_eq!(game.area(), &before);
        assert_eq!(game.undo_len(), 1);
    }

    #[test]
    fn test_stack_draw_without_tray_leaves_stack_alone() {
        let mut area = PlayArea::new();
        let mut card = crate::cards::Card::new(CardId(0), Face::Two, Suit::Clubs);
        card.place(Location::Stack, Position::ZERO, false, false);
        area.add_card(card);
        area.push_stack(CardId(0));
        let mut game = GameController::from_area(area, TableLayout::default());

        assert_eq!(game.replace_from_stack(), Err(MoveRejection::NoTrayCard));
        assert_eq!(game.area().stack(), &[CardId(0)]);
        assert!(!game.can_undo());
    }

    #[test]
    fn test_click_routing() {
        let mut game = controller();

        assert_eq!(game.click_card(CardId(3)), Err(MoveRejection::InTray(CardId(3))));
        assert_eq!(game.click_card(CardId(2)), Err(MoveRejection::InStack(CardId(2))));
        assert_eq!(game.click_card(CardId(42)), Err(MoveRejection::UnknownCard(CardId(42))));
        assert!(game.click_card(CardId(1)).is_ok());
    }

    #[test]
    fn test_can_match_tray() {
        let game = controller();

        assert!(game.can_match_tray(CardId(0)));
        assert!(game.can_match_tray(CardId(1)));
        assert!(!game.can_match_tray(CardId(2)));
        assert_eq!(game.playable_cards(), vec![CardId(0), CardId(1)]);
    }

    #[test]
    fn test_undo_with_empty_log() {
        let mut game = controller();
        assert_eq!(game.undo(), Err(MoveRejection::NothingToUndo));
    }

    #[test]
    fn test_win_event() {
        let config = LevelConfig::new(1)
            .with_playfield_card(Face::Four, Suit::Clubs, Position::ZERO)
            .with_stack_card(Face::Five, Suit::Hearts);
        let mut game = GameController::start(Some(config), TableLayout::default()).unwrap();
        let log = EventLog::new();
        game.subscribe(log.clone());

        let outcome = game.click_card(CardId(0)).unwrap();

        assert!(outcome.is_won());
        assert!(game.is_won());
        assert!(log.events().contains(&GameEvent::Won));
    }

    #[test]
    fn test_event_order_for_forward_move() {
        let mut game = controller();
        let log = EventLog::new();
        game.subscribe(log.clone());

        game.replace_from_playfield(CardId(0)).unwrap();

        assert_eq!(
            log.events(),
            vec![
                GameEvent::UndoAvailabilityChanged(false),
                GameEvent::TransitionApplied {
                    kind: UndoKind::ReplaceFromPlayfield,
                    moves: smallvec![CardMove::new(CardId(0), TableLayout::default().tray)],
                    evicted: Some(CardId(3)),
                },
                GameEvent::UndoAvailabilityChanged(true),
            ]
        );
    }

    #[test]
    fn test_restart() {
        let mut game = controller();
        game.replace_from_playfield(CardId(0)).unwrap();

        game.restart().unwrap();

        assert!(!game.can_undo());
        assert_eq!(game.area(), &generate_level(&level()).area);
    }

    #[test]
    fn test_restart_without_level() {
        let mut game = GameController::from_area(PlayArea::new(), TableLayout::default());
        assert!(matches!(game.restart(), Err(ConfigError::Missing)));
    }
}
