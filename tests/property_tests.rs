//! Property tests over random levels and random move sequences.

use proptest::prelude::*;
use tray_match::cards::Face;
use tray_match::controller::GameController;
use tray_match::core::PlayArea;
use tray_match::level::{generate_level, LevelConfig, TableLayout};
use tray_match::rules::{can_match, rank, GameStatus};

fn face() -> impl Strategy<Value = Face> {
    (-1i32..13).prop_map(Face::from_index)
}

/// Play `choices` against the controller, picking among legal moves.
/// Returns how many moves were applied.
fn play(game: &mut GameController, choices: &[usize]) -> usize {
    let mut applied = 0;
    for &choice in choices {
        let playable = game.playable_cards();
        let can_draw = !game.area().stack().is_empty();
        let options = playable.len() + usize::from(can_draw);
        if options == 0 {
            break;
        }

        let pick = choice % options;
        if pick < playable.len() {
            game.replace_from_playfield(playable[pick]).unwrap();
        } else {
            game.replace_from_stack().unwrap();
        }
        applied += 1;
    }
    applied
}

/// Tray, stack and the playfield as a set, plus per-card placement flags.
fn assert_same_layout(now: &PlayArea, before: &PlayArea) {
    assert_eq!(now.tray(), before.tray());
    assert_eq!(now.stack(), before.stack());

    let mut playfield = now.playfield().to_vec();
    playfield.sort();
    let mut expected = before.playfield().to_vec();
    expected.sort();
    assert_eq!(playfield, expected);

    for card in before.cards() {
        let current = now.card(card.id).unwrap();
        assert_eq!(current.location, card.location);
        assert_eq!(current.flipped, card.flipped);
        assert_eq!(current.clickable, card.clickable);
    }
}

proptest! {
    /// Rank follows face order, with None below Ace.
    #[test]
    fn rank_is_monotonic(a in face(), b in face()) {
        prop_assert_eq!(a.index() < b.index(), rank(a) < rank(b));
    }

    /// Matching ignores argument order and never matches equal ranks.
    #[test]
    fn match_is_symmetric(a in face(), b in face()) {
        prop_assert_eq!(can_match(a, b), can_match(b, a));
        if a == b {
            prop_assert!(!can_match(a, b));
        }
    }

    /// Same seed and counts, same play area.
    #[test]
    fn generation_is_deterministic(seed in any::<u64>(), playfield in 0usize..30, stack in 0usize..30) {
        let first = generate_level(&LevelConfig::dealt(seed, playfield, stack));
        let second = generate_level(&LevelConfig::dealt(seed, playfield, stack));
        prop_assert_eq!(first, second);
    }

    /// Each forward move leaves one evicted card untracked until it is undone.
    #[test]
    fn untracked_cards_match_undo_depth(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 0..40),
    ) {
        let config = LevelConfig::dealt(seed, 12, 10);
        let mut game: GameController = GameController::start(Some(config), TableLayout::default()).unwrap();

        let applied = play(&mut game, &choices);

        prop_assert_eq!(game.undo_len(), applied);
        prop_assert_eq!(game.area().untracked_cards().len(), applied);
    }

    /// Undoing every move restores the starting layout.
    #[test]
    fn undo_all_restores_layout(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 0..40),
    ) {
        let config = LevelConfig::dealt(seed, 12, 10);
        let mut game: GameController = GameController::start(Some(config), TableLayout::default()).unwrap();
        let before = game.area().clone();

        play(&mut game, &choices);
        while game.can_undo() {
            game.undo().unwrap();
        }

        assert_same_layout(game.area(), &before);
        prop_assert!(game.area().untracked_cards().is_empty());
    }

    /// A single undo reverses exactly the last move.
    #[test]
    fn undo_reverses_last_move(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 1..20),
    ) {
        let config = LevelConfig::dealt(seed, 10, 8);
        let mut game: GameController = GameController::start(Some(config), TableLayout::default()).unwrap();

        let (last, prefix) = choices.split_last().unwrap();
        play(&mut game, prefix);
        let before = game.area().clone();

        if play(&mut game, std::slice::from_ref(last)) == 1 {
            game.undo().unwrap();
            assert_same_layout(game.area(), &before);
        }
    }

    /// Status agrees with the moves actually available.
    #[test]
    fn status_matches_available_moves(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 0..40),
    ) {
        let config = LevelConfig::dealt(seed, 8, 6);
        let mut game: GameController = GameController::start(Some(config), TableLayout::default()).unwrap();

        play(&mut game, &choices);

        let has_move = !game.playable_cards().is_empty() || !game.area().stack().is_empty();
        match game.status() {
            GameStatus::Won => prop_assert!(game.area().playfield().is_empty()),
            GameStatus::InProgress => prop_assert!(has_move),
            GameStatus::Stuck => prop_assert!(!has_move),
        }
    }
}
