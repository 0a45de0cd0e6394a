//! Law checks over randomized command sequences.
//!
//! Three contracts from the engine's design: undo is the exact inverse
//! of execute, failed commands change nothing, and persistence round
//! trips reproduce the observable state.

use proptest::prelude::*;

use sente::persist;
use sente::{create, Coord, Game, RuleError, Variant};

fn coord_9x9() -> impl Strategy<Value = Coord> {
    (1u16..=9, 1u16..=9).prop_map(|(x, y)| Coord::new(x, y))
}

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![
        Just(Variant::Gomoku),
        Just(Variant::Go),
        Just(Variant::Othello),
    ]
}

/// Apply random move attempts, counting the ones that succeed.
fn play_random(game: &mut Game, moves: &[Coord]) -> usize {
    moves
        .iter()
        .filter(|&&coord| game.execute_move(coord).is_ok())
        .count()
}

fn assert_same_state(actual: &Game, expected: &Game) -> Result<(), TestCaseError> {
    prop_assert_eq!(actual.board(), expected.board());
    prop_assert_eq!(actual.current_player(), expected.current_player());
    prop_assert_eq!(actual.outcome(), expected.outcome());
    prop_assert_eq!(actual.pass_count(), expected.pass_count());
    Ok(())
}

proptest! {
    /// Unwinding every applied command returns exactly the fresh game.
    #[test]
    fn undo_unwinds_any_playout(
        variant in variant(),
        moves in prop::collection::vec(coord_9x9(), 1..60),
    ) {
        let mut game = create(variant, 9).unwrap();
        let initial = game.clone();

        let applied = play_random(&mut game, &moves);
        prop_assert_eq!(game.history_len(), applied);

        for _ in 0..applied {
            game.undo_last().unwrap();
        }
        prop_assert_eq!(&game, &initial);
        prop_assert_eq!(game.undo_last(), Err(RuleError::EmptyHistory));
    }

    /// One step: undo(execute(C)) == identity on the observable state.
    #[test]
    fn undo_inverts_single_command(
        variant in variant(),
        prefix in prop::collection::vec(coord_9x9(), 0..30),
        next in coord_9x9(),
    ) {
        let mut game = create(variant, 9).unwrap();
        play_random(&mut game, &prefix);

        let before = game.clone();
        if game.execute_move(next).is_ok() {
            game.undo_last().unwrap();
            assert_same_state(&game, &before)?;
            prop_assert_eq!(game.history_len(), before.history_len());
        }
    }

    /// A rejected command leaves the whole game - history included -
    /// untouched.
    #[test]
    fn failures_are_atomic(
        variant in variant(),
        prefix in prop::collection::vec(coord_9x9(), 1..30),
        next in coord_9x9(),
    ) {
        let mut game = create(variant, 9).unwrap();
        play_random(&mut game, &prefix);

        let before = game.clone();
        if game.execute_move(next).is_err() {
            prop_assert_eq!(&game, &before);
        } else {
            game.undo_last().unwrap();
        }
    }

    /// restore(snapshot(g)) reproduces board, player, outcome, and
    /// pass count for any reachable state.
    #[test]
    fn snapshot_round_trip(
        variant in variant(),
        moves in prop::collection::vec(coord_9x9(), 0..40),
    ) {
        let mut game = create(variant, 9).unwrap();
        play_random(&mut game, &moves);

        let doc = persist::snapshot(&game);
        let loaded = persist::restore(&doc).unwrap();
        assert_same_state(&loaded, &game)?;
        prop_assert!(!loaded.can_undo());
    }
}
