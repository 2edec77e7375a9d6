//! Property tests over random playouts.
//!
//! Every reachable state must conserve checkers, keep points single-colored
//! and only ever move checkers in their color's direction.

use proptest::prelude::*;

use rust_backgammon::board::{Board, CHECKERS_PER_COLOR, POINT_COUNT};
use rust_backgammon::core::{Action, Color, GameConfig, GameRng, BarEntryRule};
use rust_backgammon::game::Game;
use rust_backgammon::rules::{MoveOutcome, MoveRuleEngine};

fn assert_board_invariants(board: &Board) {
    for color in Color::ALL {
        assert_eq!(board.total_checkers(color), CHECKERS_PER_COLOR, "{} conservation", color);
    }
    for p in 0..POINT_COUNT as u8 {
        let checkers = board.checkers_at(p);
        if let Some(first) = checkers.first() {
            assert!(
                checkers.iter().all(|c| c.color() == first.color()),
                "point {} holds two colors",
                p
            );
        }
    }
}

fn assert_direction(color: Color, outcome: MoveOutcome) {
    match outcome {
        MoveOutcome::Moved { from, to, .. } | MoveOutcome::Captured { from, to, .. } => match color {
            Color::White => assert!(to < from, "White moved {} -> {}", from, to),
            Color::Black => assert!(to > from, "Black moved {} -> {}", from, to),
        },
        MoveOutcome::Entered { to, .. } => assert!(color.opponent().is_home(to)),
        MoveOutcome::BorneOff { from, .. } => assert!(color.is_home(from)),
    }
}

/// Play random legal actions for up to `turns` turns, checking invariants
/// after every step.
fn random_playout(seed: u64, bar_entry: BarEntryRule, turns: usize) -> Game {
    let config = GameConfig::default().with_seed(seed).with_bar_entry(bar_entry);
    let mut game = Game::new("White", "Black", config).unwrap();
    let mut picker = GameRng::new(seed).fork();
    game.start_game();

    for _ in 0..turns {
        if game.is_game_over() {
            break;
        }
        if game.roll_dice().unwrap().forfeited {
            continue;
        }
        loop {
            let actions = game.legal_actions();
            let Some(&action) = picker.choose(&actions) else {
                break;
            };
            let color = game.current_color();
            let outcome = match action {
                Action::Move { origin, die } => game.attempt_move(origin, die),
                Action::BearOff { point } => game.attempt_bear_off(point),
                other => panic!("unexpected action {}", other),
            }
            .unwrap();

            assert_direction(color, outcome);
            assert_board_invariants(game.board());
            if game.is_game_over() {
                break;
            }
        }
        if !game.is_game_over() {
            game.end_turn().unwrap();
        }
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_playouts_keep_invariants(seed in any::<u64>(), strict in any::<bool>()) {
        let rule = if strict { BarEntryRule::EveryAction } else { BarEntryRule::FirstAction };
        let game = random_playout(seed, rule, 60);
        assert_board_invariants(game.board());
    }

    #[test]
    fn prop_doubles_grant_four_moves(first in 1u8..=6, second in 1u8..=6) {
        let mut dice = rust_backgammon::dice::Dice::new();
        dice.set_roll(first, second).unwrap();

        if first == second {
            prop_assert_eq!(dice.remaining(), &[first; 4][..]);
        } else {
            prop_assert_eq!(dice.remaining(), &[first, second][..]);
        }
    }

    #[test]
    fn prop_entry_points_in_opponent_home(die in 1u8..=6) {
        let white = MoveRuleEngine::entry_point(die, Color::White).unwrap();
        let black = MoveRuleEngine::entry_point(die, Color::Black).unwrap();

        prop_assert_eq!(white, 24 - die);
        prop_assert_eq!(black, die - 1);
        prop_assert!((18..=23).contains(&white));
        prop_assert!(black <= 5);
    }
}

/// A long playout either finishes with a winner holding fifteen borne off,
/// or is still running with nobody at fifteen.
#[test]
fn test_long_playouts_resolve_consistently() {
    for seed in 0..8 {
        let game = random_playout(seed, BarEntryRule::FirstAction, 400);
        match game.winner() {
            Some(winner) => assert_eq!(game.borne_off(winner.color()) as usize, CHECKERS_PER_COLOR),
            None => {
                for color in Color::ALL {
                    assert!((game.borne_off(color) as usize) < CHECKERS_PER_COLOR);
                }
            }
        }
    }
}
