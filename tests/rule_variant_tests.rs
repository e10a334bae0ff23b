//! Rule variant tests.
//!
//! The goal score, bust value, and die size are injected configuration,
//! so alternate rule sets run through the same state machine.

use dice_right::core::{FixedDie, Player, Rules};
use dice_right::game::{Cue, Game, Phase};

fn start(rules: Rules, rolls: &[u8]) -> Game {
    let mut game = Game::new(rules, Box::new(FixedDie::new(rolls)));
    game.add_player("Alice");
    game.add_player("Bob");
    game.finish_setup();
    game
}

/// A lowered goal score ends the game sooner.
#[test]
fn test_short_goal_variant() {
    let mut game = start(Rules::standard().with_goal_score(12), &[6, 6]);

    game.roll_die();
    game.roll_die();
    let cue = game.stop_round(true);

    assert_eq!(cue, Cue::Win);
    assert_eq!(game.winner().map(Player::name), Some("Alice"));
}

/// Busting on 6 instead of 1: a 1 is now just a low roll.
#[test]
fn test_bust_on_six_variant() {
    let rules = Rules::standard().with_bust_value(6);
    let mut game = start(rules, &[1, 6]);

    let low = game.roll_die();
    assert!(!low.busted);
    assert_eq!(game.round().rolls(), &[1]);

    let bust = game.roll_die();
    assert!(bust.busted);
    assert_eq!(game.current_player_index(), Some(1));
    assert!(game.round().is_empty());
}

/// An eight-sided die accepts faces a d6 never shows.
#[test]
fn test_d8_variant() {
    let rules = Rules::standard().with_die_sides(8);
    let mut game = start(rules, &[8, 7]);

    game.roll_die();
    game.roll_die();

    assert_eq!(game.round().rolls(), &[8, 7]);
    assert_eq!(game.round().total(), 15);
}

/// The goal check uses the injected value, not the standard 111.
#[test]
fn test_goal_is_injected_not_constant() {
    let mut game = start(Rules::standard().with_goal_score(1000), &[6; 30]);

    for _ in 0..6 {
        for _ in 0..5 {
            game.roll_die();
        }
        game.stop_round(true);
        game.stop_round(true);
    }

    // 180 points would have finished a standard game long ago.
    assert_eq!(game.players()[0].score(), 180);
    assert_eq!(game.phase(), Phase::Playing);
    assert!(!game.finished());
}

/// Inconsistent rules are rejected at construction.
#[test]
#[should_panic(expected = "not a face")]
fn test_invalid_rules_rejected() {
    let rules = Rules::standard().with_die_sides(4).with_bust_value(5);
    let _ = Game::new(rules, Box::new(FixedDie::new(&[])));
}
