//! Rule configuration.
//!
//! The goal score, bust value, and die size are injected at game
//! construction rather than read from module constants, so rule variants
//! can be tested without touching the state machine.

use serde::{Deserialize, Serialize};

/// Default goal score: first player to reach it wins.
pub const DEFAULT_GOAL_SCORE: u32 = 111;

/// Default bust value: rolling it ends the turn with no score.
pub const DEFAULT_BUST_VALUE: u8 = 1;

/// Default number of die faces.
pub const DEFAULT_DIE_SIDES: u8 = 6;

/// Immutable rule parameters for one game.
///
/// ## Example
///
/// ```
/// use dice_right::core::Rules;
///
/// let standard = Rules::standard();
/// assert_eq!(standard.goal_score, 111);
///
/// let short_game = Rules::standard().with_goal_score(30);
/// assert_eq!(short_game.goal_score, 30);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Score a player must reach to win.
    pub goal_score: u32,

    /// The roll that ends a turn and discards the round.
    pub bust_value: u8,

    /// Number of faces on the die.
    pub die_sides: u8,
}

impl Rules {
    /// The standard rules: d6, bust on 1, first to 111.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            goal_score: DEFAULT_GOAL_SCORE,
            bust_value: DEFAULT_BUST_VALUE,
            die_sides: DEFAULT_DIE_SIDES,
        }
    }

    /// Set the goal score.
    #[must_use]
    pub fn with_goal_score(mut self, goal: u32) -> Self {
        self.goal_score = goal;
        self
    }

    /// Set the bust value.
    #[must_use]
    pub fn with_bust_value(mut self, value: u8) -> Self {
        self.bust_value = value;
        self
    }

    /// Set the number of die faces.
    #[must_use]
    pub fn with_die_sides(mut self, sides: u8) -> Self {
        self.die_sides = sides;
        self
    }

    /// Check the rules are internally consistent.
    ///
    /// The bust value must be a face the die can actually show, and the
    /// die needs at least two faces so a turn can ever continue.
    pub(crate) fn validate(&self) {
        assert!(self.die_sides >= 2, "Die must have at least 2 sides");
        assert!(
            (1..=self.die_sides).contains(&self.bust_value),
            "Bust value {} is not a face of a d{}",
            self.bust_value,
            self.die_sides
        );
        assert!(self.goal_score > 0, "Goal score must be positive");
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}
