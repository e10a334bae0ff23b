//! Players and the roster that fixes turn order.
//!
//! ## Player
//!
//! A named participant with a cumulative score. Scores only ever grow:
//! the engine commits round totals, nothing subtracts.
//!
//! ## Roster
//!
//! Ordered collection of players. Insertion order defines turn order and
//! breaks ties in win detection. Append-only during setup; once the game
//! starts, size and order are frozen (scores still mutate in place).

use serde::{Deserialize, Serialize};

/// A named participant with a non-negative cumulative score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    score: u32,
}

impl Player {
    /// Create a player with score 0.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's cumulative score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Bank points onto this player's score.
    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.score)
    }
}

/// Ordered, append-only collection of players.
///
/// The order players were added in is the turn order for the whole game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a player. Returns the player's index (their turn position).
    pub fn push(&mut self, player: Player) -> usize {
        self.players.push(player);
        self.players.len() - 1
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True if no players have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get a player by turn position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Iterate players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// All players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The first player in turn order whose score meets `goal`.
    ///
    /// Turn order, not score order, breaks ties: if several players
    /// qualify at once, whoever was added first wins.
    #[must_use]
    pub fn first_at_goal(&self, goal: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.score() >= goal)
    }

    /// Index of the first player at `goal`, if any.
    #[must_use]
    pub fn index_at_goal(&self, goal: u32) -> Option<usize> {
        self.players.iter().position(|p| p.score() >= goal)
    }
}
