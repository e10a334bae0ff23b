//! Per-turn roll accumulator.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The ordered sequence of die values the current player has rolled this
/// turn, plus its running total.
///
/// Reset to empty at the end of every turn, whether the round was banked
/// or busted. An empty round has total 0.
///
/// SmallVec keeps typical turns (a handful of rolls) off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    rolls: SmallVec<[u8; 16]>,
}

impl Round {
    /// Create an empty round.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one die value.
    pub fn push(&mut self, value: u8) {
        self.rolls.push(value);
    }

    /// Discard all rolls.
    pub fn clear(&mut self) {
        self.rolls.clear();
    }

    /// The rolls so far this turn, in order.
    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Number of rolls so far this turn.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    /// True if nothing has been rolled this turn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Sum of the rolls this turn.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.rolls.iter().map(|&v| u32::from(v)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_round_totals_zero() {
        let round = Round::new();
        assert!(round.is_empty());
        assert_eq!(round.len(), 0);
        assert_eq!(round.total(), 0);
        assert!(round.rolls().is_empty());
    }

    #[test]
    fn test_round_accumulates_in_order() {
        let mut round = Round::new();
        round.push(5);
        round.push(2);
        round.push(6);

        assert_eq!(round.rolls(), &[5, 2, 6]);
        assert_eq!(round.len(), 3);
        assert_eq!(round.total(), 13);
    }

    #[test]
    fn test_clear_resets_total() {
        let mut round = Round::new();
        round.push(4);
        round.push(4);
        round.clear();

        assert!(round.is_empty());
        assert_eq!(round.total(), 0);
    }

    #[test]
    fn test_round_serialization() {
        let mut round = Round::new();
        round.push(3);
        round.push(6);

        let json = serde_json::to_string(&round).unwrap();
        let deserialized: Round = serde_json::from_str(&json).unwrap();
        assert_eq!(round, deserialized);
    }
}
