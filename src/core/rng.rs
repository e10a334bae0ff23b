//! Die rolling abstraction with deterministic implementations.
//!
//! ## Key Features
//!
//! - **Injectable**: the game engine never touches an ambient global RNG
//! - **Deterministic**: `SeededDie` reproduces the same sequence per seed
//! - **Scriptable**: `FixedDie` replays an exact sequence for tests
//!
//! ## Usage
//!
//! ```
//! use dice_right::core::{DieRoller, SeededDie, FixedDie};
//!
//! let mut die = SeededDie::new(42);
//! let v = die.roll(6);
//! assert!((1..=6).contains(&v));
//!
//! let mut scripted = FixedDie::new(&[5, 3, 1]);
//! assert_eq!(scripted.roll(6), 5);
//! assert_eq!(scripted.roll(6), 3);
//! assert_eq!(scripted.roll(6), 1);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// A single-die random source.
///
/// One synchronous method, no retry semantics: either a value comes back
/// or the whole command fails. Implementations must return a uniform
/// value in `[1, sides]`.
pub trait DieRoller {
    /// Roll one die with the given number of sides.
    fn roll(&mut self, sides: u8) -> u8;
}

/// Seeded die backed by ChaCha8.
///
/// Fast, and the same seed always produces the same roll sequence,
/// which makes whole games replayable.
#[derive(Clone, Debug)]
pub struct SeededDie {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SeededDie {
    /// Create a new die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this die was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DieRoller for SeededDie {
    fn roll(&mut self, sides: u8) -> u8 {
        assert!(sides >= 1, "Die must have at least 1 side");
        self.inner.gen_range(1..=sides)
    }
}

/// Scripted die for tests: replays a fixed sequence of values.
///
/// Panics when the script runs out. An exhausted fixture is a fatal
/// error, not something a game in progress can recover from.
#[derive(Clone, Debug, Default)]
pub struct FixedDie {
    values: VecDeque<u8>,
}

impl FixedDie {
    /// Create a die that will produce `values` in order.
    #[must_use]
    pub fn new(values: &[u8]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }

    /// How many scripted rolls remain.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl DieRoller for FixedDie {
    fn roll(&mut self, sides: u8) -> u8 {
        let v = self
            .values
            .pop_front()
            .expect("FixedDie exhausted: no scripted rolls remain");
        assert!(
            (1..=sides).contains(&v),
            "Scripted roll {} outside die range 1..={}",
            v,
            sides
        );
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_die_determinism() {
        let mut die1 = SeededDie::new(42);
        let mut die2 = SeededDie::new(42);
        assert_eq!(die1.seed(), 42);

        for _ in 0..100 {
            assert_eq!(die1.roll(6), die2.roll(6));
        }
    }

    #[test]
    fn test_seeded_die_different_seeds() {
        let mut die1 = SeededDie::new(1);
        let mut die2 = SeededDie::new(2);

        let seq1: Vec<_> = (0..20).map(|_| die1.roll(6)).collect();
        let seq2: Vec<_> = (0..20).map(|_| die2.roll(6)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_seeded_die_range() {
        let mut die = SeededDie::new(7);
        for _ in 0..1000 {
            let v = die.roll(6);
            assert!((1..=6).contains(&v));
        }
    }

    #[test]
    fn test_seeded_die_covers_all_faces() {
        let mut die = SeededDie::new(0);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            seen[die.roll(6) as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_fixed_die_replays_script() {
        let mut die = FixedDie::new(&[5, 3, 1, 6]);
        assert_eq!(die.remaining(), 4);
        assert_eq!(die.roll(6), 5);
        assert_eq!(die.roll(6), 3);
        assert_eq!(die.roll(6), 1);
        assert_eq!(die.roll(6), 6);
        assert_eq!(die.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "FixedDie exhausted")]
    fn test_fixed_die_exhaustion_is_fatal() {
        let mut die = FixedDie::new(&[2]);
        die.roll(6);
        die.roll(6);
    }

    #[test]
    #[should_panic(expected = "outside die range")]
    fn test_fixed_die_rejects_out_of_range_script() {
        let mut die = FixedDie::new(&[7]);
        die.roll(6);
    }
}
