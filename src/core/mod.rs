//! Core engine types: players, rounds, rules, RNG.
//!
//! These are the leaf building blocks; the state machine that drives
//! them lives in [`crate::game`].

pub mod config;
pub mod player;
pub mod rng;
pub mod round;

pub use config::{Rules, DEFAULT_BUST_VALUE, DEFAULT_DIE_SIDES, DEFAULT_GOAL_SCORE};
pub use player::{Player, Roster};
pub use rng::{DieRoller, FixedDie, SeededDie};
pub use round::Round;
