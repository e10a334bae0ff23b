//! # dice-right
//!
//! A pure, UI-free engine for a turn-based dice scoring game: roll a d6
//! as often as you dare, bank the round total before a 1 wipes it out,
//! first to the goal score wins.
//!
//! ## Design Principles
//!
//! 1. **Command-in, state-out**: a view layer drives the engine with
//!    discrete commands (`add_player`, `finish_setup`, `roll_die`,
//!    `stop_round`, `restart`) and reads observable state to render.
//!    The engine performs no I/O and knows nothing about windows,
//!    keyboards, or speakers.
//!
//! 2. **Injected randomness**: the die is a trait object supplied at
//!    construction. `SeededDie` replays whole games from a seed;
//!    `FixedDie` scripts exact sequences for tests.
//!
//! 3. **Injected rules**: goal score, bust value, and die size are
//!    configuration, so rule variants are one constructor call away.
//!
//! 4. **Cues, not playback**: commands return an enumerated feedback
//!    cue (`roll`, `bust`, `clap`, `win`, `start`); whether that means
//!    a wav file or a screen flash is the view's problem.
//!
//! ## Modules
//!
//! - `core`: players and roster, round accumulator, rules, die rolling
//! - `game`: the phase state machine and its command surface

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{DieRoller, FixedDie, Player, Roster, Round, Rules, SeededDie};
pub use crate::game::{Cue, Game, Phase, RollOutcome, Snapshot};
