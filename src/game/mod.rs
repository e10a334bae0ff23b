//! The state machine that drives a game from setup to a winner.

pub mod cue;
pub mod state;

pub use cue::Cue;
pub use state::{Game, Phase, RollOutcome, Snapshot, SETUP_PROMPT};
