//! Feedback cues emitted alongside command results.
//!
//! The engine names which class of feedback applies to a command
//! outcome; playing a sound or flashing the screen is entirely the
//! view's business. Nothing in the engine ever reads a cue back.

use serde::{Deserialize, Serialize};

/// Class of feedback a command outcome calls for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// Setup finished, the game begins.
    Start,
    /// A non-bust roll landed.
    Roll,
    /// The round was lost, or stopped without banking.
    Bust,
    /// The round was banked and the game continues.
    Clap,
    /// The banked round won the game.
    Win,
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Cue::Start => "start",
            Cue::Roll => "roll",
            Cue::Bust => "bust",
            Cue::Clap => "clap",
            Cue::Win => "win",
        };
        write!(f, "{}", name)
    }
}
