//! The game state machine.
//!
//! ## Phases
//!
//! `Setup → Playing → Finished`, with `restart` the only way back.
//! During setup the roster grows; once at least two players are in,
//! `finish_setup` freezes it and play begins. A turn accumulates rolls
//! until the player stops (banking the total) or rolls the bust value
//! (discarding it). The first player to reach the goal score wins, and
//! the index stays on the winner.
//!
//! ## Contract
//!
//! Commands assert their phase precondition. A correctly wired view
//! never calls a command in the wrong phase, so a violation is a
//! programmer error and fails fast rather than returning an error value.
//! The `message` field is advisory text for display; no engine decision
//! ever reads it.

use serde::{Deserialize, Serialize};

use crate::core::{DieRoller, Player, Roster, Round, Rules, SeededDie};
use super::cue::Cue;

/// Prompt shown while the roster is being assembled.
pub const SETUP_PROMPT: &str = "Please enter the players' names";

/// Game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Collecting player names; roster may still grow.
    Setup,
    /// Turns are being played.
    Playing,
    /// Somebody reached the goal score.
    Finished,
}

/// Result of a single `roll_die` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The face that came up.
    pub value: u8,
    /// True if the roll ended the turn and discarded the round.
    pub busted: bool,
    /// Feedback cue for the view.
    pub cue: Cue,
}

/// The orchestrator: owns the roster, the active turn, and the phase,
/// and enforces every transition rule.
///
/// ## Example
///
/// ```
/// use dice_right::core::{FixedDie, Rules};
/// use dice_right::game::Game;
///
/// let mut game = Game::new(Rules::standard(), Box::new(FixedDie::new(&[5])));
/// game.add_player("Alice");
/// game.add_player("Bob");
/// game.finish_setup();
///
/// let outcome = game.roll_die();
/// assert_eq!(outcome.value, 5);
/// game.stop_round(true);
/// assert_eq!(game.players()[0].score(), 5);
/// assert_eq!(game.current_player_index(), Some(1));
/// ```
pub struct Game {
    rules: Rules,
    die: Box<dyn DieRoller>,
    roster: Roster,
    current: Option<usize>,
    round: Round,
    message: String,
    phase: Phase,
}

impl Game {
    /// Create a game in `Setup` with the given rules and die.
    ///
    /// Panics if the rules are inconsistent (bust value not a die face,
    /// fewer than two faces, zero goal).
    #[must_use]
    pub fn new(rules: Rules, die: Box<dyn DieRoller>) -> Self {
        rules.validate();
        Self {
            rules,
            die,
            roster: Roster::new(),
            current: None,
            round: Round::new(),
            message: SETUP_PROMPT.to_string(),
            phase: Phase::Setup,
        }
    }

    /// Standard rules with a seeded ChaCha8 die.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(Rules::standard(), Box::new(SeededDie::new(seed)))
    }

    // === Commands ===

    /// Add a player to the roster. Setup phase only.
    ///
    /// The name is trimmed of surrounding whitespace. A name that trims
    /// to empty is ignored (not an error): returns `None` and leaves the
    /// message untouched. Otherwise appends the player, sets a welcome
    /// message, and returns the player's turn position.
    pub fn add_player(&mut self, name: &str) -> Option<usize> {
        assert_eq!(
            self.phase,
            Phase::Setup,
            "add_player is only legal during setup"
        );

        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let index = self.roster.push(Player::new(name));
        self.message = format!("Welcome, {}", name);
        Some(index)
    }

    /// Freeze the roster and begin play. Setup phase only.
    ///
    /// Requires at least two players; with fewer this is a no-op
    /// returning `None`. On success the first player added takes the
    /// first turn and the `Start` cue is emitted.
    pub fn finish_setup(&mut self) -> Option<Cue> {
        assert_eq!(
            self.phase,
            Phase::Setup,
            "finish_setup is only legal during setup"
        );

        if self.roster.len() < 2 {
            return None;
        }

        self.current = Some(0);
        self.round.clear();
        self.phase = Phase::Playing;
        self.message = format!(
            "The game starts with {}",
            self.roster.get(0).map(Player::name).unwrap_or_default()
        );
        Some(Cue::Start)
    }

    /// Roll the die for the current player. Playing phase only.
    ///
    /// A bust value discards the round and passes the turn without
    /// banking; any other face joins the round and the turn continues.
    pub fn roll_die(&mut self) -> RollOutcome {
        assert_eq!(
            self.phase,
            Phase::Playing,
            "roll_die is only legal while playing"
        );

        let value = self.die.roll(self.rules.die_sides);
        let roller = self.current_player().map(Player::name).unwrap_or_default().to_string();

        if value == self.rules.bust_value {
            let next = self.next_player().map(Player::name).unwrap_or_default().to_string();
            self.message = format!("{} rolled a {}! Your turn, {}.", roller, value, next);
            let cue = self.end_turn(false);
            RollOutcome {
                value,
                busted: true,
                cue,
            }
        } else {
            self.round.push(value);
            self.message = format!("{} rolled a {}!", roller, value);
            RollOutcome {
                value,
                busted: false,
                cue: Cue::Roll,
            }
        }
    }

    /// End the current player's turn. Playing phase only.
    ///
    /// With `save`, the round total (possibly 0 if nothing was rolled
    /// this turn) is banked onto the player's score; without it the
    /// round is discarded. Either way the turn ends. Returns `Win` if
    /// the banked total finished the game, `Clap` for a banked round,
    /// `Bust` for a discarded one.
    pub fn stop_round(&mut self, save: bool) -> Cue {
        assert_eq!(
            self.phase,
            Phase::Playing,
            "stop_round is only legal while playing"
        );
        self.end_turn(save)
    }

    /// Throw everything away and return to a pristine `Setup`.
    ///
    /// Legal in any phase and idempotent. The rules and die are
    /// construction-time inputs and survive.
    pub fn restart(&mut self) {
        self.roster = Roster::new();
        self.current = None;
        self.round.clear();
        self.message = SETUP_PROMPT.to_string();
        self.phase = Phase::Setup;
    }

    /// Shared end-of-turn path for busts and explicit stops.
    ///
    /// Order matters: bank first, then check for a winner, and only
    /// rotate if nobody won. A finished game must not advance to a next
    /// player. The round is cleared on every branch.
    fn end_turn(&mut self, save: bool) -> Cue {
        let index = self
            .current
            .expect("turn ended with no current player");

        if save {
            let total = self.round.total();
            self.roster
                .get_mut(index)
                .expect("current player index out of bounds")
                .add_score(total);
        }

        let cue = if self.roster.first_at_goal(self.rules.goal_score).is_some() {
            self.phase = Phase::Finished;
            Cue::Win
        } else {
            self.current = Some((index + 1) % self.roster.len());
            if save {
                Cue::Clap
            } else {
                Cue::Bust
            }
        };

        self.round.clear();
        cue
    }

    // === Observable state ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The rules this game was built with.
    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.roster.players()
    }

    /// The roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Whose turn it is. `None` during setup.
    #[must_use]
    pub fn current_player_index(&self) -> Option<usize> {
        self.current
    }

    /// The player whose turn it is. `None` during setup.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current.and_then(|i| self.roster.get(i))
    }

    /// The player after the current one in cyclic turn order.
    #[must_use]
    pub fn next_player(&self) -> Option<&Player> {
        let index = self.current?;
        self.roster.get((index + 1) % self.roster.len())
    }

    /// The rolls accumulated this turn.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Advisory display text. Never drives engine decisions.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The first player in turn order at the goal score, if any.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.roster.first_at_goal(self.rules.goal_score)
    }

    /// True once somebody has reached the goal score.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.winner().is_some()
    }

    /// True once setup is over (playing or finished).
    #[must_use]
    pub fn started(&self) -> bool {
        self.current.is_some()
    }

    /// Owned, serializable view of everything observable.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            players: self
                .roster
                .iter()
                .map(|p| (p.name().to_string(), p.score()))
                .collect(),
            current_player_index: self.current,
            round_rolls: self.round.rolls().to_vec(),
            round_total: self.round.total(),
            message: self.message.clone(),
            winner: self.winner().map(|p| p.name().to_string()),
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("rules", &self.rules)
            .field("roster", &self.roster)
            .field("current", &self.current)
            .field("round", &self.round)
            .field("message", &self.message)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

/// Everything a view needs to render one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current phase.
    pub phase: Phase,
    /// `(name, score)` pairs in turn order.
    pub players: Vec<(String, u32)>,
    /// Whose turn it is, if started.
    pub current_player_index: Option<usize>,
    /// Rolls accumulated this turn.
    pub round_rolls: Vec<u8>,
    /// Sum of this turn's rolls.
    pub round_total: u32,
    /// Advisory display text.
    pub message: String,
    /// Winner's name, once finished.
    pub winner: Option<String>,
}
