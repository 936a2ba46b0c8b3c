//! The console the game talks to.
//!
//! The core never reads or prints by itself; everything goes through a
//! [`GameConsole`], so the terminal front end and scripted test consoles are
//! interchangeable.

use crate::crypto::{HmacDigest, SecretKey};
use crate::dice::{Die, ProbabilityMatrix};
use crate::error::Cancelled;
use crate::protocol::RoundOutcome;

/// Answer to a menu prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Index into the offered options
    Selected(usize),
    /// Show the probability table
    Help,
    /// The human asked to leave
    Exit,
    /// Ctrl-C or end of input
    Interrupted,
}

impl Choice {
    /// The cancellation this choice stands for, if any
    pub fn cancellation(&self) -> Option<Cancelled> {
        match self {
            Choice::Exit => Some(Cancelled::UserExit),
            Choice::Interrupted => Some(Cancelled::Interrupted),
            _ => None,
        }
    }
}

pub trait GameConsole {
    /// Offer a numbered menu and wait for a valid answer. Implementations
    /// re-prompt on their own until the input is well formed; `Help` is only
    /// returned when `help_available` is set.
    fn prompt_choice(&mut self, prompt: &str, options: &[String], help_available: bool) -> Choice;

    /// Yes/no question; only an explicit yes continues.
    fn confirm(&mut self, prompt: &str) -> Result<bool, Cancelled>;

    fn show_message(&mut self, text: &str);

    /// The `(computer + human) mod range = result` line of a finished roll
    fn show_round_result(&mut self, text: &str) {
        self.show_message(text);
    }

    /// Who won the round, with the faces compared
    fn show_outcome(&mut self, _outcome: RoundOutcome, text: &str) {
        self.show_message(text);
    }

    fn show_digest(&mut self, digest: &HmacDigest);

    fn show_key_and_value(&mut self, key: &SecretKey, value: usize, label: &str);

    fn show_probability_table(&mut self, matrix: &ProbabilityMatrix, labels: &[String]);
}

/// Compute and show the win-probability table for `dice`
pub fn show_help_table<C: GameConsole + ?Sized>(console: &mut C, dice: &[Die]) {
    let labels: Vec<String> = dice.iter().map(ToString::to_string).collect();
    let matrix = ProbabilityMatrix::compute(dice);
    console.show_probability_table(&matrix, &labels);
}
