//! Round sequencing: toss, die selection, fair rolls, comparison.

use crate::config::GameConfig;
use crate::console::{show_help_table, Choice, GameConsole};
use crate::crypto::RandomSource;
use crate::dice::{validate_dice, Die};
use crate::error::{ArgumentError, Cancelled};
use crate::protocol::{FairValueProtocol, Party, RevealedRound, RoundOutcome};
use std::num::NonZeroUsize;
use tracing::{debug, info};

const TOSS_RANGE: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(range) => range,
    None => unreachable!(),
};

/// Everything that happened in one round
#[derive(Clone, Debug)]
pub struct RoundSummary {
    pub first_mover: Party,
    pub toss: RevealedRound,
    pub human_die: Die,
    pub computer_die: Die,
    pub computer_roll: RevealedRound,
    pub human_roll: RevealedRound,
    pub computer_face: i64,
    pub human_face: i64,
    pub outcome: RoundOutcome,
}

pub struct Game<R, C> {
    dice: Vec<Die>,
    rng: R,
    console: C,
    config: GameConfig,
}

impl<R: RandomSource, C: GameConsole> Game<R, C> {
    pub fn new(dice: Vec<Die>, rng: R, console: C, config: GameConfig) -> Result<Self, ArgumentError> {
        validate_dice(&dice)?;
        Ok(Self {
            dice,
            rng,
            console,
            config,
        })
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Play rounds until the human declines another one
    pub fn run(&mut self) -> Result<(), Cancelled> {
        self.console
            .show_message("--- Welcome to the Non-Transitive Dice Game! ---");
        loop {
            let summary = self.play_round()?;
            info!(
                outcome = %summary.outcome,
                human_face = summary.human_face,
                computer_face = summary.computer_face,
                "round finished"
            );

            if self.config.single_round || !self.console.confirm("Play another round? (y/n)")? {
                self.console.show_message("Thanks for playing!");
                return Ok(());
            }
        }
    }

    pub fn play_round(&mut self) -> Result<RoundSummary, Cancelled> {
        self.console
            .show_message("\nLet's determine who makes the first move.");
        let toss = self
            .protocol()
            .generate_round(TOSS_RANGE, "Try to guess my choice.")?;
        let first_mover = Party::from_toss(toss.result());
        debug!(%first_mover, "toss decided");

        let (human_index, computer_index) = self.select_dice(first_mover)?;
        let human_die = self.dice[human_index].clone();
        let computer_die = self.dice[computer_index].clone();

        self.console
            .show_message(&format!("\nYour die: [{}]", human_die));
        self.console
            .show_message(&format!("My die:   [{}]", computer_die));

        let faces = computer_die.face_range();
        let prompt = format!("Add your number modulo {}.", faces);
        self.console.show_message("\n--- Time to roll! ---");

        self.console.show_message("\nIt is my time to roll.");
        let computer_roll = self.protocol().generate_round(faces, &prompt)?;
        let computer_face = computer_die.faces()[computer_roll.result()];
        self.console
            .show_message(&format!("Result of my roll is {}.", computer_face));

        self.console.show_message("\nIt is your time to roll.");
        let human_roll = self.protocol().generate_round(human_die.face_range(), &prompt)?;
        let human_face = human_die.faces()[human_roll.result()];
        self.console
            .show_message(&format!("Result of your roll is {}.", human_face));

        let outcome = RoundOutcome::judge(human_face, computer_face);
        self.console.show_message("\n--- Results ---");
        self.console.show_message(&format!(
            "You rolled {}, I rolled {}.",
            human_face, computer_face
        ));
        let verdict = match outcome {
            RoundOutcome::HumanWins => format!("You won! ({} > {})", human_face, computer_face),
            RoundOutcome::ComputerWins => format!("I won! ({} > {})", computer_face, human_face),
            RoundOutcome::Draw => "It's a draw!".to_string(),
        };
        self.console.show_outcome(outcome, &verdict);

        Ok(RoundSummary {
            first_mover,
            toss,
            human_die,
            computer_die,
            computer_roll,
            human_roll,
            computer_face,
            human_face,
            outcome,
        })
    }

    fn protocol(&mut self) -> FairValueProtocol<'_, R, C> {
        let protocol = FairValueProtocol::new(&mut self.rng, &mut self.console);
        if self.config.help_during_rolls {
            protocol.with_help(&self.dice)
        } else {
            protocol
        }
    }

    /// Returns (human die, computer die) as indices into `self.dice`
    fn select_dice(&mut self, first_mover: Party) -> Result<(usize, usize), Cancelled> {
        let mut available: Vec<usize> = (0..self.dice.len()).collect();

        match first_mover {
            Party::Human => {
                self.console
                    .show_message("You make the first move and choose the dice.");
                let human = self.human_pick(&available)?;
                available.retain(|&i| i != human);
                let computer = self.computer_pick(&available);
                Ok((human, computer))
            }
            Party::Computer => {
                self.console
                    .show_message("I make the first move and choose the dice.");
                let computer = self.computer_pick(&available);
                available.retain(|&i| i != computer);
                self.console
                    .show_message(&format!("I choose the [{}] dice.", self.dice[computer]));
                let human = self.human_pick(&available)?;
                Ok((human, computer))
            }
        }
    }

    fn human_pick(&mut self, available: &[usize]) -> Result<usize, Cancelled> {
        let options: Vec<String> = available.iter().map(|&i| self.dice[i].to_string()).collect();
        loop {
            match self.console.prompt_choice("Choose your dice:", &options, true) {
                Choice::Selected(pos) if pos < available.len() => return Ok(available[pos]),
                Choice::Help => show_help_table(&mut self.console, &self.dice),
                choice => {
                    if let Some(cancelled) = choice.cancellation() {
                        return Err(cancelled);
                    }
                    self.console
                        .show_message("Invalid choice. Please enter a valid number, '?', or 'X'.");
                }
            }
        }
    }

    /// Uniform pick; the computer's own choice needs no commitment
    fn computer_pick(&mut self, available: &[usize]) -> usize {
        // `new` guarantees MIN_DICE dice, so the pool is never empty here
        let count = NonZeroUsize::new(available.len()).unwrap_or(NonZeroUsize::MIN);
        let pick = available[self.rng.next_in_range(count)];
        debug!(die = %self.dice[pick], "computer picked a die");
        pick
    }
}
