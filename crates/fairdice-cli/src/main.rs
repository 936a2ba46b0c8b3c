//! Fair Dice CLI
//!
//! Plays the non-transitive dice game in the terminal. Every random number
//! the computer contributes is committed with HMAC-SHA3-256 before the player
//! answers and revealed afterwards, so each toss and roll can be re-checked.
//!
//! Usage: `fairdice [OPTIONS] <DIE> <DIE> <DIE> [DIE...]`
//!
//! Options must come before the dice, since dice may start with a `-`.
//! Set `RUST_LOG=debug` to trace each fair round on stderr.

mod terminal;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use fairdice_core::dice::EXAMPLE_DICE;
use fairdice_core::{parse_dice, Cancelled, Game, GameConfig, OsRandom};
use std::fmt;
use std::path::Path;
use std::process::ExitCode;
use terminal::TerminalConsole;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fairdice")]
#[command(about = "Provably fair non-transitive dice game")]
#[command(version)]
struct Cli {
    /// Only offer the probability table when choosing a die
    #[arg(long)]
    no_roll_help: bool,

    /// Play a single round without asking to play again
    #[arg(long)]
    once: bool,

    /// Dice as comma-separated integer faces, at least three, all the same size
    #[arg(value_name = "DIE", allow_hyphen_values = true)]
    dice: Vec<String>,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            help_during_rolls: !self.no_roll_help,
            single_round: self.once,
        }
    }
}

/// Argument problem reported with the name the program was started as
struct UsageError<'a> {
    program: &'a str,
    message: String,
}

impl<'a> UsageError<'a> {
    fn new(program: &'a str, message: impl fmt::Display) -> Self {
        Self {
            program,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for UsageError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nArgument Error: {}\n\nExample usage:\n{} {}\n",
            self.message, self.program, EXAMPLE_DICE
        )
    }
}

fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .and_then(|arg| Path::new(arg).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("fairdice")
        .to_string()
}

fn usage_failure(program: &str, message: impl fmt::Display) -> ExitCode {
    eprintln!("{}", UsageError::new(program, message));
    ExitCode::from(1)
}

fn run(cli: Cli, program: &str) -> Result<ExitCode> {
    let dice = match parse_dice(&cli.dice) {
        Ok(dice) => dice,
        Err(err) => return Ok(usage_failure(program, err)),
    };
    info!(count = dice.len(), faces = dice[0].face_count(), "dice accepted");

    let console = TerminalConsole::new()?;
    let mut game = match Game::new(dice, OsRandom, console, cli.game_config()) {
        Ok(game) => game,
        Err(err) => return Ok(usage_failure(program, err)),
    };

    match game.run() {
        Ok(()) => {}
        Err(Cancelled::UserExit) => println!("Exiting game. Goodbye!"),
        Err(Cancelled::Interrupted) => println!("\nGame interrupted. Goodbye!"),
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let program = program_name();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // Help and version text are not failures
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            return usage_failure(&program, err.kind().as_str().unwrap_or("invalid arguments"))
        }
    };

    match run(cli, &program) {
        Ok(code) => code,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairdice_core::ArgumentError;

    #[test]
    fn test_usage_error_includes_example() {
        let report = UsageError::new("fairdice", ArgumentError::NotEnoughDice).to_string();

        assert!(report.contains("Argument Error: Please specify at least three dice."));
        assert!(report.contains("Example usage:\nfairdice 2,2,4,4,9,9 1,1,6,6,8,8 3,3,5,5,7,7"));
    }

    #[test]
    fn test_cli_accepts_negative_faces() {
        let cli = Cli::try_parse_from(["fairdice", "--once", "-1,2,3", "4,-5,6", "7,8,-9"]).unwrap();

        assert!(cli.once);
        assert_eq!(cli.dice, vec!["-1,2,3", "4,-5,6", "7,8,-9"]);
        assert!(parse_dice(&cli.dice).is_ok());
    }

    #[test]
    fn test_cli_config_flags() {
        let cli = Cli::try_parse_from(["fairdice", "--no-roll-help", "1,2", "3,4", "5,6"]).unwrap();
        let config = cli.game_config();

        assert!(!config.help_during_rolls);
        assert!(!config.single_round);
    }

    #[test]
    fn test_cli_without_dice_parses_to_empty() {
        let cli = Cli::try_parse_from(["fairdice"]).unwrap();

        assert_eq!(parse_dice(&cli.dice), Err(ArgumentError::NotEnoughDice));
    }
}
