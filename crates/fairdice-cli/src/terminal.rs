//! Terminal implementation of the game console.

use anyhow::{Context, Result};
use colored::*;
use fairdice_core::dice::render_table;
use fairdice_core::{
    Cancelled, Choice, GameConsole, HmacDigest, ProbabilityMatrix, RoundOutcome, SecretKey,
};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::warn;

const INPUT_PROMPT: &str = "Your choice: ";
const INVALID_CHOICE: &str = "Invalid choice. Please enter a valid number, '?', or 'X'.";

pub struct TerminalConsole {
    editor: DefaultEditor,
}

impl TerminalConsole {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("failed to initialise the line editor")?;
        Ok(Self { editor })
    }

    /// `None` on Ctrl-C, end of input or a broken terminal
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.editor.readline(prompt) {
            Ok(line) => Some(line),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => None,
            Err(err) => {
                warn!(%err, "failed to read input");
                None
            }
        }
    }
}

/// Interpret one line typed at a menu. `None` means "ask again".
pub fn parse_choice(input: &str, option_count: usize, help_available: bool) -> Option<Choice> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("x") {
        return Some(Choice::Exit);
    }
    if input == "?" {
        return help_available.then_some(Choice::Help);
    }
    if !input.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match input.parse::<usize>() {
        Ok(index) if index < option_count => Some(Choice::Selected(index)),
        _ => None,
    }
}

/// Green when the human wins, red when the computer does
pub fn styled_outcome(outcome: RoundOutcome, text: &str) -> ColoredString {
    match outcome {
        RoundOutcome::HumanWins => text.green().bold(),
        RoundOutcome::ComputerWins => text.red().bold(),
        RoundOutcome::Draw => text.yellow().bold(),
    }
}

impl GameConsole for TerminalConsole {
    fn prompt_choice(&mut self, prompt: &str, options: &[String], help_available: bool) -> Choice {
        loop {
            println!("\n{}", prompt.bold());
            for (i, option) in options.iter().enumerate() {
                println!(" {} - {}", i, option);
            }
            println!("\n X - Exit");
            if help_available {
                println!(" ? - Help");
            }

            let Some(line) = self.read_line(INPUT_PROMPT) else {
                return Choice::Interrupted;
            };
            match parse_choice(&line, options.len(), help_available) {
                Some(choice) => return choice,
                None => println!("{}", INVALID_CHOICE.red()),
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, Cancelled> {
        println!();
        let line = self
            .read_line(&format!("{} ", prompt))
            .ok_or(Cancelled::Interrupted)?;
        Ok(line.trim().eq_ignore_ascii_case("y"))
    }

    fn show_message(&mut self, text: &str) {
        println!("{}", text);
    }

    fn show_round_result(&mut self, text: &str) {
        println!("{}", text.cyan().bold());
    }

    fn show_outcome(&mut self, outcome: RoundOutcome, text: &str) {
        println!("{}", styled_outcome(outcome, text));
    }

    fn show_digest(&mut self, digest: &HmacDigest) {
        println!("HMAC: {}", digest.to_string().yellow());
    }

    fn show_key_and_value(&mut self, key: &SecretKey, value: usize, label: &str) {
        println!(
            "{}: {} (Secret Key: {})",
            label,
            value.to_string().bold(),
            key.to_string().green()
        );
    }

    fn show_probability_table(&mut self, matrix: &ProbabilityMatrix, labels: &[String]) {
        println!("{}", render_table(matrix, labels));
    }
}
