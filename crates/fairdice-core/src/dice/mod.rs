//! Dice, command-line dice parsing and win probabilities.

mod die;
mod probability;

pub use die::{parse_dice, validate_dice, Die, EXAMPLE_DICE, MIN_DICE};
pub use probability::{render_table, ProbabilityMatrix};
