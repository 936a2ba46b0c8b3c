//! Error types.

use thiserror::Error;

/// Invalid command-line dice. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Please specify at least three dice.")]
    NotEnoughDice,

    #[error("All dice faces must be integer values.")]
    NonIntegerFace,

    #[error("Every die must have at least one face.")]
    EmptyDie,

    #[error("All dice must have the same number of faces.")]
    InconsistentFaces,
}

/// Errors from the fair random number protocol
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("Value {value} is outside the range 0..{range}")]
    ValueOutOfRange { value: usize, range: usize },

    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}

impl From<hex::FromHexError> for ProtocolError {
    fn from(err: hex::FromHexError) -> Self {
        ProtocolError::InvalidHex(err.to_string())
    }
}

/// Why a session stopped before the human declined another round.
///
/// Not an error: both variants end the process with a success status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cancelled {
    /// The human chose the exit option.
    UserExit,
    /// Ctrl-C or end of input.
    Interrupted,
}
