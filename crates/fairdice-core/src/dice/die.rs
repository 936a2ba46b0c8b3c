//! Die definition and parsing.

use crate::error::ArgumentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

/// Fewest dice a game can be played with
pub const MIN_DICE: usize = 3;

/// A valid non-transitive set, shown in usage messages
pub const EXAMPLE_DICE: &str = "2,2,4,4,9,9 1,1,6,6,8,8 3,3,5,5,7,7";

/// An ordered list of face values
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct Die {
    faces: Vec<i64>,
}

impl Die {
    pub fn new(faces: Vec<i64>) -> Result<Self, ArgumentError> {
        if faces.is_empty() {
            return Err(ArgumentError::EmptyDie);
        }
        Ok(Self { faces })
    }

    pub fn faces(&self) -> &[i64] {
        &self.faces
    }

    /// Value on the face at `index`
    pub fn face(&self, index: usize) -> Option<i64> {
        self.faces.get(index).copied()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Range for a fair roll of this die
    pub fn face_range(&self) -> NonZeroUsize {
        // `new` rejects empty dice
        NonZeroUsize::new(self.faces.len()).unwrap_or(NonZeroUsize::MIN)
    }
}

impl TryFrom<Vec<i64>> for Die {
    type Error = ArgumentError;

    fn try_from(faces: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(faces)
    }
}

impl From<Die> for Vec<i64> {
    fn from(die: Die) -> Self {
        die.faces
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in self.faces.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", face)?;
        }
        Ok(())
    }
}

/// Parse one die per argument, each a comma-separated list of integers.
///
/// Empty tokens (`1,2,,3,`) are skipped.
pub fn parse_dice<S: AsRef<str>>(args: &[S]) -> Result<Vec<Die>, ArgumentError> {
    if args.len() < MIN_DICE {
        return Err(ArgumentError::NotEnoughDice);
    }

    let face_lists = args
        .iter()
        .map(|arg| parse_faces(arg.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let dice = face_lists
        .into_iter()
        .map(Die::new)
        .collect::<Result<Vec<_>, _>>()?;

    validate_dice(&dice)?;
    Ok(dice)
}

/// A playable set: at least [`MIN_DICE`] dice, all with the same face count
pub fn validate_dice(dice: &[Die]) -> Result<(), ArgumentError> {
    let Some(first) = dice.first() else {
        return Err(ArgumentError::NotEnoughDice);
    };
    if dice.len() < MIN_DICE {
        return Err(ArgumentError::NotEnoughDice);
    }
    if first.face_count() == 0 {
        return Err(ArgumentError::EmptyDie);
    }
    if dice.iter().any(|d| d.face_count() != first.face_count()) {
        return Err(ArgumentError::InconsistentFaces);
    }
    Ok(())
}

fn parse_faces(arg: &str) -> Result<Vec<i64>, ArgumentError> {
    arg.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.parse().map_err(|_| ArgumentError::NonIntegerFace))
        .collect()
}
