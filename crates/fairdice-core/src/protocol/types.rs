//! Protocol types.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One side of the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Party {
    Human,
    Computer,
}

impl Party {
    /// Get the opponent
    pub fn opponent(&self) -> Party {
        match self {
            Party::Human => Party::Computer,
            Party::Computer => Party::Human,
        }
    }

    /// First mover from a toss result: 0 means the human goes first
    pub fn from_toss(result: usize) -> Party {
        if result == 0 {
            Party::Human
        } else {
            Party::Computer
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Human => write!(f, "You"),
            Party::Computer => write!(f, "Computer"),
        }
    }
}

/// Result of comparing two rolled faces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    HumanWins,
    ComputerWins,
    Draw,
}

impl RoundOutcome {
    /// Strict comparison; equal faces draw
    pub fn judge(human_roll: i64, computer_roll: i64) -> Self {
        match human_roll.cmp(&computer_roll) {
            Ordering::Greater => RoundOutcome::HumanWins,
            Ordering::Less => RoundOutcome::ComputerWins,
            Ordering::Equal => RoundOutcome::Draw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundOutcome::HumanWins => "You win",
            RoundOutcome::ComputerWins => "Computer wins",
            RoundOutcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_opponent() {
        assert_eq!(Party::Human.opponent(), Party::Computer);
        assert_eq!(Party::Computer.opponent(), Party::Human);
    }

    #[test]
    fn test_toss_convention() {
        assert_eq!(Party::from_toss(0), Party::Human);
        assert_eq!(Party::from_toss(1), Party::Computer);
    }

    #[test]
    fn test_judge_is_strict() {
        assert_eq!(RoundOutcome::judge(9, 8), RoundOutcome::HumanWins);
        assert_eq!(RoundOutcome::judge(1, 7), RoundOutcome::ComputerWins);
        assert_eq!(RoundOutcome::judge(4, 4), RoundOutcome::Draw);
        assert_eq!(RoundOutcome::judge(-2, -3), RoundOutcome::HumanWins);
    }
}
