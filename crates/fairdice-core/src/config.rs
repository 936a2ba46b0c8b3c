//! Session settings.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Offer the probability table at toss and roll prompts, not only when
    /// picking a die
    pub help_during_rolls: bool,
    /// Stop after one round instead of asking to play again
    pub single_round: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            help_during_rolls: true,
            single_round: false,
        }
    }
}
