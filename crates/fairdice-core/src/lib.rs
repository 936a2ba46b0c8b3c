//! Fair Dice Core Library
//!
//! Provably fair randomness for a two-player non-transitive dice game. Every
//! random number the computer contributes is committed with an HMAC before
//! the human answers, and revealed afterwards so it can be checked.

pub mod config;
pub mod console;
pub mod crypto;
pub mod dice;
pub mod error;
pub mod game;
pub mod protocol;

pub use config::GameConfig;
pub use console::{Choice, GameConsole};
pub use crypto::{Commitment, HmacDigest, OsRandom, RandomSource, SecretKey};
pub use dice::{parse_dice, Die, ProbabilityMatrix};
pub use error::{ArgumentError, Cancelled, ProtocolError};
pub use game::{Game, RoundSummary};
pub use protocol::{FairValueProtocol, Party, RevealedRound, RoundOutcome, RoundReceipt};
