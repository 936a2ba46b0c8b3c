//! Fair randomness protocol and round types.

mod fair_value;
mod types;

pub use fair_value::{CommittedRound, FairRound, FairValueProtocol, RevealedRound, RoundReceipt};
pub use types::{Party, RoundOutcome};
