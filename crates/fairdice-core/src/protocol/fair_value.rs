//! Commit-reveal rounds producing one fair integer.
//!
//! A round moves through three states:
//! 1. [`FairRound::commit`]: the computer draws its value and publishes only
//!    the HMAC digest.
//! 2. The human picks a value with the digest already on screen.
//! 3. [`CommittedRound::reveal`]: the key and the computer's value are
//!    disclosed and the result is `(computer + human) mod range`.
//!
//! `reveal` consumes the committed round, so the order cannot be swapped
//! and a round cannot be revealed twice.

use crate::console::{show_help_table, Choice, GameConsole};
use crate::crypto::{self, Commitment, HmacDigest, RandomSource, SecretKey};
use crate::dice::Die;
use crate::error::{Cancelled, ProtocolError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use tracing::debug;

/// Entry point of a round
pub struct FairRound;

impl FairRound {
    /// Draw the computer's value and commit to it under a fresh key
    pub fn commit<R: RandomSource + ?Sized>(range: NonZeroUsize, rng: &mut R) -> CommittedRound {
        let computer_value = rng.next_in_range(range);
        let commitment = crypto::commit(computer_value, rng);
        CommittedRound {
            range,
            computer_value,
            commitment,
        }
    }
}

/// Round whose digest is public and whose value is still secret
pub struct CommittedRound {
    range: NonZeroUsize,
    computer_value: usize,
    commitment: Commitment,
}

impl CommittedRound {
    pub fn range(&self) -> NonZeroUsize {
        self.range
    }

    /// The only part that may be shown before the human chooses
    pub fn digest(&self) -> &HmacDigest {
        self.commitment.digest()
    }

    /// Combine with the human's value and disclose the key.
    ///
    /// An out-of-range value hands the round back unchanged so the caller
    /// can ask again without drawing a new commitment.
    pub fn reveal(
        self,
        human_value: usize,
    ) -> Result<RevealedRound, (CommittedRound, ProtocolError)> {
        let range = self.range.get();
        if human_value >= range {
            return Err((
                self,
                ProtocolError::ValueOutOfRange {
                    value: human_value,
                    range,
                },
            ));
        }

        let digest = *self.commitment.digest();
        Ok(RevealedRound {
            range,
            computer_value: self.computer_value,
            human_value,
            result: add_mod(self.computer_value, human_value, range),
            key: self.commitment.into_key(),
            digest,
        })
    }
}

impl fmt::Debug for CommittedRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommittedRound")
            .field("range", &self.range)
            .field("digest", self.commitment.digest())
            .finish_non_exhaustive()
    }
}

/// `(a + b) mod range` for `a, b < range`, without overflowing near `usize::MAX`
fn add_mod(a: usize, b: usize, range: usize) -> usize {
    let gap = range - a;
    if b >= gap {
        b - gap
    } else {
        a + b
    }
}

/// Finished round with everything needed to check it
#[derive(Clone, Debug)]
pub struct RevealedRound {
    range: usize,
    computer_value: usize,
    human_value: usize,
    result: usize,
    key: SecretKey,
    digest: HmacDigest,
}

impl RevealedRound {
    pub fn range(&self) -> usize {
        self.range
    }

    pub fn computer_value(&self) -> usize {
        self.computer_value
    }

    pub fn human_value(&self) -> usize {
        self.human_value
    }

    /// The fair integer, in `0..range`
    pub fn result(&self) -> usize {
        self.result
    }

    pub fn key(&self) -> &SecretKey {
        &self.key
    }

    pub fn digest(&self) -> &HmacDigest {
        &self.digest
    }

    /// Recompute the digest from the revealed key and value
    pub fn verify(&self) -> bool {
        crypto::verify(&self.key, self.computer_value, &self.digest)
    }

    pub fn receipt(&self) -> RoundReceipt {
        RoundReceipt {
            range: self.range,
            digest: self.digest,
            key: self.key.clone(),
            computer_value: self.computer_value,
            human_value: self.human_value,
            result: self.result,
        }
    }
}

impl fmt::Display for RevealedRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} + {}) mod {} = {}",
            self.computer_value, self.human_value, self.range, self.result
        )
    }
}

/// Serializable record of a finished round, checkable offline
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReceipt {
    pub range: usize,
    pub digest: HmacDigest,
    pub key: SecretKey,
    pub computer_value: usize,
    pub human_value: usize,
    pub result: usize,
}

impl RoundReceipt {
    /// Digest matches the revealed key and value, and the result follows
    /// from both values
    pub fn verify(&self) -> bool {
        self.range > 0
            && self.computer_value < self.range
            && self.human_value < self.range
            && add_mod(self.computer_value, self.human_value, self.range) == self.result
            && crypto::verify(&self.key, self.computer_value, &self.digest)
    }
}

/// Drives rounds against a console.
pub struct FairValueProtocol<'a, R: ?Sized, C: ?Sized> {
    rng: &'a mut R,
    console: &'a mut C,
    help: Option<&'a [Die]>,
}

impl<'a, R, C> FairValueProtocol<'a, R, C>
where
    R: RandomSource + ?Sized,
    C: GameConsole + ?Sized,
{
    pub fn new(rng: &'a mut R, console: &'a mut C) -> Self {
        Self {
            rng,
            console,
            help: None,
        }
    }

    /// Offer the probability table for `dice` at every prompt
    pub fn with_help(mut self, dice: &'a [Die]) -> Self {
        self.help = Some(dice);
        self
    }

    /// Run one round and return the fair integer in `0..range`
    pub fn generate(&mut self, range: NonZeroUsize, prompt: &str) -> Result<usize, Cancelled> {
        self.generate_round(range, prompt).map(|round| round.result())
    }

    /// Run one round and return it whole
    pub fn generate_round(
        &mut self,
        range: NonZeroUsize,
        prompt: &str,
    ) -> Result<RevealedRound, Cancelled> {
        let mut committed = FairRound::commit(range, &mut *self.rng);

        self.console.show_message(&format!(
            "I selected a random value in the range 0..{}.",
            range.get() - 1
        ));
        self.console.show_digest(committed.digest());

        let options: Vec<String> = (0..range.get()).map(|v| v.to_string()).collect();
        let revealed = loop {
            let human_value = match self.console.prompt_choice(prompt, &options, self.help.is_some()) {
                Choice::Selected(value) => value,
                Choice::Help => {
                    if let Some(dice) = self.help {
                        show_help_table(&mut *self.console, dice);
                    }
                    continue;
                }
                choice => {
                    if let Some(cancelled) = choice.cancellation() {
                        debug!(?cancelled, "round abandoned before reveal");
                        return Err(cancelled);
                    }
                    continue;
                }
            };

            match committed.reveal(human_value) {
                Ok(revealed) => break revealed,
                Err((round, err)) => {
                    debug!(%err, "rejected human value");
                    self.console
                        .show_message("Invalid choice. Please enter a valid number, '?', or 'X'.");
                    committed = round;
                }
            }
        };

        self.console
            .show_key_and_value(revealed.key(), revealed.computer_value(), "My number");
        self.console
            .show_round_result(&format!("Fair random number result: {}", revealed));

        debug!(
            range = revealed.range(),
            digest = %revealed.digest(),
            result = revealed.result(),
            "fair round complete"
        );
        Ok(revealed)
    }
}
