//! Secure random draws.

use super::KEY_LEN;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use std::num::NonZeroUsize;

/// Source of the engine's randomness: committed values, secret keys and the
/// computer's die pick.
pub trait RandomSource {
    /// Uniform integer in `0..range`
    fn next_in_range(&mut self, range: NonZeroUsize) -> usize;

    /// Fill a fresh secret key
    fn fill_key(&mut self, key: &mut [u8; KEY_LEN]);
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, range: NonZeroUsize) -> usize {
        (**self).next_in_range(range)
    }

    fn fill_key(&mut self, key: &mut [u8; KEY_LEN]) {
        (**self).fill_key(key)
    }
}

/// Operating system entropy.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_in_range(&mut self, range: NonZeroUsize) -> usize {
        OsRng.gen_range(0..range.get())
    }

    fn fill_key(&mut self, key: &mut [u8; KEY_LEN]) {
        OsRng.fill_bytes(key);
    }
}
