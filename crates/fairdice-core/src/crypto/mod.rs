//! Cryptographic primitives for the fair dice protocol.
//!
//! This module provides:
//! - RandomSource and OsRandom for unbiased draws from OS entropy
//! - SecretKey, HmacDigest and Commitment for the commit-reveal scheme

mod commitment;
mod random;

pub use commitment::{commit, verify, verify_hex, Commitment, HmacDigest, SecretKey, KEY_LEN};
pub use random::{OsRandom, RandomSource};
