//! HMAC commitments for the commit-reveal scheme.
//!
//! The committing party draws a fresh [`SecretKey`] per round and publishes
//! `HMAC-SHA3-256(key, decimal(value))` before the other party chooses.
//! Revealing the key and value afterwards lets anyone recompute the digest.
//! Only binding matters here: the value space is tiny, so the digest does
//! not hide the value from someone willing to grind all candidates.

use super::RandomSource;
use crate::error::ProtocolError;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha3::Sha3_256;
use std::fmt;
use std::str::FromStr;

/// Secret key length in bytes (256 bits)
pub const KEY_LEN: usize = 32;

type HmacSha3 = Hmac<Sha3_256>;

/// Per-round secret key
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKey(#[serde(with = "hex_serde")] [u8; KEY_LEN]);

impl SecretKey {
    /// Draw a new key from the given source
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rng.fill_key(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({}..)", hex::encode_upper(&self.0[..4]))
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

impl FromStr for SecretKey {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(decode_32(s)?))
    }
}

/// HMAC-SHA3-256 output
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HmacDigest(#[serde(with = "hex_serde")] [u8; 32]);

impl HmacDigest {
    /// Digest of `value` under `key`
    pub fn compute(key: &SecretKey, value: usize) -> Self {
        let mut mac = keyed_mac(key);
        mac.update(message_bytes(value).as_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for HmacDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacDigest({})", hex::encode_upper(&self.0[..8]))
    }
}

impl fmt::Display for HmacDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

impl FromStr for HmacDigest {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(decode_32(s)?))
    }
}

/// A key together with the digest it produced. The key stays private until
/// the reveal; only the digest is shown up front.
#[derive(Clone, Debug)]
pub struct Commitment {
    key: SecretKey,
    digest: HmacDigest,
}

impl Commitment {
    pub fn key(&self) -> &SecretKey {
        &self.key
    }

    pub fn digest(&self) -> &HmacDigest {
        &self.digest
    }

    /// Give up the key for the reveal
    pub fn into_key(self) -> SecretKey {
        self.key
    }
}

/// Commit to `value` under a freshly drawn key
pub fn commit<R: RandomSource + ?Sized>(value: usize, rng: &mut R) -> Commitment {
    let key = SecretKey::random(rng);
    let digest = HmacDigest::compute(&key, value);
    Commitment { key, digest }
}

/// Check that `digest` is the commitment to `value` under `key`
pub fn verify(key: &SecretKey, value: usize, digest: &HmacDigest) -> bool {
    let mut mac = keyed_mac(key);
    mac.update(message_bytes(value).as_bytes());
    mac.verify_slice(digest.as_bytes()).is_ok()
}

/// [`verify`] on the hex strings shown in the console
pub fn verify_hex(key_hex: &str, value: usize, digest_hex: &str) -> Result<bool, ProtocolError> {
    let key: SecretKey = key_hex.parse()?;
    let digest: HmacDigest = digest_hex.parse()?;
    Ok(verify(&key, value, &digest))
}

fn keyed_mac(key: &SecretKey) -> HmacSha3 {
    HmacSha3::new_from_slice(key.as_bytes()).expect("HMAC takes keys of any length")
}

/// Decimal text, so the digest can be recomputed with any HMAC tool
fn message_bytes(value: usize) -> String {
    value.to_string()
}

fn decode_32(s: &str) -> Result<[u8; 32], ProtocolError> {
    let bytes = hex::decode(s.trim())?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| ProtocolError::InvalidHex(format!("expected 32 bytes, got {}", b.len())))
}

mod hex_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode_upper(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        super::decode_32(&hex_str).map_err(serde::de::Error::custom)
    }
}
