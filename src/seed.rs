//! Deterministic seed chain.
//!
//! A [`Seed`] is an opaque 256-bit value. Each call to [`Seed::next`]
//! applies one SHA-256 round, forming a one-way chain: anyone can compute
//! it forward, so it resists casual manipulation rather than a motivated
//! adversary. The crate never stores a seed; callers thread the current
//! value through explicitly and keep the next one returned to them.

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};

use crate::error::SeedbrushError;

/// 256-bit value in a one-way deterministic randomness chain.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed([u8; 32]);

impl Seed {
    /// Wrap 32 big-endian bytes as a seed.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a seed from 64 hex characters, with or without a `0x` prefix.
    pub fn from_hex(input: &str) -> Result<Self, SeedbrushError> {
        let stripped = input.strip_prefix("0x").unwrap_or(input);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(stripped, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Big-endian byte view of the seed.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derive the next seed in the chain with one SHA-256 application.
    pub fn next(&self) -> Seed {
        Seed(Sha256::digest(self.0).into())
    }

    /// The low-order byte, used as the uniform draw for bucket selection.
    pub const fn low_byte(&self) -> u8 {
        self.0[31]
    }
}

impl From<u64> for Seed {
    /// Place `value` in the low-order bytes, zero elsewhere.
    fn from(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }
}

impl FromStr for Seed {
    type Err = SeedbrushError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_hex(input)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed(0x{})", hex::encode(self.0))
    }
}
