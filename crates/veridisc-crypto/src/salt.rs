//! Per-issuance seeds and the salt chain derived from them.
//!
//! The seed travels with a presentation: a verifier regenerates the salt of
//! the one disclosed claim from it. Knowing the other salts does not reveal
//! the other claim values.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use veridisc_core::ClaimRecord;

use crate::error::CryptoError;
use crate::hashing::{self, Hash};

/// Length of an issuance seed in bytes.
pub const SEED_LEN: usize = 8;

/// Random per-issuance material from which all claim salts derive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(#[serde(with = "hex::serde")] [u8; SEED_LEN]);

impl Seed {
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; SEED_LEN] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidInput(format!(
                "seed must be {} bytes, got {}",
                SEED_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| CryptoError::InvalidInput(format!("invalid hex: {}", e)))?;
        Self::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Salts for the first `count` claim positions.
    pub fn salt_chain(&self, count: usize) -> Vec<Hash> {
        derive_salt_chain(&self.0, count)
    }

    /// Salt for a single claim position.
    pub fn salt_at(&self, index: usize) -> Hash {
        let mut salt = hashing::hash(&self.0);
        for _ in 0..index {
            salt = hashing::hash(&salt);
        }
        salt
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({})", self.to_hex())
    }
}

/// Draw a fresh seed from the OS entropy source.
///
/// An entropy failure fails the issuance; there is no weak fallback seed.
pub fn random_seed() -> Result<Seed, CryptoError> {
    let mut bytes = [0u8; SEED_LEN];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| CryptoError::EntropyUnavailable(e.to_string()))?;
    Ok(Seed(bytes))
}

/// `salt[0] = H(seed)`, `salt[i] = H(salt[i-1])`.
pub fn derive_salt_chain(seed: &[u8], count: usize) -> Vec<Hash> {
    let mut chain = Vec::with_capacity(count);
    if count == 0 {
        return chain;
    }
    let mut current = hashing::hash(seed);
    chain.push(current);
    for _ in 1..count {
        current = hashing::hash(&current);
        chain.push(current);
    }
    chain
}

/// A claim with its salt applied: the unit committed as a Merkle leaf.
///
/// `salted_value = salt || value`. Equality is structural over both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SaltedClaim {
    pub key: String,
    pub salted_value: Vec<u8>,
}

impl SaltedClaim {
    pub fn new(claim: &ClaimRecord, salt: &Hash) -> Self {
        let mut salted_value = Vec::with_capacity(salt.len() + claim.value.len());
        salted_value.extend_from_slice(salt);
        salted_value.extend_from_slice(claim.value.as_bytes());
        Self {
            key: claim.key.clone(),
            salted_value,
        }
    }

    /// Leaf digest: `H(key || salted_value)`.
    pub fn leaf_hash(&self) -> Hash {
        hashing::combine(self.key.as_bytes(), &self.salted_value)
    }
}

/// Apply salt `i` of the seed's chain to claim `i`.
pub fn salt_claims(seed: &Seed, claims: &[ClaimRecord]) -> Vec<SaltedClaim> {
    seed.salt_chain(claims.len())
        .iter()
        .zip(claims)
        .map(|(salt, claim)| SaltedClaim::new(claim, salt))
        .collect()
}
