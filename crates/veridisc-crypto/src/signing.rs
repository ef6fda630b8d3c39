use std::fmt;

use k256::ecdsa::signature::hazmat::{PrehashVerifier, RandomizedPrehashSigner};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

use crate::error::CryptoError;
use crate::hashing;
use crate::keys::{KeyPair, PublicKey};

/// ECDSA signature as its `(r, s)` scalar pair, 32 bytes big-endian each.
///
/// Parsing only checks lengths; scalar validity is checked by [`verify`],
/// which rejects zero, out-of-range or high-S scalars.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    #[serde(with = "hex::serde")]
    r: [u8; 32],
    #[serde(with = "hex::serde")]
    s: [u8; 32],
}

impl Signature {
    /// Encoded length: `r || s`.
    pub const BYTE_LEN: usize = 64;

    pub fn from_scalars(r: [u8; 32], s: [u8; 32]) -> Self {
        Self { r, s }
    }

    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// Get the raw bytes `r || s` (64 bytes).
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }

    /// Create from raw bytes `r || s` (64 bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != Self::BYTE_LEN {
            return Err(CryptoError::InvalidInput(format!(
                "signature must be {} bytes, got {}",
                Self::BYTE_LEN,
                bytes.len()
            )));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Ok(Self { r, s })
    }

    /// Encode as hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Decode from hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| CryptoError::InvalidInput(format!("invalid hex: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    /// Encode as base58.
    pub fn to_bs58(&self) -> String {
        bs58::encode(self.to_bytes()).into_string()
    }

    /// Decode from base58.
    pub fn from_bs58(bs58_str: &str) -> Result<Self, CryptoError> {
        let bytes = bs58::decode(bs58_str)
            .into_vec()
            .map_err(|e| CryptoError::InvalidInput(format!("invalid base58: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    fn to_ecdsa(self) -> Option<k256::ecdsa::Signature> {
        k256::ecdsa::Signature::from_slice(&self.to_bytes()).ok()
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("r", &hex::encode(self.r))
            .field("s", &hex::encode(self.s))
            .finish()
    }
}

/// Sign `message`: BLAKE3 digest, then ECDSA over the digest with fresh
/// randomness mixed into the nonce on every call.
pub fn sign(message: &[u8], keypair: &KeyPair) -> Result<Signature, CryptoError> {
    let digest = hashing::hash(message);
    let sig: k256::ecdsa::Signature = keypair
        .signing_key()
        .sign_prehash_with_rng(&mut OsRng, &digest)
        .map_err(|e| CryptoError::SigningError(e.to_string()))?;
    Signature::from_bytes(&sig.to_bytes())
}

/// Verify a signature over `message`. Never errors: malformed scalars, wrong
/// keys and altered messages all yield `false`.
pub fn verify(message: &[u8], signature: &Signature, pubkey: &PublicKey) -> bool {
    let Some(sig) = signature.to_ecdsa() else {
        tracing::debug!("signature scalars out of range");
        return false;
    };
    let digest = hashing::hash(message);
    pubkey.verifying_key().verify_prehash(&digest, &sig).is_ok()
}
