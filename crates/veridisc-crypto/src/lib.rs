//! Veridisc Crypto — salted Merkle commitments, inclusion proofs and ECDSA
//! signatures over commitment roots.

pub mod error;
pub mod hashing;
pub mod keys;
pub mod merkle;
pub mod salt;
pub mod signing;
pub mod spv;

pub use error::CryptoError;
pub use hashing::{combine, hash, Hash};
pub use keys::{KeyPair, PublicKey};
pub use merkle::{InclusionPath, MerkleTree};
pub use salt::{derive_salt_chain, random_seed, salt_claims, SaltedClaim, Seed, SEED_LEN};
pub use signing::{sign, verify, Signature};
pub use spv::{verify_inclusion, verify_inclusion_bits};
