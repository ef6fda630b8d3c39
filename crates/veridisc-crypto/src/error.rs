/// Cryptographic operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("key generation failed: {0}")]
    KeyGenerationError(String),

    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("signing failed: {0}")]
    SigningError(String),

    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("cannot build a merkle tree without leaves")]
    EmptyTree,

    #[error("duplicate leaf in merkle tree: {0}")]
    DuplicateLeaf(String),

    #[error("leaf not found in merkle tree: {0}")]
    LeafNotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
