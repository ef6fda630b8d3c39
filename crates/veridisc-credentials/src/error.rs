/// Credential system errors.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("issuance failed: {0}")]
    IssuanceFailed(String),

    #[error("claim not found: {0}")]
    ClaimNotFound(String),

    #[error("presentation error: {0}")]
    PresentationError(String),

    #[error("invalid issuer config: {0}")]
    InvalidConfig(String),

    #[error("core error: {0}")]
    Core(#[from] veridisc_core::CoreError),

    #[error("crypto error: {0}")]
    Crypto(#[from] veridisc_crypto::CryptoError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
