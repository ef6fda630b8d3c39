/// Core protocol errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("invalid DID format: {0}")]
    InvalidDid(String),

    #[error("invalid path position: {0} (expected 0 or 1)")]
    InvalidPosition(u8),

    #[error("claim set is empty")]
    EmptyClaims,

    #[error("duplicate claim key: {0}")]
    DuplicateClaimKey(String),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
