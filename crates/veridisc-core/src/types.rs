use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::CoreError;

/// Decentralized Identifier naming a credential subject, issuer or holder.
/// Format: `did:<method>:<identifier>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Did(String);

impl Did {
    /// Create a new DID from a full URI string.
    pub fn new(uri: impl Into<String>) -> Result<Self, CoreError> {
        let uri = uri.into();
        let parts: Vec<&str> = uri.splitn(3, ':').collect();
        if parts.len() < 3 || parts[0] != "did" {
            return Err(CoreError::InvalidDid(format!(
                "DID must have format 'did:<method>:<identifier>', got: {}",
                uri
            )));
        }
        if parts[1].is_empty() || parts[2].is_empty() {
            return Err(CoreError::InvalidDid(format!(
                "DID method and identifier must be non-empty, got: {}",
                uri
            )));
        }
        Ok(Self(uri))
    }

    /// Create a DID from method and identifier components.
    pub fn from_parts(method: &str, identifier: &str) -> Self {
        Self(format!("did:{}:{}", method, identifier))
    }

    /// Get the full DID URI.
    pub fn uri(&self) -> &str {
        &self.0
    }

    /// Extract the method (e.g. `key`, `web`, `unitrust`).
    pub fn method(&self) -> Option<&str> {
        self.0.split(':').nth(1)
    }

    /// Extract the method-specific identifier.
    pub fn identifier(&self) -> Option<&str> {
        self.0.splitn(3, ':').nth(2)
    }
}

impl TryFrom<String> for Did {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Did> for String {
    fn from(did: Did) -> Self {
        did.0
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single disclosable fact committed into a credential.
///
/// Two records are the same claim iff key and value are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Claim key (e.g. "LoginID").
    pub key: String,
    /// Claim value as issued.
    pub value: String,
}

impl ClaimRecord {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse a `key=value` pair. The value may itself contain `=`.
    pub fn parse(pair: &str) -> Result<Self, CoreError> {
        match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Self::new(key, value)),
            _ => Err(CoreError::ValidationError(format!(
                "claim must be 'key=value', got: {}",
                pair
            ))),
        }
    }
}

impl fmt::Display for ClaimRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Check that a claim set can be committed: non-empty, unique keys.
pub fn validate_claims(claims: &[ClaimRecord]) -> Result<(), CoreError> {
    if claims.is_empty() {
        return Err(CoreError::EmptyClaims);
    }
    let mut seen = HashSet::with_capacity(claims.len());
    for claim in claims {
        if !seen.insert(claim.key.as_str()) {
            return Err(CoreError::DuplicateClaimKey(claim.key.clone()));
        }
    }
    Ok(())
}

/// Side on which the sibling sits at one step of an inclusion path.
///
/// `Left` (0): the sibling is the left operand, `H(sibling || current)`.
/// `Right` (1): the sibling is the right operand, `H(current || sibling)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Position {
    Left,
    Right,
}

impl Position {
    pub fn bit(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

impl TryFrom<u8> for Position {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            other => Err(CoreError::InvalidPosition(other)),
        }
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.bit()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bit())
    }
}
