//! Fixtures shared by the cross-crate integration tests.

use std::sync::Arc;

use veridisc_core::{ClaimRecord, Did, IssuerConfig};
use veridisc_credentials::CredentialIssuer;
use veridisc_crypto::{KeyPair, Seed};

/// Seed used by the fixed-seed scenario: bytes 1 through 8.
pub fn fixed_seed() -> Seed {
    Seed::from_bytes([1, 2, 3, 4, 5, 6, 7, 8])
}

pub fn subject_did() -> Did {
    Did::new("did:unitrust:88bEzHraJifHm5jGhV2d4TqF9neD").unwrap()
}

/// Issuer with a fresh keypair and otherwise default envelope settings.
pub fn issuer(did: &str) -> CredentialIssuer {
    let config = IssuerConfig {
        did: did.into(),
        ..Default::default()
    };
    CredentialIssuer::new(Arc::new(KeyPair::generate()), config).unwrap()
}

/// `n` distinct claims named `claim-0` .. `claim-{n-1}`.
pub fn numbered_claims(n: usize) -> Vec<ClaimRecord> {
    (0..n)
        .map(|i| ClaimRecord::new(format!("claim-{}", i), format!("value-{}", i)))
        .collect()
}
