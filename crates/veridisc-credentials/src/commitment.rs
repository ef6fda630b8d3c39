use veridisc_core::{validate_claims, ClaimRecord};
use veridisc_crypto::{salt_claims, MerkleTree, SaltedClaim, Seed};

use crate::error::CredentialError;

/// Build the commitment tree over `claims` salted from `seed`.
pub(crate) fn build_tree(seed: &Seed, claims: &[ClaimRecord]) -> Result<MerkleTree, CredentialError> {
    validate_claims(claims)?;
    Ok(MerkleTree::build(salt_claims(seed, claims))?)
}

/// Rebuild the leaf for the claim committed at position `index`.
pub(crate) fn salted_leaf(seed: &Seed, index: usize, claim: &ClaimRecord) -> SaltedClaim {
    SaltedClaim::new(claim, &seed.salt_at(index))
}
