//! Standalone inclusion-proof check.
//!
//! Works only from disclosed materials: a verifier never sees the tree.

use veridisc_core::Position;

use crate::hashing::{self, Hash};
use crate::salt::SaltedClaim;

/// Recompute the root from `leaf` along `siblings`/`positions` and compare
/// it to `root`. Any mismatch, including unequal path lengths, is `false`.
pub fn verify_inclusion(
    root: &Hash,
    siblings: &[Hash],
    positions: &[Position],
    leaf: &SaltedClaim,
) -> bool {
    if siblings.len() != positions.len() {
        tracing::debug!(
            siblings = siblings.len(),
            positions = positions.len(),
            "inclusion path length mismatch"
        );
        return false;
    }

    let computed = siblings
        .iter()
        .zip(positions)
        .fold(leaf.leaf_hash(), |current, (sibling, position)| match position {
            Position::Left => hashing::combine(sibling, &current),
            Position::Right => hashing::combine(&current, sibling),
        });

    computed == *root
}

/// Like [`verify_inclusion`], taking positions as raw bits off the wire.
/// Any bit other than 0 or 1 fails verification.
pub fn verify_inclusion_bits(
    root: &Hash,
    siblings: &[Hash],
    bits: &[u8],
    leaf: &SaltedClaim,
) -> bool {
    let positions: Result<Vec<Position>, _> =
        bits.iter().map(|&b| Position::try_from(b)).collect();
    match positions {
        Ok(positions) => verify_inclusion(root, siblings, &positions, leaf),
        Err(e) => {
            tracing::debug!(error = %e, "malformed inclusion path bits");
            false
        }
    }
}
