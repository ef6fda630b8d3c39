//! Binary Merkle tree over salted claim leaves.
//!
//! Levels are paired left to right. A level with an odd number of nodes pairs
//! its last node with itself; a level with a single node is the root. A tree
//! of `n` leaves therefore has depth `ceil(log2(n))`, and a single-leaf tree's
//! root is that leaf's hash.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use veridisc_core::Position;

use crate::error::CryptoError;
use crate::hashing::{self, Hash};
use crate::salt::SaltedClaim;

/// Sibling digests and their sides, ordered from leaf to root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionPath {
    #[serde(with = "hex_digests")]
    pub siblings: Vec<Hash>,
    pub positions: Vec<Position>,
}

impl InclusionPath {
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Positions as raw 0/1 bits.
    pub fn bits(&self) -> Vec<u8> {
        self.positions.iter().map(|p| p.bit()).collect()
    }
}

/// Immutable Merkle tree. Kept by the issuer or holder, never transmitted.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    leaves: Vec<SaltedClaim>,
    /// `levels[0]` holds the leaf hashes, the last level holds the root.
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Build a tree over `leaves` in the given order.
    ///
    /// Fails on an empty leaf set and on structurally identical leaves.
    pub fn build(leaves: Vec<SaltedClaim>) -> Result<Self, CryptoError> {
        if leaves.is_empty() {
            return Err(CryptoError::EmptyTree);
        }
        let mut seen = HashSet::with_capacity(leaves.len());
        for leaf in &leaves {
            if !seen.insert(leaf) {
                return Err(CryptoError::DuplicateLeaf(leaf.key.clone()));
            }
        }

        let mut levels = vec![leaves.iter().map(SaltedClaim::leaf_hash).collect::<Vec<_>>()];
        while let Some(current) = levels.last().filter(|level| level.len() > 1) {
            let next: Vec<Hash> = current
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hashing::combine(left, right),
                    [single] => hashing::combine(single, single),
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                })
                .collect();
            levels.push(next);
        }

        tracing::debug!(
            leaves = leaves.len(),
            depth = levels.len() - 1,
            "merkle tree built"
        );

        Ok(Self { leaves, levels })
    }

    /// The commitment root.
    pub fn root(&self) -> Hash {
        // build() guarantees a non-empty top level.
        self.levels[self.levels.len() - 1][0]
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Always false: empty trees cannot be built.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Path length from any leaf to the root.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn leaves(&self) -> &[SaltedClaim] {
        &self.leaves
    }

    pub fn contains(&self, leaf: &SaltedClaim) -> bool {
        self.index_of(leaf).is_some()
    }

    fn index_of(&self, leaf: &SaltedClaim) -> Option<usize> {
        self.leaves.iter().position(|l| l == leaf)
    }

    /// Inclusion path for `leaf`, walking from the leaf up to the root.
    pub fn path_for(&self, leaf: &SaltedClaim) -> Result<InclusionPath, CryptoError> {
        let mut index = self
            .index_of(leaf)
            .ok_or_else(|| CryptoError::LeafNotFound(leaf.key.clone()))?;

        let depth = self.depth();
        let mut siblings = Vec::with_capacity(depth);
        let mut positions = Vec::with_capacity(depth);

        for level in &self.levels[..depth] {
            if index % 2 == 0 {
                // Left child; a trailing odd node is its own sibling.
                let sibling = level.get(index + 1).unwrap_or(&level[index]);
                siblings.push(*sibling);
                positions.push(Position::Right);
            } else {
                siblings.push(level[index - 1]);
                positions.push(Position::Left);
            }
            index /= 2;
        }

        Ok(InclusionPath {
            siblings,
            positions,
        })
    }
}

/// Serde adapter for a list of digests as hex strings.
pub mod hex_digests {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::hashing::Hash;

    pub fn serialize<S: Serializer>(digests: &[Hash], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(digests.iter().map(hex::encode))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Hash>, D::Error> {
        let encoded = Vec::<String>::deserialize(deserializer)?;
        encoded
            .iter()
            .map(|s| {
                let mut digest = [0u8; 32];
                hex::decode_to_slice(s, &mut digest)
                    .map(|()| digest)
                    .map_err(de::Error::custom)
            })
            .collect()
    }
}
