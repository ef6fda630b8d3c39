//! Integration test: hashing, salting, tree and signature primitives.

use veridisc_core::{ClaimRecord, Position};
use veridisc_crypto::{
    derive_salt_chain, hash, salt_claims, sign, verify, verify_inclusion, CryptoError, KeyPair,
    MerkleTree, SaltedClaim, Signature,
};
use veridisc_integration_tests::{fixed_seed, numbered_claims};

fn ceil_log2(n: usize) -> usize {
    let mut depth = 0;
    while (1usize << depth) < n {
        depth += 1;
    }
    depth
}

// =========================================================================
// Signatures
// =========================================================================

#[test]
fn test_signature_roundtrip_and_tamper() {
    let kp = KeyPair::generate();
    let msg = hash(b"commitment root");
    let sig = sign(&msg, &kp).unwrap();
    assert!(verify(&msg, &sig, &kp.public_key()));

    let mut flipped = msg;
    flipped[0] ^= 0x01;
    assert!(!verify(&flipped, &sig, &kp.public_key()));

    let mut bytes = sig.to_bytes();
    bytes[40] ^= 0x01;
    let bad = Signature::from_bytes(&bytes).unwrap();
    assert!(!verify(&msg, &bad, &kp.public_key()));

    assert!(!verify(&msg, &sig, &KeyPair::generate().public_key()));
}

// =========================================================================
// Salts
// =========================================================================

#[test]
fn test_salt_chain_deterministic() {
    let seed = fixed_seed();
    assert_eq!(seed.salt_chain(5), seed.salt_chain(5));
    assert_eq!(seed.salt_chain(5), derive_salt_chain(seed.as_bytes(), 5));

    let chain = seed.salt_chain(3);
    assert_eq!(chain[0], hash(seed.as_bytes()));
    assert_eq!(chain[1], hash(&chain[0]));
    assert_eq!(chain[2], hash(&chain[1]));
}

#[test]
fn test_salting_hides_equal_values() {
    let claims = vec![ClaimRecord::new("k", "same"), ClaimRecord::new("k2", "same")];
    let salted = salt_claims(&fixed_seed(), &claims);
    assert_ne!(salted[0].salted_value, salted[1].salted_value);
}

// =========================================================================
// Tree
// =========================================================================

#[test]
fn test_depth_bound() {
    for n in 1..=33 {
        let tree = MerkleTree::build(salt_claims(&fixed_seed(), &numbered_claims(n))).unwrap();
        assert_eq!(tree.depth(), ceil_log2(n), "n={}", n);
        for leaf in tree.leaves() {
            assert_eq!(tree.path_for(leaf).unwrap().len(), ceil_log2(n));
        }
    }
}

#[test]
fn test_every_leaf_verifies() {
    for n in [1, 2, 3, 6, 11, 16] {
        let tree = MerkleTree::build(salt_claims(&fixed_seed(), &numbered_claims(n))).unwrap();
        let root = tree.root();
        for leaf in tree.leaves() {
            let path = tree.path_for(leaf).unwrap();
            assert!(verify_inclusion(&root, &path.siblings, &path.positions, leaf));
        }
    }
}

#[test]
fn test_path_tamper_fails() {
    let tree = MerkleTree::build(salt_claims(&fixed_seed(), &numbered_claims(5))).unwrap();
    let root = tree.root();
    let leaf = &tree.leaves()[2];
    let path = tree.path_for(leaf).unwrap();

    let mut siblings = path.siblings.clone();
    siblings[1][0] ^= 0xFF;
    assert!(!verify_inclusion(&root, &siblings, &path.positions, leaf));

    let mut positions = path.positions.clone();
    positions[0] = match positions[0] {
        Position::Left => Position::Right,
        Position::Right => Position::Left,
    };
    assert!(!verify_inclusion(&root, &path.siblings, &positions, leaf));

    let forged = SaltedClaim {
        key: leaf.key.clone(),
        salted_value: b"forged".to_vec(),
    };
    assert!(!verify_inclusion(&root, &path.siblings, &path.positions, &forged));
}

#[test]
fn test_duplicate_leaf_rejected() {
    let leaf = SaltedClaim {
        key: "A".into(),
        salted_value: b"x".to_vec(),
    };
    let result = MerkleTree::build(vec![leaf.clone(), leaf]);
    assert!(matches!(result, Err(CryptoError::DuplicateLeaf(k)) if k == "A"));
}

#[test]
fn test_empty_tree_rejected() {
    assert!(matches!(MerkleTree::build(vec![]), Err(CryptoError::EmptyTree)));
}
