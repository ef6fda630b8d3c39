//! Integration test: issuer → holder → verifier across crates.

use veridisc_core::ClaimRecord;
use veridisc_credentials::{
    ClaimSubject, CredentialHolder, PresentationVerifier, VerifiableCredential,
    VerifiablePresentation,
};
use veridisc_integration_tests::{fixed_seed, issuer, numbered_claims, subject_did};

fn disclose(vc: &VerifiableCredential, key: &str) -> VerifiablePresentation {
    CredentialHolder::new(subject_did()).present(vc, key).unwrap()
}

fn set_disclosed_value(vp: &mut VerifiablePresentation, value: &str) {
    match &mut vp.verifiable_credential[0].credential_subject {
        ClaimSubject::Disclosed(subject) => subject.disclosed.value = value.into(),
        ClaimSubject::Full(_) => panic!("expected disclosed subject"),
    }
}

// =========================================================================
// Fixed-seed scenario
// =========================================================================

#[test]
fn test_fixed_seed_disclosure() {
    let vc = issuer("did:key:issuer")
        .issue_with_seed(
            &subject_did(),
            vec![ClaimRecord::new("A", "x"), ClaimRecord::new("B", "y")],
            fixed_seed(),
        )
        .unwrap();

    let mut vp = disclose(&vc, "B");
    let verifier = PresentationVerifier::new();
    assert!(verifier.is_valid(&vp));

    set_disclosed_value(&mut vp, "z");
    assert!(!verifier.is_valid(&vp));
}

#[test]
fn test_fixed_seed_root_is_reproducible() {
    let claims = vec![ClaimRecord::new("A", "x"), ClaimRecord::new("B", "y")];
    let a = issuer("did:key:one")
        .issue_with_seed(&subject_did(), claims.clone(), fixed_seed())
        .unwrap();
    let b = issuer("did:key:two")
        .issue_with_seed(&subject_did(), claims, fixed_seed())
        .unwrap();
    assert_eq!(
        a.full_subject().unwrap().merkle_root,
        b.full_subject().unwrap().merkle_root
    );
}

// =========================================================================
// Every claim of every tree size
// =========================================================================

#[test]
fn test_every_claim_discloses_for_several_sizes() {
    let issuer = issuer("did:key:issuer");
    let verifier = PresentationVerifier::new();
    for n in [1, 2, 3, 4, 5, 7, 8, 9] {
        let vc = issuer.issue(&subject_did(), numbered_claims(n)).unwrap();
        for i in 0..n {
            let vp = disclose(&vc, &format!("claim-{}", i));
            assert!(verifier.is_valid(&vp), "n={} i={}", n, i);
        }
    }
}

#[test]
fn test_cross_credential_claim_rejected() {
    let issuer = issuer("did:key:issuer");
    let first = issuer.issue(&subject_did(), numbered_claims(4)).unwrap();
    let second = issuer.issue(&subject_did(), numbered_claims(4)).unwrap();

    // Splice the disclosure of one credential onto the other's signed root.
    let mut vp = disclose(&first, "claim-2");
    let other = second.full_subject().unwrap();
    if let ClaimSubject::Disclosed(subject) = &mut vp.verifiable_credential[0].credential_subject {
        subject.merkle_root = other.merkle_root;
        subject.merkle_root_sign = other.merkle_root_sign;
    }
    let result = PresentationVerifier::new().verify_presentation(&vp);
    assert!(result.passed("root_signature_valid"));
    assert!(!result.passed("inclusion_proof_valid"));
}

// =========================================================================
// Wire round-trip
// =========================================================================

#[test]
fn test_presentation_json_roundtrip_verifies() {
    let vc = issuer("did:key:issuer")
        .issue(&subject_did(), numbered_claims(5))
        .unwrap();
    let vc = VerifiableCredential::from_json(&vc.to_json_pretty().unwrap()).unwrap();
    let vp = disclose(&vc, "claim-3");

    let json = vp.to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let subject = &value["verifiableCredential"][0]["credentialSubject"];
    assert_eq!(subject["kind"], "disclosed");
    assert_eq!(subject["claimIndex"], 3);
    assert!(value["verifiableCredential"][0]["proof"].is_null());
    assert!(value.as_object().unwrap().contains_key("proof"));
    assert!(value["proof"].is_null());

    let back = VerifiablePresentation::from_json(&json).unwrap();
    assert!(PresentationVerifier::new().is_valid(&back));
}

#[test]
fn test_tampered_json_fails() {
    let vc = issuer("did:key:issuer")
        .issue(&subject_did(), numbered_claims(3))
        .unwrap();
    let vp = disclose(&vc, "claim-1");
    let json = vp
        .to_json_pretty()
        .unwrap()
        .replace("\"value-1\"", "\"value-9\"");
    let back = VerifiablePresentation::from_json(&json).unwrap();
    assert!(!PresentationVerifier::new().is_valid(&back));
}

// =========================================================================
// Full credential checks
// =========================================================================

#[test]
fn test_full_credential_verifies_after_json() {
    let vc = issuer("did:key:issuer")
        .issue(&subject_did(), numbered_claims(6))
        .unwrap();
    let back = VerifiableCredential::from_json(&vc.to_json_pretty().unwrap()).unwrap();
    let result = PresentationVerifier::new().verify_credential(&back);
    assert!(result.valid, "{:?}", result.checks);
}

#[test]
fn test_expired_credential_still_presents() {
    let mut vc = issuer("did:key:issuer")
        .issue(&subject_did(), numbered_claims(2))
        .unwrap();
    vc.expiration_date = Some(chrono::Utc::now() - chrono::Duration::days(1));

    let verifier = PresentationVerifier::new();
    assert!(!verifier.verify_credential(&vc).passed("not_expired"));
    // Presentations commit only to the root signature and inclusion path.
    assert!(verifier.is_valid(&disclose(&vc, "claim-0")));
}
