//! Credential and presentation envelopes.
//!
//! These are fixed data contracts carrying the commitment machinery's
//! outputs. The subject is an explicit variant: the full claim set as issued,
//! or a single disclosed claim with its inclusion path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use veridisc_core::{ClaimRecord, Did};
use veridisc_crypto::merkle::hex_digests;
use veridisc_crypto::{Hash, PublicKey, Seed, Signature};

use crate::error::CredentialError;

/// A verifiable credential whose claims are committed under a signed
/// Merkle root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiableCredential {
    /// Rule sets the credential follows.
    pub context: Vec<String>,
    /// Unique credential identifier.
    pub id: String,
    /// Credential types.
    pub types: Vec<String>,
    /// Full or disclosed claim subject.
    pub credential_subject: ClaimSubject,
    /// DID of the issuer.
    pub issuer: Did,
    pub issuance_date: DateTime<Utc>,
    pub expiration_date: Option<DateTime<Utc>>,
    /// Template the issuer filled, if any.
    #[serde(rename = "vcTmplID")]
    pub template_id: Option<String>,
    /// Issuer proof over every other field. Absent on credentials embedded
    /// in a presentation.
    pub proof: Option<CredentialProof>,
}

/// Issuer proof attached to a full credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialProof {
    #[serde(rename = "type")]
    pub proof_type: String,
    pub created: DateTime<Utc>,
    pub verification_method: String,
    pub proof_purpose: String,
    /// Base58 encoding of the signature `r || s`.
    pub proof_value: String,
}

/// The claim subject of a credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ClaimSubject {
    Full(FullSubject),
    Disclosed(DisclosedSubject),
}

/// Every claim as issued, plus the commitment over them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullSubject {
    pub did: Did,
    /// Claims in commitment order; position `i` takes salt `i`.
    pub claims: Vec<ClaimRecord>,
    #[serde(with = "hex::serde")]
    pub merkle_root: Hash,
    pub merkle_root_sign: Signature,
    pub signer: PublicKey,
    pub seed: Seed,
}

/// One disclosed claim with what a verifier needs to check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosedSubject {
    pub did: Did,
    /// Position of the disclosed claim in commitment order.
    pub claim_index: usize,
    pub disclosed: ClaimRecord,
    #[serde(with = "hex::serde")]
    pub merkle_root: Hash,
    pub merkle_root_sign: Signature,
    pub signer: PublicKey,
    pub seed: Seed,
    /// Sibling digests from leaf to root.
    #[serde(with = "hex_digests")]
    pub merkle_sibling: Vec<Hash>,
    /// Sibling sides as raw bits: 0 = left, 1 = right.
    pub data_index: Vec<u8>,
}

/// A presentation disclosing one claim from one credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiablePresentation {
    pub context: Vec<String>,
    pub id: String,
    #[serde(rename = "type")]
    pub types: Vec<String>,
    /// DID of the presenting holder.
    pub holder: Did,
    pub verifiable_credential: Vec<VerifiableCredential>,
    /// Holder proof slot. Presentations are bound by the root signature
    /// and inclusion path, so this is left empty.
    pub proof: Option<CredentialProof>,
}

impl VerifiableCredential {
    /// Canonical bytes covered by the issuer proof: the credential with
    /// `proof` cleared, serialized as JSON in field order.
    pub fn signing_payload(&self) -> Result<Vec<u8>, CredentialError> {
        let unsigned = Self {
            proof: None,
            ..self.clone()
        };
        Ok(serde_json::to_vec(&unsigned)?)
    }

    /// Check if the credential carries an issuer proof.
    pub fn is_signed(&self) -> bool {
        self.proof.is_some()
    }

    /// Check if the credential has expired.
    pub fn is_expired(&self) -> bool {
        self.expiration_date
            .map(|exp| Utc::now() > exp)
            .unwrap_or(false)
    }

    pub fn full_subject(&self) -> Option<&FullSubject> {
        match &self.credential_subject {
            ClaimSubject::Full(subject) => Some(subject),
            ClaimSubject::Disclosed(_) => None,
        }
    }

    pub fn disclosed_subject(&self) -> Option<&DisclosedSubject> {
        match &self.credential_subject {
            ClaimSubject::Disclosed(subject) => Some(subject),
            ClaimSubject::Full(_) => None,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, CredentialError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CredentialError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl VerifiablePresentation {
    pub fn to_json_pretty(&self) -> Result<String, CredentialError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CredentialError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veridisc_crypto::{sign, KeyPair};

    fn sample_subject(kp: &KeyPair) -> FullSubject {
        let root = veridisc_crypto::hash(b"root");
        FullSubject {
            did: Did::new("did:key:subject").unwrap(),
            claims: vec![ClaimRecord::new("A", "x"), ClaimRecord::new("B", "y")],
            merkle_root: root,
            merkle_root_sign: sign(&root, kp).unwrap(),
            signer: kp.public_key(),
            seed: Seed::from_bytes([1, 2, 3, 4, 5, 6, 7, 8]),
        }
    }

    fn sample_credential(kp: &KeyPair) -> VerifiableCredential {
        VerifiableCredential {
            context: vec!["https://www.w3.org/2018/credentials/v1".into()],
            id: "urn:uuid:test".into(),
            types: vec!["VerifiableCredential".into()],
            credential_subject: ClaimSubject::Full(sample_subject(kp)),
            issuer: Did::new("did:key:issuer").unwrap(),
            issuance_date: Utc::now(),
            expiration_date: None,
            template_id: Some("vctmpl.1".into()),
            proof: None,
        }
    }

    #[test]
    fn test_credential_json_roundtrip() {
        let kp = KeyPair::generate();
        let vc = sample_credential(&kp);
        let json = vc.to_json_pretty().unwrap();
        let back = VerifiableCredential::from_json(&json).unwrap();
        assert_eq!(back, vc);
    }

    #[test]
    fn test_credential_json_field_names() {
        let kp = KeyPair::generate();
        let vc = sample_credential(&kp);
        let value = serde_json::to_value(&vc).unwrap();
        assert_eq!(value["vcTmplID"], "vctmpl.1");
        assert_eq!(value["credentialSubject"]["kind"], "full");
        assert_eq!(value["credentialSubject"]["seed"], "0102030405060708");
        assert!(value["credentialSubject"]["merkleRootSign"]["r"].is_string());
        assert!(value["issuanceDate"].is_string());
    }

    #[test]
    fn test_signing_payload_ignores_proof() {
        let kp = KeyPair::generate();
        let mut vc = sample_credential(&kp);
        let before = vc.signing_payload().unwrap();
        vc.proof = Some(CredentialProof {
            proof_type: "EcdsaSecp256k1Blake3".into(),
            created: Utc::now(),
            verification_method: "did:key:issuer#key-1".into(),
            proof_purpose: "assertionMethod".into(),
            proof_value: "abc".into(),
        });
        assert_eq!(vc.signing_payload().unwrap(), before);
        assert!(vc.is_signed());
    }

    #[test]
    fn test_signing_payload_covers_claims() {
        let kp = KeyPair::generate();
        let vc = sample_credential(&kp);
        let mut altered = vc.clone();
        if let ClaimSubject::Full(subject) = &mut altered.credential_subject {
            subject.claims[0].value = "tampered".into();
        }
        assert_ne!(vc.signing_payload().unwrap(), altered.signing_payload().unwrap());
    }

    #[test]
    fn test_subject_accessors() {
        let kp = KeyPair::generate();
        let vc = sample_credential(&kp);
        assert!(vc.full_subject().is_some());
        assert!(vc.disclosed_subject().is_none());
    }

    #[test]
    fn test_expiration() {
        let kp = KeyPair::generate();
        let mut vc = sample_credential(&kp);
        assert!(!vc.is_expired());
        vc.expiration_date = Some(Utc::now() - chrono::Duration::hours(1));
        assert!(vc.is_expired());
    }

    #[test]
    fn test_disclosed_subject_json_roundtrip() {
        let kp = KeyPair::generate();
        let full = sample_subject(&kp);
        let disclosed = DisclosedSubject {
            did: full.did.clone(),
            claim_index: 1,
            disclosed: full.claims[1].clone(),
            merkle_root: full.merkle_root,
            merkle_root_sign: full.merkle_root_sign,
            signer: full.signer.clone(),
            seed: full.seed,
            merkle_sibling: vec![[7u8; 32]],
            data_index: vec![0],
        };
        let subject = ClaimSubject::Disclosed(disclosed);
        let json = serde_json::to_value(&subject).unwrap();
        assert_eq!(json["kind"], "disclosed");
        assert_eq!(json["merkleSibling"][0], hex::encode([7u8; 32]));
        assert_eq!(json["dataIndex"][0], 0);
        let back: ClaimSubject = serde_json::from_value(json).unwrap();
        assert_eq!(back, subject);
    }
}
