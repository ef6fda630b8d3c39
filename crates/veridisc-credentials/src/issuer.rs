use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use veridisc_core::{ClaimRecord, Did, IssuerConfig};
use veridisc_crypto::{random_seed, sign, KeyPair, PublicKey, Seed};

use crate::commitment;
use crate::envelope::{ClaimSubject, CredentialProof, FullSubject, VerifiableCredential};
use crate::error::CredentialError;

/// Proof purpose stamped on issuer proofs.
pub const ASSERTION_METHOD: &str = "assertionMethod";

/// Issues credentials whose claims are committed under a signed Merkle root.
pub struct CredentialIssuer {
    /// DID of the issuer.
    did: Did,
    /// Issuer's signing keypair, shared with any other signer in the process.
    keypair: Arc<KeyPair>,
    config: IssuerConfig,
}

impl CredentialIssuer {
    /// Create a new credential issuer from its keypair and envelope settings.
    pub fn new(keypair: Arc<KeyPair>, config: IssuerConfig) -> Result<Self, CredentialError> {
        let did = Did::new(config.did.clone())
            .map_err(|e| CredentialError::InvalidConfig(e.to_string()))?;
        expiration_after(Utc::now(), config.validity_days)?;
        Ok(Self {
            did,
            keypair,
            config,
        })
    }

    /// Get the issuer's DID.
    pub fn did(&self) -> &Did {
        &self.did
    }

    pub fn public_key(&self) -> PublicKey {
        self.keypair.public_key()
    }

    /// Issue a credential over `claims` with a freshly drawn seed.
    ///
    /// Fails if the OS entropy source is unavailable.
    pub fn issue(
        &self,
        subject: &Did,
        claims: Vec<ClaimRecord>,
    ) -> Result<VerifiableCredential, CredentialError> {
        let seed = random_seed()?;
        self.issue_with_seed(subject, claims, seed)
    }

    /// Issue a credential with a caller-supplied seed.
    ///
    /// Claims keep their order: claim `i` takes salt `i` of the seed chain.
    pub fn issue_with_seed(
        &self,
        subject: &Did,
        claims: Vec<ClaimRecord>,
        seed: Seed,
    ) -> Result<VerifiableCredential, CredentialError> {
        let tree = commitment::build_tree(&seed, &claims)?;
        let merkle_root = tree.root();
        let merkle_root_sign = sign(&merkle_root, &self.keypair)?;

        let now = Utc::now();
        let expiration_date = expiration_after(now, self.config.validity_days)?;

        let mut vc = VerifiableCredential {
            context: self.config.context.clone(),
            id: format!("urn:uuid:{}", Uuid::now_v7()),
            types: self.config.types.clone(),
            credential_subject: ClaimSubject::Full(FullSubject {
                did: subject.clone(),
                claims,
                merkle_root,
                merkle_root_sign,
                signer: self.keypair.public_key(),
                seed,
            }),
            issuer: self.did.clone(),
            issuance_date: now,
            expiration_date,
            template_id: self.config.template_id.clone(),
            proof: None,
        };

        let payload = vc.signing_payload()?;
        let proof_sig = sign(&payload, &self.keypair)
            .map_err(|e| CredentialError::IssuanceFailed(e.to_string()))?;
        vc.proof = Some(CredentialProof {
            proof_type: self.config.proof_type.clone(),
            created: now,
            verification_method: self.config.verification_method(),
            proof_purpose: ASSERTION_METHOD.into(),
            proof_value: proof_sig.to_bs58(),
        });

        tracing::info!(
            issuer = %self.did,
            subject = %subject,
            credential_id = %vc.id,
            claims = tree.len(),
            root = %hex::encode(merkle_root),
            "credential issued"
        );

        Ok(vc)
    }
}

/// Expiration `days` after `issued`; `None` when `days` is 0.
fn expiration_after(
    issued: DateTime<Utc>,
    days: u32,
) -> Result<Option<DateTime<Utc>>, CredentialError> {
    if days == 0 {
        return Ok(None);
    }
    issued
        .checked_add_signed(Duration::days(i64::from(days)))
        .map(Some)
        .ok_or_else(|| {
            CredentialError::InvalidConfig(format!(
                "validity_days {} overflows the representable date range",
                days
            ))
        })
}
