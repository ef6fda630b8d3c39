use veridisc_crypto::{verify, verify_inclusion_bits, Signature};

use crate::commitment;
use crate::envelope::{VerifiableCredential, VerifiablePresentation};

/// Longest inclusion path accepted from a presentation. Bounds the salt
/// chain the verifier regenerates for an untrusted claim index.
pub const MAX_PATH_DEPTH: usize = 20;

/// Result of credential or presentation verification.
#[derive(Debug, Clone)]
pub struct VerificationResult {
    /// Whether every check passed.
    pub valid: bool,
    /// Individual check results.
    pub checks: Vec<VerificationCheck>,
}

/// An individual verification check.
#[derive(Debug, Clone)]
pub struct VerificationCheck {
    /// Name of the check.
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Optional detail message.
    pub detail: Option<String>,
}

impl VerificationCheck {
    fn new(name: &str, passed: bool, failure: impl FnOnce() -> String) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: if passed { None } else { Some(failure()) },
        }
    }
}

impl VerificationResult {
    fn from_checks(checks: Vec<VerificationCheck>) -> Self {
        let valid = !checks.is_empty() && checks.iter().all(|c| c.passed);
        for failed in checks.iter().filter(|c| !c.passed) {
            tracing::warn!(
                check = %failed.name,
                detail = failed.detail.as_deref().unwrap_or_default(),
                "verification check failed"
            );
        }
        Self { valid, checks }
    }

    /// Whether the named check ran and passed.
    pub fn passed(&self, name: &str) -> bool {
        self.checks.iter().any(|c| c.name == name && c.passed)
    }
}

/// Verifies presentations and full credentials.
///
/// Verification is a query: every failure is reported as a failed check,
/// never as an error.
#[derive(Debug, Clone, Default)]
pub struct PresentationVerifier;

impl PresentationVerifier {
    pub fn new() -> Self {
        Self
    }

    /// `true` iff the root signature and the inclusion proof both hold.
    pub fn is_valid(&self, presentation: &VerifiablePresentation) -> bool {
        self.verify_presentation(presentation).valid
    }

    /// Check a single-claim presentation.
    pub fn verify_presentation(&self, presentation: &VerifiablePresentation) -> VerificationResult {
        let mut checks = Vec::new();

        let subject = match presentation.verifiable_credential.as_slice() {
            [credential] => credential.disclosed_subject(),
            _ => None,
        };
        checks.push(VerificationCheck::new(
            "subject_disclosed",
            subject.is_some(),
            || {
                format!(
                    "expected exactly one credential with a disclosed subject, got {}",
                    presentation.verifiable_credential.len()
                )
            },
        ));
        let Some(subject) = subject else {
            return VerificationResult::from_checks(checks);
        };

        let root_ok = verify(&subject.merkle_root, &subject.merkle_root_sign, &subject.signer);
        checks.push(VerificationCheck::new("root_signature_valid", root_ok, || {
            "signature over the commitment root does not verify".into()
        }));

        let depth = subject.merkle_sibling.len();
        let index_in_range = depth <= MAX_PATH_DEPTH && subject.claim_index < (1usize << depth);
        let inclusion_ok = index_in_range && {
            let leaf = commitment::salted_leaf(&subject.seed, subject.claim_index, &subject.disclosed);
            verify_inclusion_bits(
                &subject.merkle_root,
                &subject.merkle_sibling,
                &subject.data_index,
                &leaf,
            )
        };
        checks.push(VerificationCheck::new("inclusion_proof_valid", inclusion_ok, || {
            if index_in_range {
                format!("claim '{}' is not included in the root", subject.disclosed.key)
            } else {
                format!(
                    "claim index {} out of range for a path of length {}",
                    subject.claim_index, depth
                )
            }
        }));

        let result = VerificationResult::from_checks(checks);
        tracing::info!(
            presentation_id = %presentation.id,
            holder = %presentation.holder,
            claim = %subject.disclosed.key,
            valid = result.valid,
            "presentation verified"
        );
        result
    }

    /// Check a full credential as issued.
    pub fn verify_credential(&self, credential: &VerifiableCredential) -> VerificationResult {
        let mut checks = Vec::new();

        let subject = credential.full_subject();
        checks.push(VerificationCheck::new("subject_full", subject.is_some(), || {
            "credential subject is redacted".into()
        }));
        let Some(subject) = subject else {
            return VerificationResult::from_checks(checks);
        };

        let proof_ok = match (&credential.proof, credential.signing_payload()) {
            (Some(proof), Ok(payload)) => Signature::from_bs58(&proof.proof_value)
                .map(|sig| verify(&payload, &sig, &subject.signer))
                .unwrap_or(false),
            _ => false,
        };
        checks.push(VerificationCheck::new("credential_proof_valid", proof_ok, || {
            "issuer proof is missing or does not verify".into()
        }));

        let root_ok = verify(&subject.merkle_root, &subject.merkle_root_sign, &subject.signer);
        checks.push(VerificationCheck::new("root_signature_valid", root_ok, || {
            "signature over the commitment root does not verify".into()
        }));

        let commitment_ok = commitment::build_tree(&subject.seed, &subject.claims)
            .map(|tree| tree.root() == subject.merkle_root)
            .unwrap_or(false);
        checks.push(VerificationCheck::new(
            "commitment_matches_claims",
            commitment_ok,
            || "claims do not reproduce the committed root".into(),
        ));

        let not_expired = !credential.is_expired();
        checks.push(VerificationCheck::new("not_expired", not_expired, || {
            "credential has expired".into()
        }));

        VerificationResult::from_checks(checks)
    }
}
