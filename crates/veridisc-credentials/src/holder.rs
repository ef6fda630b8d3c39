use uuid::Uuid;

use veridisc_core::Did;

use crate::commitment;
use crate::envelope::{ClaimSubject, DisclosedSubject, VerifiableCredential, VerifiablePresentation};
use crate::error::CredentialError;

/// Presentation type stamped on every presentation.
pub const PRESENTATION_TYPE: &str = "VerifiablePresentation";

/// Holder of issued credentials; derives single-claim presentations.
#[derive(Debug, Clone)]
pub struct CredentialHolder {
    did: Did,
}

impl CredentialHolder {
    pub fn new(did: Did) -> Self {
        Self { did }
    }

    pub fn did(&self) -> &Did {
        &self.did
    }

    /// Disclose the claim named `claim_key` from `credential`.
    ///
    /// Rebuilds the commitment tree from the credential's seed and claims and
    /// refuses to present if it does not reproduce the signed root.
    pub fn present(
        &self,
        credential: &VerifiableCredential,
        claim_key: &str,
    ) -> Result<VerifiablePresentation, CredentialError> {
        let subject = credential.full_subject().ok_or_else(|| {
            CredentialError::PresentationError("credential subject is already redacted".into())
        })?;
        if subject.did != self.did {
            return Err(CredentialError::PresentationError(format!(
                "credential subject {} does not match holder {}",
                subject.did, self.did
            )));
        }

        let (claim_index, claim) = subject
            .claims
            .iter()
            .enumerate()
            .find(|(_, c)| c.key == claim_key)
            .ok_or_else(|| CredentialError::ClaimNotFound(claim_key.to_string()))?;

        let tree = commitment::build_tree(&subject.seed, &subject.claims)?;
        if tree.root() != subject.merkle_root {
            return Err(CredentialError::PresentationError(
                "claims do not reproduce the committed root".into(),
            ));
        }

        let leaf = commitment::salted_leaf(&subject.seed, claim_index, claim);
        let path = tree.path_for(&leaf)?;

        let disclosed = VerifiableCredential {
            credential_subject: ClaimSubject::Disclosed(DisclosedSubject {
                did: subject.did.clone(),
                claim_index,
                disclosed: claim.clone(),
                merkle_root: subject.merkle_root,
                merkle_root_sign: subject.merkle_root_sign,
                signer: subject.signer.clone(),
                seed: subject.seed,
                data_index: path.bits(),
                merkle_sibling: path.siblings,
            }),
            proof: None,
            ..credential.clone()
        };

        let vp = VerifiablePresentation {
            context: credential.context.clone(),
            id: format!("urn:uuid:{}", Uuid::now_v7()),
            types: vec![PRESENTATION_TYPE.into()],
            holder: self.did.clone(),
            verifiable_credential: vec![disclosed],
            proof: None,
        };

        tracing::info!(
            holder = %self.did,
            credential_id = %credential.id,
            presentation_id = %vp.id,
            claim = claim_key,
            path_len = vp.verifiable_credential[0]
                .disclosed_subject()
                .map(|s| s.merkle_sibling.len())
                .unwrap_or_default(),
            "presentation created"
        );

        Ok(vp)
    }
}
