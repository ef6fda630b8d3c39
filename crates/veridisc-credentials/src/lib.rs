//! Veridisc Credentials — issuer, holder, and verifier over committed claims.

mod commitment;
pub mod envelope;
pub mod error;
pub mod holder;
pub mod issuer;
pub mod verifier;

pub use envelope::{
    ClaimSubject, CredentialProof, DisclosedSubject, FullSubject, VerifiableCredential,
    VerifiablePresentation,
};
pub use error::CredentialError;
pub use holder::CredentialHolder;
pub use issuer::CredentialIssuer;
pub use verifier::{PresentationVerifier, VerificationCheck, VerificationResult};
