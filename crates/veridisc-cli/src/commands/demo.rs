//! `veridisc demo` — Issue, present and verify a fixed sample credential.

use clap::Args;
use std::sync::Arc;

use veridisc_core::{ClaimRecord, Did, VeridiscConfig};
use veridisc_credentials::{CredentialHolder, CredentialIssuer, PresentationVerifier};
use veridisc_crypto::KeyPair;

const SUBJECT_DID: &str = "did:unitrust:88bEzHraJifHm5jGhV2d4TqF9neD";
const LOGIN_ID: &str = "jjchen";
const OSBI_ID: &str = "ep:Bdid:unitrust:88bEzHraJifHm5jGhV2d4TqF9neD00617728";

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Claim to disclose (LoginID or OsbiID).
    #[arg(long, default_value = "OsbiID")]
    pub disclose: String,

    /// Print the presentation JSON.
    #[arg(long)]
    pub show: bool,
}

pub fn run(args: &DemoArgs, config: &VeridiscConfig) -> anyhow::Result<()> {
    let keypair = Arc::new(KeyPair::generate());
    let issuer = CredentialIssuer::new(keypair, config.issuer.clone())?;
    let subject = Did::new(SUBJECT_DID)?;

    let credential = issuer.issue(
        &subject,
        vec![
            ClaimRecord::new("LoginID", LOGIN_ID),
            ClaimRecord::new("OsbiID", OSBI_ID),
        ],
    )?;

    let presentation = CredentialHolder::new(subject).present(&credential, &args.disclose)?;
    if args.show {
        println!("{}", presentation.to_json_pretty()?);
    }

    let verified = PresentationVerifier::new().is_valid(&presentation);
    println!("verified: {}", verified);

    Ok(())
}
