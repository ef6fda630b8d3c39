//! `veridisc present` — Disclose one claim of an issued credential.

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

use veridisc_core::Did;
use veridisc_credentials::{CredentialHolder, VerifiableCredential};

#[derive(Args, Debug)]
pub struct PresentArgs {
    /// Path to the issued credential JSON.
    #[arg(long)]
    pub credential: PathBuf,

    /// Key of the claim to disclose.
    #[arg(long)]
    pub claim: String,

    /// Holder DID. Defaults to the credential subject.
    #[arg(long)]
    pub holder: Option<String>,

    /// Write the presentation here instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &PresentArgs) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&args.credential)
        .with_context(|| format!("reading {}", args.credential.display()))?;
    let credential = VerifiableCredential::from_json(&json)?;

    let holder = match &args.holder {
        Some(did) => Did::new(did.as_str())?,
        None => credential
            .full_subject()
            .map(|s| s.did.clone())
            .context("credential subject is already redacted")?,
    };

    let presentation = CredentialHolder::new(holder).present(&credential, &args.claim)?;
    super::emit(&presentation.to_json_pretty()?, args.out.as_deref())
}
