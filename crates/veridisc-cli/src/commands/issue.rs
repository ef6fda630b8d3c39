//! `veridisc issue` — Issue a credential over a set of claims.

use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use veridisc_core::{ClaimRecord, Did, VeridiscConfig};
use veridisc_credentials::CredentialIssuer;
use veridisc_crypto::{KeyPair, Seed};

#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Subject DID to issue the credential to.
    #[arg(short, long)]
    pub subject: String,

    /// Claim as key=value. Repeat for each claim; order is commitment order.
    #[arg(long = "claim", value_parser = ClaimRecord::parse, required = true)]
    pub claims: Vec<ClaimRecord>,

    /// Seed as 16 hex characters. Drawn from the OS when omitted.
    #[arg(long)]
    pub seed: Option<String>,

    /// Write the credential here instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &IssueArgs, config: &VeridiscConfig) -> anyhow::Result<()> {
    let subject = Did::new(args.subject.as_str())?;

    tracing::info!("generating ephemeral issuer keypair");
    let keypair = Arc::new(KeyPair::generate());
    let issuer = CredentialIssuer::new(keypair, config.issuer.clone())?;

    let credential = match &args.seed {
        Some(hex_seed) => {
            let seed = Seed::from_hex(hex_seed)?;
            issuer.issue_with_seed(&subject, args.claims.clone(), seed)?
        }
        None => issuer.issue(&subject, args.claims.clone())?,
    };

    super::emit(&credential.to_json_pretty()?, args.out.as_deref())
}
