//! `veridisc verify` — Verify a single-claim presentation.

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

use veridisc_credentials::{PresentationVerifier, VerifiablePresentation};

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to the presentation JSON.
    #[arg(short, long)]
    pub presentation: PathBuf,
}

pub fn run(args: &VerifyArgs) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&args.presentation)
        .with_context(|| format!("reading {}", args.presentation.display()))?;
    let presentation = VerifiablePresentation::from_json(&json)?;

    let result = PresentationVerifier::new().verify_presentation(&presentation);
    if result.valid {
        println!("Presentation is VALID");
    } else {
        println!("Presentation is INVALID");
    }
    println!();
    for check in &result.checks {
        let icon = if check.passed { "PASS" } else { "FAIL" };
        print!("  [{}] {}", icon, check.name);
        if let Some(ref detail) = check.detail {
            print!(": {}", detail);
        }
        println!();
    }

    Ok(())
}
