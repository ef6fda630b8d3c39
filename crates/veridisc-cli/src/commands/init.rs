//! `veridisc init` — Write a default configuration file.

use clap::Args;
use std::path::Path;

use veridisc_core::VeridiscConfig;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: &InitArgs, config_path: &Path) -> anyhow::Result<()> {
    if config_path.exists() && !args.force {
        anyhow::bail!(
            "configuration file already exists at {}",
            config_path.display()
        );
    }

    VeridiscConfig::default().save(config_path)?;
    println!("Wrote default configuration to {}", config_path.display());
    println!("Edit the [issuer] section to set the issuing DID and envelope fields.");

    Ok(())
}
