//! Veridisc CLI — selective disclosure of committed credential claims.
//!
//! Subcommands: init, demo, issue, present, verify.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use veridisc_core::VeridiscConfig;

/// Veridisc — disclose one claim, prove the rest were committed.
#[derive(Parser, Debug)]
#[command(name = "veridisc", version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, global = true, default_value = "veridisc.toml")]
    config: PathBuf,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default configuration file.
    Init(commands::init::InitArgs),
    /// Issue, present and verify a fixed sample credential.
    Demo(commands::demo::DemoArgs),
    /// Issue a credential over a set of claims.
    Issue(commands::issue::IssueArgs),
    /// Disclose one claim of an issued credential.
    Present(commands::present::PresentArgs),
    /// Verify a single-claim presentation.
    Verify(commands::verify::VerifyArgs),
}

fn init_tracing(config: &VeridiscConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Init(args) = &cli.command {
        return commands::init::run(args, &cli.config);
    }

    let mut config = VeridiscConfig::load(&cli.config)?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    init_tracing(&config);

    match &cli.command {
        Commands::Init(_) => Ok(()),
        Commands::Demo(args) => commands::demo::run(args, &config),
        Commands::Issue(args) => commands::issue::run(args, &config),
        Commands::Present(args) => commands::present::run(args),
        Commands::Verify(args) => commands::verify::run(args),
    }
}
