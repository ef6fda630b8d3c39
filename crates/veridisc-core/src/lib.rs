//! Veridisc Core — Fundamental types, errors, and configuration for the
//! Veridisc selective-disclosure credential scheme.

pub mod config;
pub mod error;
pub mod types;

pub use config::{IssuerConfig, LoggingConfig, VeridiscConfig};
pub use error::CoreError;
pub use types::{validate_claims, ClaimRecord, Did, Position};
