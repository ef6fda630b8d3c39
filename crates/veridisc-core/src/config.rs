//! Configuration loading and management.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CoreError;

/// Full configuration for Veridisc issuance and verification tooling.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VeridiscConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Issuer settings used when filling credential envelopes.
    #[serde(default)]
    pub issuer: IssuerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuerConfig {
    /// DID of the issuing authority.
    #[serde(default = "default_issuer_did")]
    pub did: String,
    /// JSON-LD contexts stamped onto every credential.
    #[serde(default = "default_context")]
    pub context: Vec<String>,
    /// Credential types stamped onto every credential.
    #[serde(default = "default_types")]
    pub types: Vec<String>,
    /// Opaque template identifier carried in the envelope.
    #[serde(default)]
    pub template_id: Option<String>,
    /// Validity window in days; 0 means no expiration.
    #[serde(default = "default_validity_days")]
    pub validity_days: u32,
    /// Proof suite name written into the envelope proof.
    #[serde(default = "default_proof_type")]
    pub proof_type: String,
    /// Verification method reference written into the envelope proof.
    /// Defaults to `<did>#key-1` when unset.
    #[serde(default)]
    pub verification_method: Option<String>,
}

fn default_log_level() -> String {
    "info".into()
}
fn default_log_format() -> String {
    "text".into()
}
fn default_issuer_did() -> String {
    "did:veridisc:issuer".into()
}
fn default_context() -> Vec<String> {
    vec!["https://www.w3.org/2018/credentials/v1".into()]
}
fn default_types() -> Vec<String> {
    vec!["VerifiableCredential".into()]
}
fn default_validity_days() -> u32 {
    365
}
fn default_proof_type() -> String {
    "EcdsaSecp256k1Blake3".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            did: default_issuer_did(),
            context: default_context(),
            types: default_types(),
            template_id: None,
            validity_days: default_validity_days(),
            proof_type: default_proof_type(),
            verification_method: None,
        }
    }
}

impl IssuerConfig {
    /// The verification method reference, falling back to `<did>#key-1`.
    pub fn verification_method(&self) -> String {
        self.verification_method
            .clone()
            .unwrap_or_else(|| format!("{}#key-1", self.did))
    }
}

impl VeridiscConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config: VeridiscConfig = toml::from_str(&contents)
                .map_err(|e| CoreError::ConfigError(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save the current config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| CoreError::ConfigError(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}
