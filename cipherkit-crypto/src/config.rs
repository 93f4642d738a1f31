//! Toolkit configuration.

use crate::registry::{CipherStrength, HashAlgorithm};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How numeric algorithm selectors outside the known range are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum SelectorPolicy {
    /// Unknown selectors fail with a selector-stage failure.
    #[default]
    Strict,
    /// Unknown selectors resolve to the given defaults and log a warning.
    LegacyFallback {
        hash: HashAlgorithm,
        cipher: CipherStrength,
    },
}

impl SelectorPolicy {
    /// Fallback to SHA3-256 and AES-128, the historical defaults.
    pub fn legacy() -> Self {
        Self::LegacyFallback {
            hash: HashAlgorithm::Sha3_256,
            cipher: CipherStrength::Aes128,
        }
    }
}

/// Configuration for a [`crate::Toolkit`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolkitConfig {
    /// Handling of unknown numeric selectors.
    #[serde(default)]
    pub selector_policy: SelectorPolicy,
}

impl ToolkitConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
