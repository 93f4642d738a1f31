//! Algorithm selectors and the parameters behind them.
//!
//! [`HashAlgorithm`] and [`CipherStrength`] are plain selectors. Their sizes
//! come from [`digest_descriptor`] and [`cipher_descriptor`], which are total
//! over the enums. Numeric selectors from untyped callers go through
//! `from_raw`, governed by a [`SelectorPolicy`].

use crate::config::SelectorPolicy;
use crate::error::{fail, CryptoFailure, CryptoResult, FailureStage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// AES block size in bytes.
pub const AES_BLOCK_SIZE: usize = 16;

/// CBC initialization vector size in bytes (one AES block).
pub const IV_SIZE: usize = AES_BLOCK_SIZE;

/// Supported digest algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[serde(rename = "md5")]
    Md5,
    #[serde(rename = "sha256")]
    Sha256,
    #[serde(rename = "sha512")]
    Sha512,
    #[serde(rename = "sha3-256")]
    Sha3_256,
    #[serde(rename = "sha3-512")]
    Sha3_512,
}

impl HashAlgorithm {
    /// Every supported digest algorithm.
    pub const ALL: [HashAlgorithm; 5] = [
        Self::Md5,
        Self::Sha256,
        Self::Sha512,
        Self::Sha3_256,
        Self::Sha3_512,
    ];

    /// Numeric selector, in the legacy numbering used by untyped callers.
    pub fn raw(self) -> u32 {
        match self {
            Self::Md5 => 0,
            Self::Sha3_256 => 1,
            Self::Sha3_512 => 2,
            Self::Sha256 => 3,
            Self::Sha512 => 4,
        }
    }

    /// Resolves a numeric selector, falling back or failing per `policy`.
    pub fn from_raw(raw: u32, policy: &SelectorPolicy) -> CryptoResult<Self> {
        if let Some(algorithm) = Self::ALL.into_iter().find(|a| a.raw() == raw) {
            return Ok(algorithm);
        }
        match policy {
            SelectorPolicy::Strict => Err(fail!(
                FailureStage::Selector,
                "HashAlgorithm::from_raw",
                format!("unknown hash selector {raw}")
            )),
            SelectorPolicy::LegacyFallback { hash, .. } => {
                warn!("unknown hash selector {raw}, falling back to {hash}");
                Ok(*hash)
            }
        }
    }

    /// Canonical lowercase name, also used by serde.
    pub fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_512 => "sha3-512",
        }
    }

    /// Digest output length in bytes.
    pub fn digest_size(self) -> usize {
        digest_descriptor(self).digest_size
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = CryptoFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            "sha3-256" | "sha3_256" => Ok(Self::Sha3_256),
            "sha3-512" | "sha3_512" => Ok(Self::Sha3_512),
            _ => Err(fail!(
                FailureStage::Selector,
                "HashAlgorithm::from_str",
                format!("unknown hash algorithm {s:?}")
            )),
        }
    }
}

/// AES-CBC key strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherStrength {
    #[serde(rename = "aes-128-cbc")]
    Aes128,
    #[serde(rename = "aes-256-cbc")]
    Aes256,
}

impl CipherStrength {
    /// Every supported cipher strength.
    pub const ALL: [CipherStrength; 2] = [Self::Aes128, Self::Aes256];

    /// Numeric selector used by untyped callers.
    pub fn raw(self) -> u32 {
        match self {
            Self::Aes128 => 0,
            Self::Aes256 => 1,
        }
    }

    /// Resolves a numeric selector, falling back or failing per `policy`.
    pub fn from_raw(raw: u32, policy: &SelectorPolicy) -> CryptoResult<Self> {
        if let Some(strength) = Self::ALL.into_iter().find(|s| s.raw() == raw) {
            return Ok(strength);
        }
        match policy {
            SelectorPolicy::Strict => Err(fail!(
                FailureStage::Selector,
                "CipherStrength::from_raw",
                format!("unknown cipher selector {raw}")
            )),
            SelectorPolicy::LegacyFallback { cipher, .. } => {
                warn!("unknown cipher selector {raw}, falling back to {cipher}");
                Ok(*cipher)
            }
        }
    }

    /// Canonical cipher name, e.g. `aes-128-cbc`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Aes128 => "aes-128-cbc",
            Self::Aes256 => "aes-256-cbc",
        }
    }

    /// Required key length in bytes.
    pub fn key_size(self) -> usize {
        cipher_descriptor(self).key_size
    }
}

impl fmt::Display for CipherStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherStrength {
    type Err = CryptoFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aes-128-cbc" | "aes128" | "128" => Ok(Self::Aes128),
            "aes-256-cbc" | "aes256" | "256" => Ok(Self::Aes256),
            _ => Err(fail!(
                FailureStage::Selector,
                "CipherStrength::from_str",
                format!("unknown cipher strength {s:?}")
            )),
        }
    }
}

/// Parameters of a digest primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigestDescriptor {
    pub algorithm: HashAlgorithm,
    pub name: &'static str,
    /// Output length in bytes.
    pub digest_size: usize,
    /// Internal block (rate) length in bytes.
    pub block_size: usize,
}

/// Parameters of an AES-CBC primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CipherDescriptor {
    pub strength: CipherStrength,
    pub name: &'static str,
    pub key_size: usize,
    pub block_size: usize,
    pub iv_size: usize,
}

/// Looks up the parameters of a digest algorithm.
pub fn digest_descriptor(algorithm: HashAlgorithm) -> DigestDescriptor {
    let (digest_size, block_size) = match algorithm {
        HashAlgorithm::Md5 => (16, 64),
        HashAlgorithm::Sha256 => (32, 64),
        HashAlgorithm::Sha512 => (64, 128),
        HashAlgorithm::Sha3_256 => (32, 136),
        HashAlgorithm::Sha3_512 => (64, 72),
    };
    DigestDescriptor {
        algorithm,
        name: algorithm.name(),
        digest_size,
        block_size,
    }
}

/// Looks up the parameters of an AES-CBC strength.
pub fn cipher_descriptor(strength: CipherStrength) -> CipherDescriptor {
    let key_size = match strength {
        CipherStrength::Aes128 => 16,
        CipherStrength::Aes256 => 32,
    };
    CipherDescriptor {
        strength,
        name: strength.name(),
        key_size,
        block_size: AES_BLOCK_SIZE,
        iv_size: IV_SIZE,
    }
}
