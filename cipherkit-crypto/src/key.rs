//! Key and IV material for AES-CBC.

use crate::error::{fail, CryptoResult, FailureStage};
use crate::random;
use crate::registry::{cipher_descriptor, CipherStrength, IV_SIZE};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Symmetric key bytes.
///
/// Zeroized on drop and redacted in `Debug`. The length is checked against
/// the cipher strength when the key is used, not when it is constructed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    bytes: Vec<u8>,
}

impl KeyMaterial {
    /// Takes ownership of existing key bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Copies key bytes from a slice.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Generates a random key of the exact size `strength` requires.
    pub fn generate(strength: CipherStrength) -> CryptoResult<Self> {
        let key_size = cipher_descriptor(strength).key_size;
        Ok(Self {
            bytes: random::generate(key_size)?,
        })
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the key has no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyMaterial([REDACTED; {} bytes])", self.bytes.len())
    }
}

/// A 16-byte CBC initialization vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct Iv([u8; IV_SIZE]);

impl Iv {
    /// Wraps a fixed 16-byte IV.
    pub fn from_bytes(bytes: [u8; IV_SIZE]) -> Self {
        Self(bytes)
    }

    /// Builds an IV from a slice that must be exactly [`IV_SIZE`] bytes.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        let array: [u8; IV_SIZE] = bytes.try_into().map_err(|_| {
            fail!(
                FailureStage::Input,
                "Iv::from_slice",
                format!("IV must be {IV_SIZE} bytes, got {}", bytes.len())
            )
        })?;
        Ok(Self(array))
    }

    /// Generates a random IV from the OS generator.
    pub fn generate() -> CryptoResult<Self> {
        let mut bytes = [0u8; IV_SIZE];
        random::fill(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Returns the raw IV bytes.
    pub fn as_bytes(&self) -> &[u8; IV_SIZE] {
        &self.0
    }
}
