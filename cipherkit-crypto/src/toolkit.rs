//! Configured entry point for callers that select algorithms by number.

use crate::cipher::{self, Sealed};
use crate::config::ToolkitConfig;
use crate::error::CryptoResult;
use crate::hashing;
use crate::key::{Iv, KeyMaterial};
use crate::random;
use crate::registry::{CipherStrength, HashAlgorithm};

/// Holds a [`ToolkitConfig`] and routes calls to the engines.
///
/// Typed calls behave exactly like the crate-level functions. The `*_raw`
/// variants first resolve a numeric selector through the configured
/// [`SelectorPolicy`](crate::SelectorPolicy).
#[derive(Clone, Debug, Default)]
pub struct Toolkit {
    config: ToolkitConfig,
}

impl Toolkit {
    /// Creates a toolkit with the given configuration.
    pub fn new(config: ToolkitConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// Resolves a numeric hash selector through the selector policy.
    pub fn hash_algorithm(&self, selector: u32) -> CryptoResult<HashAlgorithm> {
        HashAlgorithm::from_raw(selector, &self.config.selector_policy)
    }

    /// Resolves a numeric cipher selector through the selector policy.
    pub fn cipher_strength(&self, selector: u32) -> CryptoResult<CipherStrength> {
        CipherStrength::from_raw(selector, &self.config.selector_policy)
    }

    /// Computes the digest of `data`.
    pub fn hash(&self, data: &[u8], algorithm: HashAlgorithm) -> CryptoResult<Vec<u8>> {
        hashing::hash(data, algorithm)
    }

    /// Computes the digest of `data` with a numerically selected algorithm.
    pub fn hash_raw(&self, data: &[u8], selector: u32) -> CryptoResult<Vec<u8>> {
        let algorithm = self.hash_algorithm(selector)?;
        hashing::hash(data, algorithm)
    }

    /// Encrypts `plaintext`, generating any missing key or IV.
    pub fn encrypt(
        &self,
        key: Option<KeyMaterial>,
        iv: Option<Iv>,
        plaintext: &[u8],
        strength: CipherStrength,
    ) -> CryptoResult<Sealed> {
        cipher::encrypt(key, iv, plaintext, strength)
    }

    /// Encrypts with a numerically selected strength.
    pub fn encrypt_raw(
        &self,
        key: Option<KeyMaterial>,
        iv: Option<Iv>,
        plaintext: &[u8],
        selector: u32,
    ) -> CryptoResult<Sealed> {
        let strength = self.cipher_strength(selector)?;
        cipher::encrypt(key, iv, plaintext, strength)
    }

    /// Decrypts `ciphertext` with the key and IV it was sealed with.
    pub fn decrypt(
        &self,
        key: &KeyMaterial,
        iv: &Iv,
        ciphertext: &[u8],
        strength: CipherStrength,
    ) -> CryptoResult<Vec<u8>> {
        cipher::decrypt(key, iv, ciphertext, strength)
    }

    /// Decrypts with a numerically selected strength.
    pub fn decrypt_raw(
        &self,
        key: &KeyMaterial,
        iv: &Iv,
        ciphertext: &[u8],
        selector: u32,
    ) -> CryptoResult<Vec<u8>> {
        let strength = self.cipher_strength(selector)?;
        cipher::decrypt(key, iv, ciphertext, strength)
    }

    /// Returns `count` bytes from the OS generator.
    pub fn generate_random_bytes(&self, count: usize) -> CryptoResult<Vec<u8>> {
        random::generate(count)
    }
}
