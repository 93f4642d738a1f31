//! Cryptographic primitives for cipherkit.
//!
//! Provides whole-buffer operations over:
//! - Message digests: MD5, SHA-256, SHA-512, SHA3-256, SHA3-512
//! - AES-CBC (128 or 256 bit) with PKCS#7 padding
//! - Secure random bytes from the operating system
//!
//! # Failures
//!
//! Every operation returns [`CryptoResult`]. A [`CryptoFailure`] carries the
//! underlying primitive's error text (or `"No error"`), the failing stage,
//! the originating function and its source location. Nothing is retried and
//! nothing panics.
//!
//! # Key handling
//!
//! [`encrypt`] generates a key and IV when the caller does not supply them
//! and always returns the material it used in [`Sealed`]. Keys are zeroized
//! on drop. [`extract_and_erase`] moves sensitive bytes out of a buffer and
//! wipes the source range.
//!
//! Every operation owns its own context and releases it before returning,
//! so calls from different threads do not interfere.

mod buffer;
mod cipher;
mod config;
mod error;
mod hashing;
mod key;
mod random;
mod registry;
mod toolkit;

pub use buffer::{extract, extract_and_erase};
pub use cipher::{decrypt, encrypt, Sealed};
pub use config::{ConfigError, SelectorPolicy, ToolkitConfig};
pub use error::{report, CryptoFailure, CryptoResult, FailureStage, ERROR_TEXT_LIMIT, NO_ERROR};
pub use hashing::{hash, hash_hex};
pub use key::{Iv, KeyMaterial};
pub use random::{fill as fill_random, generate as generate_random_bytes};
pub use registry::{
    cipher_descriptor, digest_descriptor, CipherDescriptor, CipherStrength, DigestDescriptor,
    HashAlgorithm, AES_BLOCK_SIZE, IV_SIZE,
};
pub use toolkit::Toolkit;
