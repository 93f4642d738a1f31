//! One-shot message digests.

use crate::error::{fail, CryptoResult, FailureStage};
use crate::registry::{digest_descriptor, HashAlgorithm};
use digest::DynDigest;
use tracing::{debug, trace};

/// A digest context owned by a single hash operation.
///
/// Internal state is reset when the context is dropped.
struct DigestContext {
    algorithm: HashAlgorithm,
    inner: Box<dyn DynDigest>,
}

impl DigestContext {
    fn acquire(algorithm: HashAlgorithm) -> Self {
        let inner: Box<dyn DynDigest> = match algorithm {
            HashAlgorithm::Md5 => Box::new(md5::Md5::default()),
            HashAlgorithm::Sha256 => Box::new(sha2::Sha256::default()),
            HashAlgorithm::Sha512 => Box::new(sha2::Sha512::default()),
            HashAlgorithm::Sha3_256 => Box::new(sha3::Sha3_256::default()),
            HashAlgorithm::Sha3_512 => Box::new(sha3::Sha3_512::default()),
        };
        Self { algorithm, inner }
    }

    fn output_size(&self) -> usize {
        self.inner.output_size()
    }

    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), digest::InvalidBufferSize> {
        self.inner.finalize_into_reset(out)
    }
}

impl Drop for DigestContext {
    fn drop(&mut self) {
        self.inner.reset();
        trace!("released {} digest context", self.algorithm);
    }
}

/// Computes the digest of `data` with `algorithm`.
///
/// The output is exactly `digest_size` bytes for the algorithm.
pub fn hash(data: &[u8], algorithm: HashAlgorithm) -> CryptoResult<Vec<u8>> {
    let descriptor = digest_descriptor(algorithm);
    let mut context = DigestContext::acquire(algorithm);

    debug_assert_eq!(context.output_size(), descriptor.digest_size);

    context.update(data);

    let mut digest = vec![0u8; descriptor.digest_size];
    context
        .finalize_into(&mut digest)
        .map_err(|e| fail!(FailureStage::Finalize, "hash", e))?;

    debug!("{} digest over {} bytes", descriptor.name, data.len());
    Ok(digest)
}

/// Like [`hash`], rendered as lowercase hex.
pub fn hash_hex(data: &[u8], algorithm: HashAlgorithm) -> CryptoResult<String> {
    hash(data, algorithm).map(hex::encode)
}
