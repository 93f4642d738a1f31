//! Secure random byte generation backed by the operating system CSPRNG.

use crate::error::{fail, CryptoResult, FailureStage};
use rand::rngs::OsRng;
use rand::TryRngCore;
use tracing::trace;
use zeroize::Zeroize;

/// Fills `buf` with bytes from the OS generator.
///
/// On failure the buffer is wiped, so callers never observe a partially
/// random buffer.
pub fn fill(buf: &mut [u8]) -> CryptoResult<()> {
    fill_from(&mut OsRng, buf)
}

/// Returns `byte_count` freshly generated random bytes.
pub fn generate(byte_count: usize) -> CryptoResult<Vec<u8>> {
    let mut bytes = vec![0u8; byte_count];
    fill(&mut bytes)?;
    trace!("generated {byte_count} random bytes");
    Ok(bytes)
}

fn fill_from<R: TryRngCore + ?Sized>(rng: &mut R, buf: &mut [u8]) -> CryptoResult<()> {
    if let Err(e) = rng.try_fill_bytes(buf) {
        buf.zeroize();
        return Err(fail!(FailureStage::Random, "fill", e));
    }
    Ok(())
}
