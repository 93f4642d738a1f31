//! AES-CBC encryption with PKCS#7 padding.
//!
//! [`encrypt`] generates any key or IV the caller leaves out and hands back
//! the material actually used in [`Sealed`], so a generated key can never be
//! lost. [`decrypt`] requires both.
//!
//! CBC provides confidentiality only. A wrong key or tampered ciphertext is
//! detected only when it happens to break the padding.

use crate::error::{fail, CryptoResult, FailureStage};
use crate::key::{Iv, KeyMaterial};
use crate::registry::{cipher_descriptor, CipherStrength};
use aes::{Aes128, Aes256};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

/// Output of [`encrypt`]: the ciphertext plus the key and IV that produced it.
#[derive(Clone, Debug)]
pub struct Sealed {
    pub key: KeyMaterial,
    pub iv: Iv,
    pub ciphertext: Vec<u8>,
}

/// Encrypts `plaintext` with AES-CBC at the given strength.
///
/// A missing `key` or `iv` is generated from the OS random source. The
/// ciphertext length is the plaintext length rounded up to the next multiple
/// of the block size, with a full padding block when it is already aligned.
pub fn encrypt(
    key: Option<KeyMaterial>,
    iv: Option<Iv>,
    plaintext: &[u8],
    strength: CipherStrength,
) -> CryptoResult<Sealed> {
    let descriptor = cipher_descriptor(strength);

    let key = match key {
        Some(key) => key,
        None => KeyMaterial::generate(strength)?,
    };
    let iv = match iv {
        Some(iv) => iv,
        None => Iv::generate()?,
    };

    let ciphertext = match strength {
        CipherStrength::Aes128 => seal_with::<Aes128>(&key, &iv, plaintext, descriptor.block_size)?,
        CipherStrength::Aes256 => seal_with::<Aes256>(&key, &iv, plaintext, descriptor.block_size)?,
    };

    debug!(
        "{} encrypted {} bytes into {} bytes",
        descriptor.name,
        plaintext.len(),
        ciphertext.len()
    );
    Ok(Sealed {
        key,
        iv,
        ciphertext,
    })
}

/// Decrypts AES-CBC `ciphertext` and strips its PKCS#7 padding.
///
/// Ciphertext that is empty or not a whole number of blocks is rejected
/// before the cipher runs.
pub fn decrypt(
    key: &KeyMaterial,
    iv: &Iv,
    ciphertext: &[u8],
    strength: CipherStrength,
) -> CryptoResult<Vec<u8>> {
    let descriptor = cipher_descriptor(strength);

    if ciphertext.is_empty() || ciphertext.len() % descriptor.block_size != 0 {
        return Err(fail!(
            FailureStage::Input,
            "decrypt",
            format!(
                "ciphertext length {} is not a positive multiple of the {}-byte block size",
                ciphertext.len(),
                descriptor.block_size
            )
        ));
    }

    let plaintext = match strength {
        CipherStrength::Aes128 => open_with::<Aes128>(key, iv, ciphertext)?,
        CipherStrength::Aes256 => open_with::<Aes256>(key, iv, ciphertext)?,
    };

    debug!(
        "{} decrypted {} bytes into {} bytes",
        descriptor.name,
        ciphertext.len(),
        plaintext.len()
    );
    Ok(plaintext)
}

fn seal_with<C>(
    key: &KeyMaterial,
    iv: &Iv,
    plaintext: &[u8],
    block_size: usize,
) -> CryptoResult<Vec<u8>>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    // Consumed by the padded encryption below, so it cannot outlive this call.
    let context = cbc::Encryptor::<C>::new_from_slices(key.as_bytes(), iv.as_bytes())
        .map_err(|e| fail!(FailureStage::Init, "encrypt", e))?;

    let len = plaintext.len();
    let mut out = vec![0u8; len + block_size];
    out[..len].copy_from_slice(plaintext);

    let written = context
        .encrypt_padded_mut::<Pkcs7>(&mut out, len)
        .map(|ciphertext| ciphertext.len());
    let written = match written {
        Ok(written) => written,
        Err(e) => {
            out.zeroize();
            return Err(fail!(FailureStage::Finalize, "encrypt", e));
        }
    };

    out.truncate(written);
    Ok(out)
}

fn open_with<C>(key: &KeyMaterial, iv: &Iv, ciphertext: &[u8]) -> CryptoResult<Vec<u8>>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    let context = cbc::Decryptor::<C>::new_from_slices(key.as_bytes(), iv.as_bytes())
        .map_err(|e| fail!(FailureStage::Init, "decrypt", e))?;

    // Wiped on drop if unpadding fails.
    let mut out = Zeroizing::new(ciphertext.to_vec());
    let recovered = context
        .decrypt_padded_mut::<Pkcs7>(out.as_mut_slice())
        .map(|plaintext| plaintext.len())
        .map_err(|e| fail!(FailureStage::Finalize, "decrypt", e))?;

    let mut plaintext = std::mem::take(&mut *out);
    plaintext.truncate(recovered);
    Ok(plaintext)
}
