//! AES-GCM with a 128-bit authentication tag and no associated data.
//! The tag covers the compressed payload; the nonce is bound implicitly,
//! since verification only succeeds with the nonce that sealed the data.

use crate::errors::CodecError;
use aes::Aes192;
use aes_gcm::aead::consts::U12;
use aes_gcm::aead::Aead;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm, KeyInit, Nonce};
use tracing::warn;

/// GCM nonce length: 96 bits, the standard GCM nonce size.
pub const NONCE_LEN: usize = 12;

// aes-gcm only aliases the 128- and 256-bit variants.
type Aes192Gcm = AesGcm<Aes192, U12>;

/// Encrypt `data` under `key` and `nonce`, appending the 16-byte tag.
pub fn seal(data: &[u8], key: &[u8], nonce: &[u8]) -> Result<Vec<u8>, CodecError> {
    let nonce = Nonce::from_slice(nonce);
    match key.len() {
        16 => Aes128Gcm::new_from_slice(key)
            .map_err(|_| CodecError::InvalidKeyLength(key.len()))?
            .encrypt(nonce, data)
            .map_err(|_| CodecError::EncryptionFailure),
        24 => Aes192Gcm::new_from_slice(key)
            .map_err(|_| CodecError::InvalidKeyLength(key.len()))?
            .encrypt(nonce, data)
            .map_err(|_| CodecError::EncryptionFailure),
        32 => Aes256Gcm::new_from_slice(key)
            .map_err(|_| CodecError::InvalidKeyLength(key.len()))?
            .encrypt(nonce, data)
            .map_err(|_| CodecError::EncryptionFailure),
        n => Err(CodecError::InvalidKeyLength(n)),
    }
}

/// Decrypt `data` (ciphertext plus trailing tag) under `key` and `nonce`.
///
/// # Errors
///
/// Returns [`CodecError::AuthenticationFailure`] when the tag does not
/// verify: the blob was tampered with, truncated, or sealed under a
/// different key or nonce.
pub fn open(data: &[u8], key: &[u8], nonce: &[u8]) -> Result<Vec<u8>, CodecError> {
    let nonce = Nonce::from_slice(nonce);
    let opened = match key.len() {
        16 => Aes128Gcm::new_from_slice(key)
            .map_err(|_| CodecError::InvalidKeyLength(key.len()))?
            .decrypt(nonce, data),
        24 => Aes192Gcm::new_from_slice(key)
            .map_err(|_| CodecError::InvalidKeyLength(key.len()))?
            .decrypt(nonce, data),
        32 => Aes256Gcm::new_from_slice(key)
            .map_err(|_| CodecError::InvalidKeyLength(key.len()))?
            .decrypt(nonce, data),
        n => return Err(CodecError::InvalidKeyLength(n)),
    };

    opened.map_err(|_| {
        warn!("GCM tag verification failed");
        CodecError::AuthenticationFailure
    })
}
