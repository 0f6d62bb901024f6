//! AES-CBC with PKCS#7 padding (what the JDK calls PKCS5Padding for the
//! 16-byte AES block). CBC provides confidentiality only: there is no
//! integrity protection, by wire-format compatibility. Use the GCM codec
//! when tamper detection matters.

use crate::errors::CodecError;
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::{Aes128, Aes192, Aes256};

/// CBC initialisation vector length: one AES block.
pub const IV_LEN: usize = 16;

type Aes128CbcEnc = ::cbc::Encryptor<Aes128>;
type Aes128CbcDec = ::cbc::Decryptor<Aes128>;
type Aes192CbcEnc = ::cbc::Encryptor<Aes192>;
type Aes192CbcDec = ::cbc::Decryptor<Aes192>;
type Aes256CbcEnc = ::cbc::Encryptor<Aes256>;
type Aes256CbcDec = ::cbc::Decryptor<Aes256>;

/// Encrypt `data` under `key` and `iv`, dispatching on the key length.
pub fn encrypt(data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CodecError> {
    let ciphertext = match key.len() {
        16 => Aes128CbcEnc::new_from_slices(key, iv)
            .map_err(|_| CodecError::InvalidKeyLength(key.len()))?
            .encrypt_padded_vec_mut::<Pkcs7>(data),
        24 => Aes192CbcEnc::new_from_slices(key, iv)
            .map_err(|_| CodecError::InvalidKeyLength(key.len()))?
            .encrypt_padded_vec_mut::<Pkcs7>(data),
        32 => Aes256CbcEnc::new_from_slices(key, iv)
            .map_err(|_| CodecError::InvalidKeyLength(key.len()))?
            .encrypt_padded_vec_mut::<Pkcs7>(data),
        n => return Err(CodecError::InvalidKeyLength(n)),
    };
    Ok(ciphertext)
}

/// Decrypt `data` under `key` and `iv` and strip the PKCS#7 padding.
///
/// # Errors
///
/// Returns [`CodecError::DecryptionFailure`] when the padding does not
/// verify — a corrupt ciphertext, a truncated blob, or a wrong key.
pub fn decrypt(data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CodecError> {
    match key.len() {
        16 => Aes128CbcDec::new_from_slices(key, iv)
            .map_err(|_| CodecError::InvalidKeyLength(key.len()))?
            .decrypt_padded_vec_mut::<Pkcs7>(data)
            .map_err(|_| CodecError::DecryptionFailure),
        24 => Aes192CbcDec::new_from_slices(key, iv)
            .map_err(|_| CodecError::InvalidKeyLength(key.len()))?
            .decrypt_padded_vec_mut::<Pkcs7>(data)
            .map_err(|_| CodecError::DecryptionFailure),
        32 => Aes256CbcDec::new_from_slices(key, iv)
            .map_err(|_| CodecError::InvalidKeyLength(key.len()))?
            .decrypt_padded_vec_mut::<Pkcs7>(data)
            .map_err(|_| CodecError::DecryptionFailure),
        n => Err(CodecError::InvalidKeyLength(n)),
    }
}
