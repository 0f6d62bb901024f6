//! Cipher primitives and per-message header generation.
//!
//! Both codecs prepend an ephemeral header to the ciphertext: a 16-byte IV
//! for CBC, a 12-byte nonce for GCM. Header bytes are ASCII decimal digits
//! rather than full-entropy bytes. That is the wire format existing blobs
//! use, so it is preserved here as-is; at roughly 3.3 bits of entropy per
//! byte it is weaker than a uniformly random header, and anything that does
//! not need compatibility with already-encoded data should not rely on it.

pub mod cbc;
pub mod gcm;

use crate::errors::CodecError;
use rand::rngs::OsRng;
use rand::Rng;

/// Generate `len` header bytes, each the ASCII code of a digit `0`-`9`
/// drawn uniformly from the OS CSPRNG.
pub fn random_digit_header(len: usize) -> Vec<u8> {
    let mut rng = OsRng;
    (0..len).map(|_| b'0' + rng.gen_range(0..10u8)).collect()
}

/// Reject keys that are not a valid AES key size.
///
/// 16, 24, and 32 bytes select AES-128, AES-192, and AES-256. The key is
/// used as raw key material exactly as supplied; it is never hex-decoded
/// or stretched.
pub fn validate_key(key: &[u8]) -> Result<(), CodecError> {
    match key.len() {
        16 | 24 | 32 => Ok(()),
        n => Err(CodecError::InvalidKeyLength(n)),
    }
}
