//! Hex digest helpers for checksumming and cache keys.

use md5::Md5;
use sha2::{Digest, Sha256};

/// MD5 of `input`, as 32 lowercase hex characters. Fingerprinting only;
/// MD5 is broken for collision resistance.
pub fn md5_hex(input: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// SHA-256 of `input`, as 64 lowercase hex characters.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
