use thiserror::Error;

/// Failures surfaced by the codec pipeline.
///
/// Empty input is not an error: encoding or decoding a zero-length payload
/// returns an empty string, so callers can distinguish "nothing to do" from
/// genuine failure.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The AES key is the wrong length — must be 16, 24, or 32 bytes.
    #[error("invalid AES key length {0}: expected 16, 24, or 32 bytes")]
    InvalidKeyLength(usize),

    /// The blob is not valid base64, is shorter than its IV/nonce header,
    /// or decompressed to bytes that are not valid UTF-8.
    #[error("malformed blob: {0}")]
    MalformedBlob(String),

    /// CBC decryption produced invalid PKCS#7 padding (corrupt ciphertext
    /// or wrong key).
    #[error("decryption failed: invalid padding or corrupt ciphertext")]
    DecryptionFailure,

    /// The GCM authentication tag did not verify — the blob was tampered
    /// with or the key does not match.
    #[error("authentication failed: GCM tag mismatch")]
    AuthenticationFailure,

    /// AEAD encryption failed. Unreachable with a validated key and a
    /// fresh nonce, kept so no cipher error path is swallowed.
    #[error("encryption failed")]
    EncryptionFailure,

    /// The DEFLATE stream could not be written or read back.
    #[error("compression stream error: {0}")]
    CompressionFailure(#[from] std::io::Error),
}
