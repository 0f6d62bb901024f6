//! Base64 framing of the wire blob: `base64(header || ciphertext)` where
//! `header` is the per-message IV (CBC) or nonce (GCM).
//!
//! Encoding always emits canonical standard-alphabet base64 with padding.
//! Decoding is tolerant of embedded line breaks and of missing padding,
//! matching MIME-style decoders on the other side of the wire.

use crate::errors::CodecError;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::{alphabet, Engine};

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Concatenate `header || ciphertext` and base64-encode the result.
pub fn pack(header: &[u8], ciphertext: &[u8]) -> String {
    let mut raw = Vec::with_capacity(header.len() + ciphertext.len());
    raw.extend_from_slice(header);
    raw.extend_from_slice(ciphertext);
    STANDARD.encode(raw)
}

/// Base64-decode `blob` and split off the first `header_len` bytes.
///
/// # Errors
///
/// Returns [`CodecError::MalformedBlob`] if the base64 is invalid or the
/// decoded payload is shorter than the header it must carry.
pub fn unpack(blob: &str, header_len: usize) -> Result<(Vec<u8>, Vec<u8>), CodecError> {
    // MIME decoders skip line breaks; do the same before strict decoding.
    let cleaned: String = blob.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let raw = LENIENT
        .decode(cleaned.as_bytes())
        .map_err(|e| CodecError::MalformedBlob(format!("base64 decode failed: {e}")))?;

    if raw.len() < header_len {
        return Err(CodecError::MalformedBlob(format!(
            "payload is {} bytes, shorter than its {header_len}-byte header",
            raw.len()
        )));
    }

    let (header, ciphertext) = raw.split_at(header_len);
    Ok((header.to_vec(), ciphertext.to_vec()))
}
