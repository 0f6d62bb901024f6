//! The two public codecs. Both run the same pipeline and differ only in
//! cipher mode and header length:
//!
//! encode: compress -> random digit header -> encrypt -> base64(header || ct)
//! decode: base64-split -> decrypt -> decompress -> trim trailing whitespace
//!
//! The codecs are not cross-compatible: each decodes only blobs it produced.
//! Encoding the same payload twice yields different blobs (fresh header per
//! call) that decode identically.

use crate::crypto::{cbc, gcm, random_digit_header, validate_key};
use crate::errors::CodecError;
use crate::{blob, compress};
use tracing::debug;

#[derive(Clone, Copy, Debug)]
enum Mode {
    Cbc,
    Gcm,
}

impl Mode {
    fn header_len(self) -> usize {
        match self {
            Mode::Cbc => cbc::IV_LEN,
            Mode::Gcm => gcm::NONCE_LEN,
        }
    }
}

/// Encode with AES-CBC (PKCS#7 padding, 16-byte IV). Confidentiality only;
/// a CBC blob carries no integrity protection.
pub fn cbc_encode(plaintext: &str, key: &[u8]) -> Result<String, CodecError> {
    encode(Mode::Cbc, plaintext, key)
}

/// Decode a blob produced by [`cbc_encode`].
pub fn cbc_decode(blob: &str, key: &[u8]) -> Result<String, CodecError> {
    decode(Mode::Cbc, blob, key)
}

/// Encode with AES-GCM (128-bit tag, 12-byte nonce). The tag authenticates
/// the payload, so tampering is detected on decode.
pub fn gcm_encode(plaintext: &str, key: &[u8]) -> Result<String, CodecError> {
    encode(Mode::Gcm, plaintext, key)
}

/// Decode and verify a blob produced by [`gcm_encode`].
pub fn gcm_decode(blob: &str, key: &[u8]) -> Result<String, CodecError> {
    decode(Mode::Gcm, blob, key)
}

fn encode(mode: Mode, plaintext: &str, key: &[u8]) -> Result<String, CodecError> {
    // Empty in, empty out. Checked before the key so a no-op stays a no-op.
    if plaintext.is_empty() {
        return Ok(String::new());
    }
    validate_key(key)?;

    let compressed = compress::deflate(plaintext.as_bytes())?;
    let header = random_digit_header(mode.header_len());

    let ciphertext = match mode {
        Mode::Cbc => cbc::encrypt(&compressed, key, &header)?,
        Mode::Gcm => gcm::seal(&compressed, key, &header)?,
    };

    debug!(
        ?mode,
        plaintext_len = plaintext.len(),
        compressed_len = compressed.len(),
        "encoded payload"
    );

    Ok(blob::pack(&header, &ciphertext))
}

fn decode(mode: Mode, blob: &str, key: &[u8]) -> Result<String, CodecError> {
    if blob.is_empty() {
        return Ok(String::new());
    }
    validate_key(key)?;

    let (header, ciphertext) = blob::unpack(blob, mode.header_len())?;

    let compressed = match mode {
        Mode::Cbc => cbc::decrypt(&ciphertext, key, &header)?,
        Mode::Gcm => gcm::open(&ciphertext, key, &header)?,
    };

    let payload = compress::inflate(&compressed)?;
    let text = String::from_utf8(payload)
        .map_err(|_| CodecError::MalformedBlob("decrypted payload is not valid UTF-8".into()))?;

    debug!(?mode, plaintext_len = text.len(), "decoded payload");

    // The original codecs trim the recovered string; kept for parity, so
    // plaintexts with trailing whitespace do not round-trip verbatim.
    Ok(text.trim_end().to_string())
}
