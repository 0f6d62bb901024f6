//! Reversible payload packing: DEFLATE compression, AES encryption, and
//! base64 framing in one transform.
//!
//! Two codecs share the wire format `base64(header || ciphertext)`:
//!
//! - [`cbc_encode`] / [`cbc_decode`] — AES-CBC-PKCS#7, 16-byte IV header,
//!   no integrity protection.
//! - [`gcm_encode`] / [`gcm_decode`] — AES-GCM with a 128-bit tag, 12-byte
//!   nonce header, tamper detection on decode.
//!
//! The key is caller-supplied raw AES key material (16, 24, or 32 bytes)
//! and is never persisted. Every call is stateless and synchronous; fresh
//! header randomness is drawn per encode.
//!
//! ```
//! use aespack::{gcm_decode, gcm_encode};
//!
//! let key = b"b6c1cd0fe6e55f22fb483096822b5d1c"; // raw 32-byte AES-256 key
//! let blob = gcm_encode(r#"{"name" : "xin"}"#, key).unwrap();
//! assert_eq!(gcm_decode(&blob, key).unwrap(), r#"{"name" : "xin"}"#);
//! ```

pub mod blob;
pub mod codec;
pub mod compress;
pub mod crypto;
pub mod digest;
pub mod errors;

pub use codec::{cbc_decode, cbc_encode, gcm_decode, gcm_encode};
pub use errors::CodecError;
