use aespack::errors::CodecError;
use aespack::{cbc_decode, cbc_encode};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

// Raw 32-byte key, used as AES-256 key material as supplied.
const KEY: &[u8] = b"b6c1cd0fe6e55f22fb483096822b5d1c";

#[test]
fn test_reference_payload_round_trip() {
    let plaintext = r#"{"name" : "xin"}"#;
    let blob = cbc_encode(plaintext, KEY).expect("encode should succeed");
    let decoded = cbc_decode(&blob, KEY).expect("decode should succeed");
    assert_eq!(decoded, plaintext, "round trip must restore the payload");
}

#[test]
fn test_round_trip_all_key_lengths() {
    for len in [16, 24, 32] {
        let key = vec![0x5au8; len];
        let blob = cbc_encode("payload for every AES size", &key).unwrap();
        assert_eq!(
            cbc_decode(&blob, &key).unwrap(),
            "payload for every AES size",
            "AES-{} should round trip",
            len * 8
        );
    }
}

#[test]
fn test_multi_kilobyte_round_trip() {
    let plaintext = "a line of sample text that compresses well\n".repeat(200);
    let plaintext = plaintext.trim_end();
    let blob = cbc_encode(plaintext, KEY).unwrap();
    assert_eq!(cbc_decode(&blob, KEY).unwrap(), plaintext);
}

#[test]
fn test_non_ascii_round_trip() {
    let plaintext = "héllo wörld — 世界 🦀";
    let blob = cbc_encode(plaintext, KEY).unwrap();
    assert_eq!(cbc_decode(&blob, KEY).unwrap(), plaintext);
}

#[test]
fn test_blobs_differ_but_decode_identically() {
    let blob1 = cbc_encode("same input", KEY).unwrap();
    let blob2 = cbc_encode("same input", KEY).unwrap();
    assert_ne!(blob1, blob2, "fresh IV must change the blob");
    assert_eq!(cbc_decode(&blob1, KEY).unwrap(), "same input");
    assert_eq!(cbc_decode(&blob2, KEY).unwrap(), "same input");
}

#[test]
fn test_empty_input_is_a_benign_no_op() {
    assert_eq!(cbc_encode("", KEY).unwrap(), "");
    assert_eq!(cbc_decode("", KEY).unwrap(), "");
}

#[test]
fn test_invalid_key_length_rejected() {
    let short_key = [0u8; 15];
    assert!(matches!(
        cbc_encode("data", &short_key),
        Err(CodecError::InvalidKeyLength(15))
    ));
    assert!(matches!(
        cbc_decode("AAAA", &short_key),
        Err(CodecError::InvalidKeyLength(15))
    ));
}

#[test]
fn test_wrong_key_does_not_decode() {
    let blob = cbc_encode("confidential", KEY).unwrap();
    let other_key = b"0123456789abcdef0123456789abcdef";
    let result = cbc_decode(&blob, other_key);
    // No integrity protection in CBC: the failure shows up as bad padding
    // or as a DEFLATE stream that will not inflate.
    assert!(result.is_err(), "wrong key must not yield the plaintext");
}

#[test]
fn test_header_shorter_than_iv_is_malformed() {
    // 10 decoded bytes, less than the 16-byte IV.
    let blob = STANDARD.encode(b"0123456789");
    assert!(matches!(
        cbc_decode(&blob, KEY),
        Err(CodecError::MalformedBlob(_))
    ));
}

#[test]
fn test_invalid_base64_is_malformed() {
    assert!(matches!(
        cbc_decode("@@@not-base64@@@", KEY),
        Err(CodecError::MalformedBlob(_))
    ));
}

#[test]
fn test_blob_with_line_breaks_decodes() {
    let blob = cbc_encode("line break tolerance", KEY).unwrap();
    let mid = blob.len() / 2;
    let wrapped = format!("{}\r\n{}", &blob[..mid], &blob[mid..]);
    assert_eq!(cbc_decode(&wrapped, KEY).unwrap(), "line break tolerance");
}

#[test]
fn test_iv_bytes_are_ascii_digits() {
    let blob = cbc_encode("check the header", KEY).unwrap();
    let raw = STANDARD.decode(&blob).unwrap();
    assert!(raw.len() > 16);
    assert!(
        raw[..16].iter().all(u8::is_ascii_digit),
        "IV must stay digit-only for wire compatibility"
    );
}

#[test]
fn test_corrupted_ciphertext_fails() {
    let blob = cbc_encode("corrupt me", KEY).unwrap();
    let mut raw = STANDARD.decode(&blob).unwrap();
    let last = raw.len() - 1;
    raw[last] ^= 0xff;
    let tampered = STANDARD.encode(&raw);
    assert!(
        cbc_decode(&tampered, KEY).is_err(),
        "flipping padding bytes must not decode cleanly"
    );
}
