use crate::errors::CodecError;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Compress `data` into a raw DEFLATE stream (no zlib/gzip framing) at
/// maximum compression.
pub fn deflate(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Inflate a raw DEFLATE stream back to the original bytes.
///
/// Zero-length input returns zero-length output without touching the
/// decoder; inflating an empty stream would otherwise never terminate.
pub fn inflate(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let mut decoder = DeflateDecoder::new(data);
    let mut out = Vec::with_capacity(data.len() * 2);
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_restores_input() {
        let input = b"the quick brown fox jumps over the lazy dog".repeat(64);
        let packed = deflate(&input).unwrap();
        assert!(
            packed.len() < input.len(),
            "repetitive input should shrink"
        );
        assert_eq!(inflate(&packed).unwrap(), input);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(deflate(b"").unwrap().is_empty());
        assert!(inflate(b"").unwrap().is_empty());
    }

    #[test]
    fn single_byte_round_trips() {
        let packed = deflate(b"x").unwrap();
        assert_eq!(inflate(&packed).unwrap(), b"x");
    }

    #[test]
    fn malformed_stream_is_an_error() {
        let result = inflate(&[0xff, 0xff, 0xff, 0xff, 0xff]);
        assert!(
            matches!(result, Err(CodecError::CompressionFailure(_))),
            "garbage must not inflate silently"
        );
    }
}
