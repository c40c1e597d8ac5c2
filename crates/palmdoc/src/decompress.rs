use crate::buffer::Output;
use crate::error::Result;
use crate::tokens::{Token, tokens};

/// Decompresses a complete PalmDOC stream.
///
/// Fails with [`crate::Error::CorruptStream`] when a token is truncated or a
/// back-reference reaches before the start of the output. Nothing is
/// returned on failure.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Output::with_capacity(data.len().saturating_mul(2))?;

    for token in tokens(data) {
        let (offset, token) = token.inspect_err(|err| {
            tracing::debug!(%err, "rejecting palmdoc stream");
        })?;

        match token {
            Token::Literal(byte) => out.push(byte)?,
            Token::Run(bytes) => out.extend(bytes)?,
            Token::SpacePair(tail) => {
                out.push(b' ')?;
                out.push(tail)?;
            }
            Token::BackReference { distance, length } => {
                out.copy_back(offset, distance, length).inspect_err(|err| {
                    tracing::debug!(%err, "rejecting palmdoc stream");
                })?;
            }
        }
    }

    tracing::debug!(input = data.len(), output = out.len(), "decompressed palmdoc stream");
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Corruption, Error};

    #[test]
    fn test_decompress_literals() {
        assert_eq!(decompress(b"").unwrap(), b"");
        assert_eq!(decompress(b"Hi!").unwrap(), b"Hi!");
        assert_eq!(decompress(&[0x00, b'\t', 0x7F]).unwrap(), [0x00, b'\t', 0x7F]);
    }

    #[test]
    fn test_decompress_run() {
        let stream = [0x03, 0x01, 0x80, 0xFF, b'z'];
        assert_eq!(decompress(&stream).unwrap(), [0x01, 0x80, 0xFF, b'z']);
    }

    #[test]
    fn test_decompress_space_pair() {
        assert_eq!(decompress(&[b'A', b'a', 0xC2, b'b']).unwrap(), b"Aa Bb");
    }

    #[test]
    fn test_decompress_back_reference() {
        // "abc" then copy 3 from 3 back
        assert_eq!(decompress(&[b'a', b'b', b'c', 0x80, 0x18]).unwrap(), b"abcabc");
    }

    #[test]
    fn test_decompress_overlapping_back_reference() {
        assert_eq!(decompress(&[b'a', b'b', 0x80, 0x15]).unwrap(), b"ababababab");
        assert_eq!(decompress(&[b'-', 0x80, 0x0F]).unwrap(), b"-----------");
    }

    #[test]
    fn test_decompress_rejects_distance_past_start() {
        let err = decompress(&[b'a', 0x80, 0x10]).unwrap_err();
        assert_eq!(
            err,
            Error::CorruptStream {
                offset: 1,
                kind: Corruption::DistanceOutOfRange { distance: 2, available: 1 },
            }
        );

        let err = decompress(&[0x80, 0x08]).unwrap_err();
        assert!(err.is_corrupt());
    }

    #[test]
    fn test_decompress_rejects_zero_distance() {
        let err = decompress(&[b'a', b'b', 0x80, 0x00]).unwrap_err();
        assert_eq!(err, Error::CorruptStream { offset: 2, kind: Corruption::ZeroDistance });
    }

    #[test]
    fn test_decompress_rejects_truncated_tokens() {
        let err = decompress(&[b'a', 0x05, 0x90]).unwrap_err();
        assert_eq!(
            err,
            Error::CorruptStream {
                offset: 1,
                kind: Corruption::TruncatedRun { needed: 5, remaining: 1 },
            }
        );

        let err = decompress(&[b'a', b'b', b'c', 0x80]).unwrap_err();
        assert_eq!(err, Error::CorruptStream { offset: 3, kind: Corruption::TruncatedBackReference });
    }
}
