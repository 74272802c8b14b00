//! UTF-8 text codec.
//!
//! `encode` maps a Unicode string to its UTF-8 byte sequence; `decode` is
//! the strict inverse. Decoding distinguishes an interior invalid
//! sequence from a multi-byte sequence truncated at end of input, and
//! reports the byte offset of the failure in both cases.

use crate::codec::CodecError;

/// Encode a string as its UTF-8 byte sequence.
///
/// Each Unicode scalar value becomes 1–4 bytes depending on its range.
/// The transform is total: every Rust string has a UTF-8 encoding.
pub fn encode(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decode a UTF-8 byte sequence into a string.
///
/// Fails on invalid continuation bytes, overlong encodings and other
/// interior malformations with [`CodecError::Utf8`], and on a multi-byte
/// sequence cut off by end of input with [`CodecError::TruncatedUtf8`].
///
/// ```
/// use bytekit_core::codec::utf8;
///
/// let bytes = utf8::encode("žšČ");
/// assert_eq!(bytes, [197, 190, 197, 161, 196, 140]);
/// assert_eq!(utf8::decode(&bytes).unwrap(), "žšČ");
/// ```
pub fn decode(bytes: &[u8]) -> Result<String, CodecError> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_owned()),
        Err(e) => {
            let position = e.valid_up_to();
            match e.error_len() {
                Some(_) => Err(CodecError::Utf8 { position }),
                None => Err(CodecError::TruncatedUtf8 { position }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ascii() {
        assert_eq!(encode("hello"), b"hello");
    }

    #[test]
    fn test_encode_two_byte_sequences() {
        // "žšČ" encodes as three 2-byte sequences
        assert_eq!(encode("žšČ"), [197, 190, 197, 161, 196, 140]);
    }

    #[test]
    fn test_encode_covers_all_lengths() {
        // 1, 2, 3 and 4 byte encodings
        assert_eq!(encode("a").len(), 1);
        assert_eq!(encode("ž").len(), 2);
        assert_eq!(encode("\u{20ac}").len(), 3);
        assert_eq!(encode("\u{1f600}").len(), 4);
    }

    #[test]
    fn test_decode_roundtrip() {
        for s in ["", "hello", "žšČ", "a\u{20ac}b\u{1f600}c", "\0"] {
            assert_eq!(decode(&encode(s)).unwrap(), s);
        }
    }

    #[test]
    fn test_decode_invalid_continuation() {
        // 0xc5 expects a continuation byte, 0x20 is not one
        let err = decode(&[b'a', 0xc5, 0x20]).unwrap_err();
        assert_eq!(err, CodecError::Utf8 { position: 1 });
    }

    #[test]
    fn test_decode_bare_continuation_byte() {
        let err = decode(&[0x80]).unwrap_err();
        assert_eq!(err, CodecError::Utf8 { position: 0 });
    }

    #[test]
    fn test_decode_truncated_sequence() {
        // first two bytes of the 3-byte euro sign encoding
        let err = decode(&[b'x', 0xe2, 0x82]).unwrap_err();
        assert_eq!(err, CodecError::TruncatedUtf8 { position: 1 });
    }

    #[test]
    fn test_decode_overlong_encoding_rejected() {
        // 0xc0 0xaf is an overlong encoding of '/'
        let err = decode(&[0xc0, 0xaf]).unwrap_err();
        assert_eq!(err, CodecError::Utf8 { position: 0 });
    }
}
