//! Strict byte/text codecs used by bytekit.
//!
//! Both codecs in this module are exact inverses on well-formed input and
//! reject everything else. There is no lenient mode: a malformed byte
//! sequence or a bad Base64 string is a [`CodecError`], never a
//! replacement character or a truncated result.

pub mod base64;
pub mod utf8;

/// Error returned by the UTF-8 and Base64 codecs on malformed input.
///
/// Positions are byte offsets into the input that was being decoded.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid utf-8 sequence at byte {position}")]
    Utf8 { position: usize },
    #[error("truncated utf-8 sequence at byte {position}")]
    TruncatedUtf8 { position: usize },
    #[error("invalid base64: {0}")]
    Base64(#[from] data_encoding::DecodeError),
}
