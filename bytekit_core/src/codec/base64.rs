//! Base64 codec (RFC 4648, standard alphabet, padded).
//!
//! Three input bytes map to four output characters; the final partial
//! group is padded with `=` so encoded text is always a multiple of four
//! characters. Decoding is strict: invalid characters, wrong padding
//! length and non-canonical trailing bits are all rejected.

use crate::codec::CodecError;
use data_encoding::BASE64;

/// Encode a byte sequence as padded Base64 text.
///
/// ```
/// use bytekit_core::codec::base64;
///
/// assert_eq!(base64::encode(b"hello"), "aGVsbG8=");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode padded Base64 text back into bytes.
///
/// The error carries the offset of the offending character or the
/// position where the padding went wrong.
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    Ok(BASE64.decode(text.as_bytes())?)
}
