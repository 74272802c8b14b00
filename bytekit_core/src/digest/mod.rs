//! Message digests computed by bytekit (MD5, 16 bytes; SHA-1, 20 bytes).
//!
//! Both algorithms are Merkle–Damgård constructions over 512-bit blocks:
//! a fixed-size accumulator state, a compression function applied per
//! block, and a final padded block carrying the message bit length. The
//! digest types render as fixed-length lowercase hex (32 and 40
//! characters) and that rendering is the wire-stable external form.
//!
//! Neither algorithm is collision resistant by modern standards; they are
//! provided for interoperability with formats that require them, not for
//! new security designs.

pub mod md5;
pub mod sha1;
