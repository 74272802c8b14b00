//! Core bytekit transforms.
//!
//! This crate defines the encoding, digest and serialization primitives
//! shared by all bytekit crates.
//!
//! ## Wire-stable formats
//!
//! The following modules define textual formats that are intended to be
//! stable:
//!
//! - Digest hex renderings (`digest::Md5`, `digest::Sha1`) — fixed-length
//!   lowercase hex, 32 and 40 characters respectively
//! - Base64 text (`codec::base64`) — RFC 4648 standard alphabet, padded
//! - Canonical JSON (`json::serialize`) — compact, order-preserving,
//!   minimally escaped
//!
//! These formats are compared byte-for-byte by downstream consumers;
//! changes to them are considered format changes.
//!
//! ## Behavior
//!
//! Every operation in this crate is a pure, synchronous transform over its
//! own input and output buffers. Nothing blocks, suspends or touches
//! shared state, so concurrent callers need no coordination. Malformed
//! input is always a returned error, never a panic and never a lossy
//! recovery.

pub mod codec;
pub mod digest;
pub mod json;

// --- Core Public Surface ---

pub use codec::CodecError;

pub use digest::md5::{Md5, Md5Hasher};
pub use digest::sha1::{Sha1, Sha1Hasher};

pub use json::value::{NativeFn, Value, ValueRef};
pub use json::{ParseError, SerializeError, deserialize, serialize};
