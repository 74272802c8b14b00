//! Canonical JSON value trees.
//!
//! This module defines the in-memory value model ([`Value`]) and its
//! canonical textual form: compact (no insignificant whitespace),
//! order-preserving for object keys, and minimally escaped. The canonical
//! form is a wire-stable format — two equal trees always serialize to the
//! same bytes, and `serialize(deserialize(s)) == s` for any `s` that
//! `serialize` produced.
//!
//! The full JSON grammar is deliberately not covered: exponent number
//! literals, surrogate-pair `\u` escapes and `NaN`/`Infinity` texts are
//! all rejected on input and never produced on output.

pub mod de;
pub mod ser;
pub mod value;

pub use de::deserialize;
pub use ser::serialize;
pub use value::{NativeFn, Value, ValueRef};

/// Error returned by [`serialize`].
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SerializeError {
    /// The value graph contains a node that is (directly or transitively)
    /// its own ancestor.
    #[error("value tree contains a cycle")]
    CyclicStructure,
    /// The tree contains a value with no canonical text form.
    #[error("cannot serialize a {0} value")]
    UnserializableType(&'static str),
}

/// Error returned by [`deserialize`]. Positions are byte offsets into the
/// source text.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input at offset {position}")]
    UnexpectedEnd { position: usize },
    #[error("unexpected character {found:?} at offset {position}")]
    UnexpectedChar { found: char, position: usize },
    #[error("invalid literal at offset {position}")]
    InvalidLiteral { position: usize },
    #[error("unterminated string starting at offset {position}")]
    UnterminatedString { position: usize },
    #[error("invalid escape sequence at offset {position}")]
    InvalidEscape { position: usize },
    #[error("invalid number at offset {position}")]
    InvalidNumber { position: usize },
    #[error("nesting too deep at offset {position}")]
    TooDeep { position: usize },
    #[error("trailing data at offset {position}")]
    TrailingData { position: usize },
}

impl ParseError {
    /// Byte offset the error was detected at.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedEnd { position }
            | ParseError::UnexpectedChar { position, .. }
            | ParseError::InvalidLiteral { position }
            | ParseError::UnterminatedString { position }
            | ParseError::InvalidEscape { position }
            | ParseError::InvalidNumber { position }
            | ParseError::TooDeep { position }
            | ParseError::TrailingData { position } => *position,
        }
    }
}

/// Maximum container nesting accepted by the parser. Input is untrusted;
/// the recursive descent must not be able to exhaust the call stack.
pub const MAX_DEPTH: usize = 512;
