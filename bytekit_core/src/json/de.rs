//! Canonical JSON parser.

use crate::json::value::{Value, ValueRef};
use crate::json::{MAX_DEPTH, ParseError};

/// Parse canonical JSON text into a fresh value tree.
///
/// Object key order is preserved as encountered in the source, so
/// re-serializing the result reproduces the input byte for byte (for
/// input that was itself canonical). Insignificant whitespace between
/// tokens is accepted; anything else non-canonical is a [`ParseError`]
/// carrying the byte offset of the failure.
pub fn deserialize(text: &str) -> Result<ValueRef, ParseError> {
    let mut parser = Parser { text, pos: 0 };
    parser.skip_whitespace();
    let value = parser.parse_value(0)?;
    parser.skip_whitespace();
    if parser.pos < parser.text.len() {
        return Err(ParseError::TrailingData {
            position: parser.pos,
        });
    }
    Ok(value)
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// The full character at the current position, for error reporting.
    /// The parser only stops at token boundaries, which are always char
    /// boundaries.
    fn peek_char(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn unexpected(&self) -> ParseError {
        match self.peek_char() {
            Some(found) => ParseError::UnexpectedChar {
                found,
                position: self.pos,
            },
            None => ParseError::UnexpectedEnd { position: self.pos },
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<ValueRef, ParseError> {
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { position: self.pos });
        }
        let value = match self.peek() {
            Some(b'n') => self.parse_literal("null", Value::Null)?,
            Some(b't') => self.parse_literal("true", Value::Bool(true))?,
            Some(b'f') => self.parse_literal("false", Value::Bool(false))?,
            Some(b'"') => Value::String(self.parse_string()?),
            Some(b'[') => self.parse_array(depth)?,
            Some(b'{') => self.parse_object(depth)?,
            Some(b'-' | b'0'..=b'9') => Value::Number(self.parse_number()?),
            _ => return Err(self.unexpected()),
        };
        Ok(value.into_ref())
    }

    fn parse_literal(&mut self, literal: &str, value: Value) -> Result<Value, ParseError> {
        if self.text[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(ParseError::InvalidLiteral { position: self.pos })
        }
    }

    fn parse_number(&mut self) -> Result<f64, ParseError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        if self.eat_digits() == 0 {
            return Err(ParseError::InvalidNumber { position: start });
        }
        if self.peek() == Some(b'.') {
            self.pos += 1;
            if self.eat_digits() == 0 {
                return Err(ParseError::InvalidNumber { position: start });
            }
        }
        self.text[start..self.pos]
            .parse()
            .map_err(|_| ParseError::InvalidNumber { position: start })
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Parse a double-quoted string, `pos` at the opening quote.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        self.pos += 1;
        let mut out = String::new();
        loop {
            let Some(b) = self.peek() else {
                return Err(ParseError::UnterminatedString { position: start });
            };
            match b {
                b'"' => {
                    self.pos += 1;
                    return Ok(out);
                }
                b'\\' => self.parse_escape(start, &mut out)?,
                // Raw control characters are not valid string content.
                0x00..=0x1f => {
                    return Err(ParseError::UnexpectedChar {
                        found: b as char,
                        position: self.pos,
                    });
                }
                0x20..=0x7f => {
                    out.push(b as char);
                    self.pos += 1;
                }
                _ => {
                    // Multi-byte character, copied through whole.
                    let ch = self.text[self.pos..].chars().next().expect("char boundary");
                    out.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }
    }

    /// Parse one escape sequence, `pos` at the backslash.
    fn parse_escape(&mut self, string_start: usize, out: &mut String) -> Result<(), ParseError> {
        let esc_start = self.pos;
        self.pos += 1;
        let Some(e) = self.peek() else {
            return Err(ParseError::UnterminatedString {
                position: string_start,
            });
        };
        self.pos += 1;
        match e {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'b' => out.push('\u{8}'),
            b'f' => out.push('\u{c}'),
            b'u' => {
                let mut code: u32 = 0;
                for _ in 0..4 {
                    let digit = self
                        .peek()
                        .and_then(|b| (b as char).to_digit(16))
                        .ok_or(ParseError::InvalidEscape {
                            position: esc_start,
                        })?;
                    code = code * 16 + digit;
                    self.pos += 1;
                }
                // from_u32 rejects surrogate code units, which keeps
                // surrogate-pair escapes out of scope.
                let ch = char::from_u32(code).ok_or(ParseError::InvalidEscape {
                    position: esc_start,
                })?;
                out.push(ch);
            }
            _ => {
                return Err(ParseError::InvalidEscape {
                    position: esc_start,
                });
            }
        }
        Ok(())
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.pos += 1;
        self.skip_whitespace();
        let mut items = Vec::new();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Value::Array(items));
        }
        loop {
            items.push(self.parse_value(depth + 1)?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Value::Array(items));
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.pos += 1;
        self.skip_whitespace();
        let mut pairs = Vec::new();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Value::Object(pairs));
        }
        loop {
            if self.peek() != Some(b'"') {
                return Err(self.unexpected());
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.unexpected());
            }
            self.pos += 1;
            self.skip_whitespace();
            pairs.push((key, self.parse_value(depth + 1)?));
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Value::Object(pairs));
                }
                _ => return Err(self.unexpected()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::serialize;

    /// Parse and canonically re-serialize.
    fn roundtrip(text: &str) -> String {
        serialize(&deserialize(text).unwrap()).unwrap()
    }

    #[test]
    fn test_deserialize_scalars() {
        assert!(matches!(&*deserialize("null").unwrap().borrow(), Value::Null));
        assert!(matches!(
            &*deserialize("true").unwrap().borrow(),
            Value::Bool(true)
        ));
        assert!(matches!(
            &*deserialize("false").unwrap().borrow(),
            Value::Bool(false)
        ));
        assert!(
            matches!(&*deserialize("-2.5").unwrap().borrow(), Value::Number(n) if *n == -2.5)
        );
        assert!(
            matches!(&*deserialize("\"hi\"").unwrap().borrow(), Value::String(s) if s == "hi")
        );
    }

    #[test]
    fn test_deserialize_canonical_vector() {
        let text = "[1,\"2\",{\"\\n\":[]},null,true]";
        assert_eq!(roundtrip(text), text);
    }

    #[test]
    fn test_deserialize_preserves_key_order() {
        let text = "{\"z\":1,\"a\":2,\"\\n\":3}";
        assert_eq!(roundtrip(text), text);
    }

    #[test]
    fn test_deserialize_accepts_whitespace() {
        assert_eq!(roundtrip(" [ 1 , {\n\"a\" : null } ]\t"), "[1,{\"a\":null}]");
    }

    #[test]
    fn test_deserialize_escapes() {
        let parsed = deserialize("\"a\\n\\\"\\\\\\/\\u0041\\u00e9\"").unwrap();
        assert!(matches!(
            &*parsed.borrow(),
            Value::String(s) if s == "a\n\"\\/Aé"
        ));
    }

    #[test]
    fn test_deserialize_non_ascii_passthrough() {
        assert_eq!(roundtrip("\"žšČ\""), "\"žšČ\"");
    }

    #[test]
    fn test_deserialize_empty_input() {
        assert_eq!(
            deserialize("").unwrap_err(),
            ParseError::UnexpectedEnd { position: 0 }
        );
        assert_eq!(
            deserialize("   ").unwrap_err(),
            ParseError::UnexpectedEnd { position: 3 }
        );
    }

    #[test]
    fn test_deserialize_invalid_literal() {
        assert_eq!(
            deserialize("nul").unwrap_err(),
            ParseError::InvalidLiteral { position: 0 }
        );
        assert_eq!(
            deserialize("[truthy]").unwrap_err(),
            ParseError::InvalidLiteral { position: 1 }
        );
    }

    #[test]
    fn test_deserialize_unterminated_string() {
        assert_eq!(
            deserialize("\"abc").unwrap_err(),
            ParseError::UnterminatedString { position: 0 }
        );
        assert_eq!(
            deserialize("[\"abc]").unwrap_err(),
            ParseError::UnterminatedString { position: 1 }
        );
    }

    #[test]
    fn test_deserialize_invalid_escape() {
        assert_eq!(
            deserialize("\"\\x\"").unwrap_err(),
            ParseError::InvalidEscape { position: 1 }
        );
        assert_eq!(
            deserialize("\"\\u12\"").unwrap_err(),
            ParseError::InvalidEscape { position: 1 }
        );
        // surrogate code unit
        assert_eq!(
            deserialize("\"\\ud800\"").unwrap_err(),
            ParseError::InvalidEscape { position: 1 }
        );
    }

    #[test]
    fn test_deserialize_raw_control_char_in_string() {
        assert_eq!(
            deserialize("\"a\nb\"").unwrap_err(),
            ParseError::UnexpectedChar {
                found: '\n',
                position: 2
            }
        );
    }

    #[test]
    fn test_deserialize_invalid_number() {
        assert_eq!(
            deserialize("-").unwrap_err(),
            ParseError::InvalidNumber { position: 0 }
        );
        assert_eq!(
            deserialize("1.").unwrap_err(),
            ParseError::InvalidNumber { position: 0 }
        );
    }

    #[test]
    fn test_deserialize_unbalanced_brackets() {
        assert_eq!(
            deserialize("[1,2").unwrap_err(),
            ParseError::UnexpectedEnd { position: 4 }
        );
        assert_eq!(
            deserialize("{\"a\":1").unwrap_err(),
            ParseError::UnexpectedEnd { position: 6 }
        );
    }

    #[test]
    fn test_deserialize_trailing_data() {
        assert_eq!(
            deserialize("null null").unwrap_err(),
            ParseError::TrailingData { position: 5 }
        );
        assert_eq!(
            deserialize("[]x").unwrap_err(),
            ParseError::TrailingData { position: 2 }
        );
    }

    #[test]
    fn test_deserialize_missing_colon_and_key() {
        assert_eq!(
            deserialize("{\"a\" 1}").unwrap_err(),
            ParseError::UnexpectedChar {
                found: '1',
                position: 5
            }
        );
        assert_eq!(
            deserialize("{1:2}").unwrap_err(),
            ParseError::UnexpectedChar {
                found: '1',
                position: 1
            }
        );
    }

    #[test]
    fn test_deserialize_depth_limit() {
        let deep = "[".repeat(MAX_DEPTH + 2);
        assert!(matches!(
            deserialize(&deep).unwrap_err(),
            ParseError::TooDeep { .. }
        ));
        // one level short of the limit still parses (once closed)
        let ok = format!("{}{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
        assert!(deserialize(&ok).is_ok());
    }

    #[test]
    fn test_deserialize_position_accessor() {
        let err = deserialize("[]x").unwrap_err();
        assert_eq!(err.position(), 2);
    }
}
