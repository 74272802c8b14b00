//! Canonical JSON serializer.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use crate::json::SerializeError;
use crate::json::value::{Value, ValueRef};

/// Render a value graph as canonical JSON text.
///
/// The output is compact: no whitespace, object keys in insertion order,
/// strings escaped only where the grammar requires it. Cycles are
/// detected by identity against the chain of containers currently being
/// written, so a node that appears twice via sibling paths (a shared,
/// acyclic reference) serializes normally at each occurrence, while a
/// node that contains itself fails before any unbounded recursion.
///
/// ```
/// use bytekit_core::json::{serialize, Value};
///
/// let tree = Value::array([
///     Value::from(1),
///     Value::from("2"),
///     Value::object([("\n", Value::array([]))]),
///     Value::Null,
///     Value::from(true),
/// ])
/// .into_ref();
/// assert_eq!(serialize(&tree).unwrap(), "[1,\"2\",{\"\\n\":[]},null,true]");
/// ```
pub fn serialize(value: &ValueRef) -> Result<String, SerializeError> {
    let mut out = String::new();
    let mut ancestors: Vec<*const RefCell<Value>> = Vec::new();
    write_value(value, &mut out, &mut ancestors)?;
    Ok(out)
}

fn write_value(
    node: &ValueRef,
    out: &mut String,
    ancestors: &mut Vec<*const RefCell<Value>>,
) -> Result<(), SerializeError> {
    let value = node.borrow();
    match &*value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(*n, out)?,
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            enter(node, ancestors)?;
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out, ancestors)?;
            }
            out.push(']');
            ancestors.pop();
        }
        Value::Object(pairs) => {
            enter(node, ancestors)?;
            out.push('{');
            for (i, (key, item)) in pairs.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(item, out, ancestors)?;
            }
            out.push('}');
            ancestors.pop();
        }
        Value::Func(_) => return Err(SerializeError::UnserializableType("function")),
    }
    Ok(())
}

/// Push a container onto the active ancestor chain, by identity.
fn enter(
    node: &ValueRef,
    ancestors: &mut Vec<*const RefCell<Value>>,
) -> Result<(), SerializeError> {
    let ptr = Rc::as_ptr(node);
    if ancestors.contains(&ptr) {
        return Err(SerializeError::CyclicStructure);
    }
    ancestors.push(ptr);
    Ok(())
}

fn write_number(n: f64, out: &mut String) -> Result<(), SerializeError> {
    if !n.is_finite() {
        return Err(SerializeError::UnserializableType("non-finite number"));
    }
    // f64 `Display` is the shortest decimal form that parses back to the
    // same value, and never uses exponent notation.
    let _ = write!(out, "{n}");
    Ok(())
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ser(value: Value) -> String {
        serialize(&value.into_ref()).unwrap()
    }

    #[test]
    fn test_serialize_scalars() {
        assert_eq!(ser(Value::Null), "null");
        assert_eq!(ser(Value::Bool(true)), "true");
        assert_eq!(ser(Value::Bool(false)), "false");
        assert_eq!(ser(Value::from(1)), "1");
        assert_eq!(ser(Value::from(-2.5)), "-2.5");
        assert_eq!(ser(Value::from(0.1)), "0.1");
        assert_eq!(ser(Value::from("hi")), "\"hi\"");
    }

    #[test]
    fn test_serialize_mixed_tree() {
        let tree = Value::array([
            Value::from(1),
            Value::from("2"),
            Value::object([("\n", Value::array([]))]),
            Value::Null,
            Value::from(true),
        ]);
        assert_eq!(ser(tree), "[1,\"2\",{\"\\n\":[]},null,true]");
    }

    #[test]
    fn test_serialize_string_escapes() {
        assert_eq!(ser(Value::from("a\"b")), "\"a\\\"b\"");
        assert_eq!(ser(Value::from("a\\b")), "\"a\\\\b\"");
        assert_eq!(ser(Value::from("a\nb\tc")), "\"a\\nb\\tc\"");
        assert_eq!(ser(Value::from("\u{8}\u{c}\r")), "\"\\b\\f\\r\"");
        // other control characters use \u00XX, everything else passes through
        assert_eq!(ser(Value::from("\u{1}")), "\"\\u0001\"");
        assert_eq!(ser(Value::from("žšČ")), "\"žšČ\"");
    }

    #[test]
    fn test_serialize_object_key_order() {
        let obj = Value::object([
            ("z", Value::from(1)),
            ("a", Value::from(2)),
            ("z\n", Value::from(3)),
        ]);
        assert_eq!(ser(obj), "{\"z\":1,\"a\":2,\"z\\n\":3}");
    }

    #[test]
    fn test_serialize_empty_containers() {
        assert_eq!(ser(Value::array([])), "[]");
        assert_eq!(ser(Value::object(Vec::<(String, Value)>::new())), "{}");
    }

    #[test]
    fn test_serialize_self_referential_array_fails() {
        let arr = Value::Array(vec![]).into_ref();
        if let Value::Array(items) = &mut *arr.borrow_mut() {
            items.push(arr.clone());
        }
        assert_eq!(
            serialize(&arr).unwrap_err(),
            SerializeError::CyclicStructure
        );
    }

    #[test]
    fn test_serialize_deep_cycle_fails() {
        // outer -> inner object -> outer
        let outer = Value::Array(vec![]).into_ref();
        let inner = Value::Object(vec![("back".to_owned(), outer.clone())]).into_ref();
        if let Value::Array(items) = &mut *outer.borrow_mut() {
            items.push(inner);
        }
        assert_eq!(
            serialize(&outer).unwrap_err(),
            SerializeError::CyclicStructure
        );
    }

    #[test]
    fn test_serialize_shared_node_is_legal() {
        // The same node referenced from two siblings is a DAG, not a cycle.
        let shared = Value::array([Value::from(1)]).into_ref();
        let tree = Value::Array(vec![shared.clone(), shared]).into_ref();
        assert_eq!(serialize(&tree).unwrap(), "[[1],[1]]");
    }

    #[test]
    fn test_serialize_function_fails() {
        let tree = Value::array([Value::func(|_| Value::Null.into_ref())]);
        assert_eq!(
            serialize(&tree.into_ref()).unwrap_err(),
            SerializeError::UnserializableType("function")
        );
    }

    #[test]
    fn test_serialize_non_finite_number_fails() {
        for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                serialize(&Value::from(n).into_ref()).unwrap_err(),
                SerializeError::UnserializableType("non-finite number")
            );
        }
    }

    #[test]
    fn test_serialize_integral_numbers_have_no_fraction() {
        assert_eq!(ser(Value::from(2.0)), "2");
        assert_eq!(ser(Value::from(-0.0)), "-0");
    }
}
