//! The in-memory value model for canonical JSON.

use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a node in a value graph.
///
/// Children are held through `Rc<RefCell<_>>` so a caller can build
/// DAG-shaped graphs (one node reachable via several parents) and, by
/// mistake, cyclic ones. Acyclicity is a property [`crate::json::serialize`]
/// checks by identity at traversal time, not one this type enforces.
pub type ValueRef = Rc<RefCell<Value>>;

/// A host function embedded in a value graph.
///
/// Functions participate in graphs handed around by an embedding layer
/// but have no canonical text form; serializing a graph containing one
/// fails with [`crate::json::SerializeError::UnserializableType`].
pub type NativeFn = Rc<dyn Fn(&[ValueRef]) -> ValueRef>;

/// Representation of possible canonical-JSON values.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<ValueRef>),
    /// Key/value pairs in insertion order. Order is significant: the
    /// canonical text form preserves it, and a parse→serialize round
    /// trip reproduces the source order exactly.
    Object(Vec<(String, ValueRef)>),
    Func(NativeFn),
}

impl Value {
    /// Wrap this value in a fresh shared handle.
    pub fn into_ref(self) -> ValueRef {
        Rc::new(RefCell::new(self))
    }

    /// Build an array value from owned elements.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Value {
        Value::Array(items.into_iter().map(Value::into_ref).collect())
    }

    /// Build an object value from owned key/value pairs, keeping order.
    pub fn object<K: Into<String>>(pairs: impl IntoIterator<Item = (K, Value)>) -> Value {
        Value::Object(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into_ref()))
                .collect(),
        )
    }

    /// Build a host-function value.
    pub fn func(f: impl Fn(&[ValueRef]) -> ValueRef + 'static) -> Value {
        Value::Func(Rc::new(f))
    }

    /// Short name of this value's kind, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Func(_) => "function",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

/// Containers print as their kind and length only. A graph may be cyclic,
/// so `Debug` must not recurse into children.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Array(items) => write!(f, "Array[{}]", items.len()),
            Value::Object(pairs) => write!(f, "Object{{{}}}", pairs.len()),
            Value::Func(_) => f.write_str("Func"),
        }
    }
}
