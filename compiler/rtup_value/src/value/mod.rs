//! Runtime values stored in record slots.
//!
//! # Arc Enforcement
//!
//! All heap payloads go through `Heap<T>`, whose constructor is private to
//! this module. Build heap values with the factory methods:
//!
//! ```text
//! let s = Value::string("hello");        // OK
//! let list = Value::list(vec![]);        // OK
//! let s = Value::Str(Heap::new(...));    // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Equality
//!
//! Values compare structurally. A `Record` follows plain-tuple semantics:
//! it equals any `Tuple` or `Record` holding the same values in the same
//! order, and hashes identically to that tuple.

mod heap;

use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

pub use heap::Heap;

use crate::Record;

/// Native callable signature.
///
/// Used for mapping constructors registered at startup.
pub type FunctionValFn = fn(&[Value]) -> Result<Value, String>;

/// An opaque runtime value.
#[derive(Clone)]
pub enum Value {
    // Primitives (inline, no heap allocation)
    None,
    Bool(bool),
    Int(i64),
    Float(f64),

    // Heap Types (use Heap<T> for enforced Arc usage)
    /// Text string.
    Str(Heap<String>),
    /// Byte string.
    Bytes(Heap<Vec<u8>>),
    /// Mutable-sequence stand-in; never mutated once built.
    List(Heap<Vec<Value>>),
    /// Plain tuple.
    Tuple(Heap<Vec<Value>>),
    /// Unordered string-keyed mapping.
    Map(Heap<FxHashMap<String, Value>>),
    /// Insertion-ordered string-keyed mapping.
    OrderedMap(Heap<Vec<(String, Value)>>),

    // Composite Types
    /// Instance of a generated record type.
    Record(Record),
    /// Native callable, with its display name.
    FunctionVal(FunctionValFn, &'static str),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(Heap::new(b.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    #[inline]
    pub fn map(entries: FxHashMap<String, Value>) -> Self {
        Value::Map(Heap::new(entries))
    }

    /// Create an ordered mapping. Pairs keep their given order.
    #[inline]
    pub fn ordered_map(pairs: Vec<(String, Value)>) -> Self {
        Value::OrderedMap(Heap::new(pairs))
    }

    /// A two-element `(key, value)` tuple.
    pub fn pair(key: impl Into<String>, value: Value) -> Self {
        Value::tuple(vec![Value::string(key), value])
    }
}

// Accessors

impl Value {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Items of a list, tuple, or record.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Tuple(items) => Some(items.as_slice()),
            Value::Record(r) => Some(r.as_slice()),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Look up a key in either mapping flavor.
    pub fn map_get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(key),
            Value::OrderedMap(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Host-style type name. Records report their generated type's name.
    pub fn type_name(&self) -> &str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Map(_) => "dict",
            Value::OrderedMap(_) => "OrderedDict",
            Value::Record(r) => r.record_type().name(),
            Value::FunctionVal(..) => "builtin_function",
        }
    }

    /// Host-style representation, e.g. `'text'`, `None`, `Point(x=1, y=2)`.
    pub fn repr(&self) -> String {
        Repr(self).to_string()
    }
}

// Representation

/// Display adapter writing a value's representation.
#[derive(Clone, Copy)]
pub struct Repr<'a>(pub &'a Value);

impl fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::None => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) if x.is_nan() => f.write_str("nan"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => write_quoted(f, s),
            Value::Bytes(b) => write_bytes(f, b),
            Value::List(items) => {
                f.write_str("[")?;
                write_items(f, items)?;
                f.write_str("]")
            }
            Value::Tuple(items) => {
                f.write_str("(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Value::Map(map) => {
                // Sorted so the output is stable
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();
                f.write_str("{")?;
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(f, key)?;
                    f.write_str(": ")?;
                    if let Some(value) = map.get(key) {
                        write!(f, "{}", Repr(value))?;
                    }
                }
                f.write_str("}")
            }
            Value::OrderedMap(pairs) => {
                f.write_str("OrderedDict([")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str("(")?;
                    write_quoted(f, key)?;
                    write!(f, ", {})", Repr(value))?;
                }
                f.write_str("])")
            }
            Value::Record(r) => write!(f, "{r}"),
            Value::FunctionVal(_, name) => write!(f, "<built-in function {name}>"),
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", Repr(item))?;
    }
    Ok(())
}

/// Quote with `'` unless the text contains `'` and no `"`.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    write!(f, "{quote}")?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{c}")?,
            c if c.is_control() => write!(f, "\\x{:02x}", u32::from(c))?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "{quote}")
}

fn write_bytes(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str("b'")?;
    for &b in bytes {
        match b {
            b'\\' => f.write_str("\\\\")?,
            b'\'' => f.write_str("\\'")?,
            b'\n' => f.write_str("\\n")?,
            b'\r' => f.write_str("\\r")?,
            b'\t' => f.write_str("\\t")?,
            0x20..=0x7e => write!(f, "{}", char::from(b))?,
            _ => write!(f, "\\x{b:02x}")?,
        }
    }
    f.write_str("'")
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Bytes(b) => write!(f, "Bytes({:?})", &**b),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Tuple(items) => write!(f, "Tuple({:?})", &**items),
            Value::Map(map) => write!(f, "Map({:?})", &**map),
            Value::OrderedMap(pairs) => write!(f, "OrderedMap({:?})", &**pairs),
            Value::Record(r) => write!(f, "Record({r:?})"),
            Value::FunctionVal(_, name) => write!(f, "FunctionVal({name})"),
        }
    }
}

/// Strings display as their raw text; everything else as its repr.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            other => write!(f, "{}", Repr(other)),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            // Records compare as plain tuples; the type tag does not participate
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a.as_slice() == b.as_slice(),
            (Value::Record(r), Value::Tuple(t)) | (Value::Tuple(t), Value::Record(r)) => {
                r.as_slice() == t.as_slice()
            }
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::OrderedMap(a), Value::OrderedMap(b)) => a == b,
            (Value::Map(m), Value::OrderedMap(pairs)) | (Value::OrderedMap(pairs), Value::Map(m)) => {
                m.len() == pairs.len() && pairs.iter().all(|(k, v)| m.get(k) == Some(v))
            }
            (Value::FunctionVal(_, a), Value::FunctionVal(_, b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

/// Hash class shared by values that can compare equal across variants.
#[derive(Hash)]
enum HashTag {
    None,
    Bool,
    Int,
    Float,
    Str,
    Bytes,
    List,
    Tuple,
    Mapping,
    Function,
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::None => HashTag::None.hash(state),
            Value::Bool(b) => {
                HashTag::Bool.hash(state);
                b.hash(state);
            }
            Value::Int(n) => {
                HashTag::Int.hash(state);
                n.hash(state);
            }
            Value::Float(x) => {
                HashTag::Float.hash(state);
                x.to_bits().hash(state);
            }
            Value::Str(s) => {
                HashTag::Str.hash(state);
                s.hash(state);
            }
            Value::Bytes(b) => {
                HashTag::Bytes.hash(state);
                b.hash(state);
            }
            Value::List(items) => {
                HashTag::List.hash(state);
                items.hash(state);
            }
            Value::Tuple(items) => {
                HashTag::Tuple.hash(state);
                items.as_slice().hash(state);
            }
            Value::Record(r) => {
                HashTag::Tuple.hash(state);
                r.as_slice().hash(state);
            }
            Value::Map(map) => {
                HashTag::Mapping.hash(state);
                let mut entries: Vec<(&String, &Value)> = map.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                hash_entries(&entries, state);
            }
            Value::OrderedMap(pairs) => {
                HashTag::Mapping.hash(state);
                let mut entries: Vec<(&String, &Value)> = pairs.iter().map(|(k, v)| (k, v)).collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                hash_entries(&entries, state);
            }
            Value::FunctionVal(_, name) => {
                HashTag::Function.hash(state);
                name.hash(state);
            }
        }
    }
}

fn hash_entries<H: Hasher>(entries: &[(&String, &Value)], state: &mut H) {
    entries.len().hash(state);
    for (k, v) in entries {
        k.hash(state);
        v.hash(state);
    }
}

// Conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}

#[cfg(test)]
mod tests;
