//! The parameter value tree consumed by the flattener.
//!
//! `FormValue` mirrors JSON but keeps integers, unsigned integers and floats
//! apart, carries an explicit `Bool` tag (so a boolean can never be mistaken
//! for the number 1 or 0), and stores mappings in a `BTreeMap` so nested keys
//! are always visited in ascending byte order.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Top-level form parameters: string keys to values, iterated in sorted order.
pub type Params = BTreeMap<String, FormValue>;

/// A single node of a parameter tree.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    /// Renders as the empty string.
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    /// Any other scalar, captured as its display string.
    Other(String),
    List(Vec<FormValue>),
    /// Nested mapping; keys sorted ascending.
    Map(BTreeMap<String, FormValue>),
}

impl FormValue {
    /// Capture an arbitrary `Display` value as an opaque scalar.
    ///
    /// ```
    /// use std::net::Ipv4Addr;
    /// use urlform_core::FormValue;
    ///
    /// let v = FormValue::display(Ipv4Addr::LOCALHOST);
    /// assert_eq!(v, FormValue::Other("127.0.0.1".to_string()));
    /// ```
    pub fn display(value: impl fmt::Display) -> Self {
        FormValue::Other(value.to_string())
    }

    /// Number of scalar leaves below (and including) this node.
    ///
    /// This is exactly the number of pairs the value flattens into: empty
    /// lists and maps contribute nothing. Walks the whole tree with no depth
    /// limit, so the encoder never calls it.
    pub fn leaf_count(&self) -> usize {
        match self {
            FormValue::List(items) => items.iter().map(FormValue::leaf_count).sum(),
            FormValue::Map(map) => map.values().map(FormValue::leaf_count).sum(),
            _ => 1,
        }
    }

    /// Container nesting depth. Scalars are 0, a list or map is one more than
    /// its deepest child (an empty container is 1).
    pub fn depth(&self) -> usize {
        match self {
            FormValue::List(items) => 1 + items.iter().map(FormValue::depth).max().unwrap_or(0),
            FormValue::Map(map) => 1 + map.values().map(FormValue::depth).max().unwrap_or(0),
            _ => 0,
        }
    }

    /// Canonical text of a scalar, or `None` for containers.
    ///
    /// Booleans render as `1`/`0`, integers without decoration, floats with
    /// the default `Display` formatting, strings verbatim and null as `""`.
    pub fn scalar_text(&self) -> Option<String> {
        let text = match self {
            FormValue::Null => String::new(),
            FormValue::Bool(b) => String::from(if *b { "1" } else { "0" }),
            FormValue::Int(i) => i.to_string(),
            FormValue::UInt(u) => u.to_string(),
            FormValue::Float(f) => f.to_string(),
            FormValue::String(s) | FormValue::Other(s) => s.clone(),
            FormValue::List(_) | FormValue::Map(_) => return None,
        };
        Some(text)
    }
}

impl From<bool> for FormValue {
    fn from(b: bool) -> Self {
        FormValue::Bool(b)
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for FormValue {
            fn from(n: $t) -> Self {
                FormValue::Int(n as i64)
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for FormValue {
            fn from(n: $t) -> Self {
                FormValue::UInt(n as u64)
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for FormValue {
    fn from(f: f64) -> Self {
        FormValue::Float(f)
    }
}

impl From<char> for FormValue {
    fn from(c: char) -> Self {
        FormValue::String(c.to_string())
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::String(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        FormValue::String(s)
    }
}

impl<T: Into<FormValue>> From<Option<T>> for FormValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(FormValue::Null, Into::into)
    }
}

impl<T: Into<FormValue>> From<Vec<T>> for FormValue {
    fn from(items: Vec<T>) -> Self {
        FormValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FormValue>> From<BTreeMap<String, T>> for FormValue {
    fn from(map: BTreeMap<String, T>) -> Self {
        FormValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<FormValue>> From<HashMap<String, T>> for FormValue {
    fn from(map: HashMap<String, T>) -> Self {
        FormValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<serde_json::Value> for FormValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => FormValue::Null,
            Value::Bool(b) => FormValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FormValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    FormValue::UInt(u)
                } else if let Some(f) = n.as_f64() {
                    FormValue::Float(f)
                } else {
                    FormValue::Other(n.to_string())
                }
            }
            Value::String(s) => FormValue::String(s),
            Value::Array(items) => FormValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                FormValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}
