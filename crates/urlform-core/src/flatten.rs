//! Flattening of a parameter tree into ordered `(key, value)` pairs.
//!
//! Nesting is expressed with bracket notation on the key:
//!
//! - map entry: `parent[child]`
//! - list element: `parent[]` (the same literal for every element)
//!
//! These compose, so `{"a": {"b": ["x", "y"]}}` flattens to
//! `a[b][]=x`, `a[b][]=y`. Pairs are raw; escaping happens at join time.

use crate::error::{FormError, Result};
use crate::escape::escape;
use crate::value::FormValue;
use serde::{Deserialize, Serialize};

/// Default bound on container nesting accepted by the flattener.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Options controlling a flatten/encode pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Maximum container depth of any top-level value, as measured by
    /// [`FormValue::depth`]. A top-level scalar has depth 0, `{"a": [1]}`'s
    /// value has depth 1.
    pub max_depth: usize,
}

impl EncodeOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// One flattened, not yet escaped, form field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// `escape(key)=escape(value)`
    pub fn to_encoded(&self) -> String {
        format!("{}={}", escape(&self.key), escape(&self.value))
    }
}

/// Flatten `value` under `key` with the default options.
///
/// ```
/// use urlform_core::{flatten, FormValue, Pair};
///
/// let tags = FormValue::from(vec!["x", "y"]);
/// let pairs = flatten("tags", &tags).unwrap();
/// assert_eq!(pairs, vec![Pair::new("tags[]", "x"), Pair::new("tags[]", "y")]);
/// ```
pub fn flatten(key: &str, value: &FormValue) -> Result<Vec<Pair>> {
    flatten_with(key, value, &EncodeOptions::default())
}

/// Flatten `value` under `key`, enforcing `options.max_depth`.
pub fn flatten_with(key: &str, value: &FormValue, options: &EncodeOptions) -> Result<Vec<Pair>> {
    let mut out = Vec::new();
    flatten_into(key, value, 0, options, &mut out)?;
    Ok(out)
}

/// Append the pairs of `value` to `out`. `depth` counts the containers
/// already entered above `value`.
pub(crate) fn flatten_into(
    key: &str,
    value: &FormValue,
    depth: usize,
    options: &EncodeOptions,
    out: &mut Vec<Pair>,
) -> Result<()> {
    match value {
        FormValue::Map(map) => {
            check_depth(key, depth, options)?;
            for (child_key, child) in map {
                let nested = format!("{key}[{child_key}]");
                flatten_into(&nested, child, depth + 1, options, out)?;
            }
        }
        FormValue::List(items) => {
            check_depth(key, depth, options)?;
            let nested = format!("{key}[]");
            for item in items {
                flatten_into(&nested, item, depth + 1, options, out)?;
            }
        }
        scalar => {
            // Containers are handled above, so a scalar always has text.
            let text = scalar.scalar_text().unwrap_or_default();
            out.push(Pair::new(key, text));
        }
    }
    Ok(())
}

fn check_depth(key: &str, depth: usize, options: &EncodeOptions) -> Result<()> {
    if depth >= options.max_depth {
        tracing::debug!(key, limit = options.max_depth, "form value nests too deeply");
        return Err(FormError::DepthExceeded {
            key: key.to_string(),
            limit: options.max_depth,
        });
    }
    Ok(())
}
