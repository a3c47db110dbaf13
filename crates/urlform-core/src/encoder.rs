//! Form encoder — turns top-level parameters into an
//! `application/x-www-form-urlencoded` string.
//!
//! Output grammar is `pair ('&' pair)*` with `pair = escaped_key '=' escaped_value`.
//! Top-level keys are visited in ascending byte order, then each value is
//! flattened (see [`flatten`](mod@crate::flatten)) and every pair escaped independently.
//!
//! # Example
//! ```
//! use urlform_core::{encode, FormValue, Params};
//!
//! let mut params = Params::new();
//! params.insert("b".into(), FormValue::from(1));
//! params.insert("a".into(), FormValue::from(true));
//! assert_eq!(encode(&params).unwrap(), "a=1&b=1");
//! ```

use crate::error::{FormError, Result};
use crate::flatten::{flatten_into, EncodeOptions, Pair};
use crate::value::Params;
use serde::Serialize;
use serde_json::Value;

/// Encode parameters with the default options.
pub fn encode(params: &Params) -> Result<String> {
    encode_with(params, &EncodeOptions::default())
}

/// Encode parameters, enforcing `options`.
pub fn encode_with(params: &Params, options: &EncodeOptions) -> Result<String> {
    let pairs = flatten_params(params, options)?;
    let encoded = encode_pairs(&pairs);
    tracing::debug!(
        keys = params.len(),
        pairs = pairs.len(),
        bytes = encoded.len(),
        "encoded form parameters"
    );
    Ok(encoded)
}

/// Flatten every top-level entry, in sorted key order, into one pair list.
pub fn flatten_params(params: &Params, options: &EncodeOptions) -> Result<Vec<Pair>> {
    // No up-front leaf count: sizing must not walk past the depth guard.
    let mut out = Vec::new();
    for (key, value) in params {
        flatten_into(key, value, 0, options, &mut out)?;
    }
    Ok(out)
}

/// Escape and join already-flattened pairs. No leading or trailing `&`;
/// an empty slice yields `""`.
pub fn encode_pairs(pairs: &[Pair]) -> String {
    pairs
        .iter()
        .map(Pair::to_encoded)
        .collect::<Vec<_>>()
        .join("&")
}

/// Encode a JSON object string.
///
/// ```
/// use urlform_core::encode_json;
///
/// let body = encode_json(r#"{"tags":["x","y"],"active":false}"#).unwrap();
/// assert_eq!(body, "active=0&tags%5B%5D=x&tags%5B%5D=y");
/// ```
pub fn encode_json(json: &str) -> Result<String> {
    encode_json_with(json, &EncodeOptions::default())
}

/// [`encode_json`] with explicit options.
pub fn encode_json_with(json: &str, options: &EncodeOptions) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    encode_with(&params_from_json(value)?, options)
}

/// Encode any serde-serializable value whose serialized form is an object,
/// such as a request-parameters struct.
pub fn encode_serialize<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value)?;
    encode(&params_from_json(value)?)
}

/// Convert a JSON document root into top-level parameters.
pub fn params_from_json(value: Value) -> Result<Params> {
    match value {
        Value::Object(map) => Ok(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
        other => Err(FormError::NotAnObject {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
