//! Error types for form encoding operations.

use thiserror::Error;

/// Errors that can occur while flattening or encoding form parameters.
#[derive(Error, Debug)]
pub enum FormError {
    /// The input was not valid JSON (`encode_json`), or a value could not be
    /// serialized to JSON (`encode_serialize`).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The root of a JSON document or serialized value was not an object.
    /// Form parameters are always a key/value mapping at the top level.
    #[error("expected an object at the top level, found {found}")]
    NotAnObject { found: &'static str },

    /// The value tree nests deeper than the configured limit.
    /// `key` is the composite bracket key at which the limit was crossed.
    #[error("nesting depth exceeds limit of {limit} at key `{key}`")]
    DepthExceeded { key: String, limit: usize },
}

/// Convenience alias used throughout urlform-core.
pub type Result<T> = std::result::Result<T, FormError>;
