//! # urlform-core
//!
//! Deterministic encoder for `application/x-www-form-urlencoded` request
//! parameters, with nested maps and lists expressed in bracket notation.
//!
//! ## Quick start
//!
//! ```rust
//! use urlform_core::encode_json;
//!
//! let json = r#"{"user":{"name":"Ada Lovelace","roles":["admin","dev"]},"active":true}"#;
//! let body = encode_json(json).unwrap();
//! assert_eq!(
//!     body,
//!     "active=1&user%5Bname%5D=Ada%20Lovelace&user%5Broles%5D%5B%5D=admin&user%5Broles%5D%5B%5D=dev"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`encoder`] — parameters → encoded string (`encode`, `encode_json`, `encode_serialize`)
//! - [`flatten`](mod@flatten) — value tree → ordered `(key, value)` pairs, depth guard
//! - [`escape`](mod@escape) — percent-escaping policy for keys and values
//! - [`value`] — `FormValue` tree and `Params`
//! - [`error`] — error types

pub mod encoder;
pub mod error;
pub mod escape;
pub mod flatten;
pub mod value;

pub use encoder::{
    encode, encode_json, encode_json_with, encode_pairs, encode_serialize, encode_with,
    flatten_params, params_from_json,
};
pub use error::{FormError, Result};
pub use escape::{escape, escape_bytes};
pub use flatten::{flatten, flatten_with, EncodeOptions, Pair, DEFAULT_MAX_DEPTH};
pub use value::{FormValue, Params};
