//! WASM bindings for urlform-core.
//!
//! Exposes `encode`, `encodeWithMaxDepth` and `escape` as `#[wasm_bindgen]`
//! functions callable from JavaScript/TypeScript.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p urlform-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/urlform-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/urlform_wasm.wasm
//! ```

use urlform_core::EncodeOptions;
use wasm_bindgen::prelude::*;

/// Encode a JSON object string as `application/x-www-form-urlencoded`.
///
/// Throws a JS error if the input is not a JSON object or nests too deeply.
#[wasm_bindgen]
pub fn encode(json: &str) -> std::result::Result<String, JsValue> {
    urlform_core::encode_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// [`encode`] with an explicit nesting limit.
#[wasm_bindgen(js_name = encodeWithMaxDepth)]
pub fn encode_with_max_depth(json: &str, max_depth: usize) -> std::result::Result<String, JsValue> {
    let options = EncodeOptions::default().with_max_depth(max_depth);
    urlform_core::encode_json_with(json, &options).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Percent-escape a single key or value.
#[wasm_bindgen]
pub fn escape(s: &str) -> String {
    urlform_core::escape(s)
}
