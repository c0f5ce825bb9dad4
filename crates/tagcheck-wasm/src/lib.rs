//! WASM bindings for the tagcheck validator.
//!
//! Exposes `check()` and `explain()` to JavaScript via wasm-bindgen.
//! Both work on an in-memory document; there is no file access.

use wasm_bindgen::prelude::*;

/// Whether every tag in `source` is matched and properly nested.
#[wasm_bindgen]
pub fn check(source: &str) -> bool {
    tagcheck_validator::is_balanced_str(source)
}

/// Describe the result of checking `source`, e.g.
/// `"line 1, column 7: expected </b>, found </a>"`.
///
/// Throws a JS error if the document cannot be read.
#[wasm_bindgen]
pub fn explain(source: &str) -> Result<String, JsError> {
    let verdict =
        tagcheck_validator::check_str(source).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(verdict.to_string())
}

/// Get the validator version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
