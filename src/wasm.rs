//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::validate;

/// Validate a workflow JSON string.
/// Returns the validation report as a JS object.
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let report = validate::validate_json(json);
    serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
}

/// True when the workflow JSON validates without errors.
#[wasm_bindgen]
pub fn is_valid_workflow(json: &str) -> bool {
    validate::validate_json(json).valid
}
