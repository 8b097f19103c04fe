//! WASM bindings for relop-core.
//!
//! Exposes `compare` and `filter` as `#[wasm_bindgen]` functions callable from
//! JavaScript/TypeScript. Operands cross the boundary as JSON strings, so JS
//! numbers arrive as deferred numeric text and go through the same coercion
//! as any other decoded JSON.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p relop-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/relop-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/relop_wasm.wasm
//! ```
//!
//! Unknown operators are returned as JS errors rather than aborting the module.

use relop_core::{Condition, DynValue};
use wasm_bindgen::prelude::*;

fn parse_operand(json: &str) -> Result<DynValue, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid operand JSON {json:?}: {e}"))
}

fn compare_json(op: &str, left_json: &str, right_json: &str) -> Result<bool, String> {
    let left = parse_operand(left_json)?;
    let right = parse_operand(right_json)?;
    relop_core::try_compare(op, &left, &right).map_err(|e| e.to_string())
}

fn filter_records_json(
    json: &str,
    field: &str,
    op: &str,
    value_json: &str,
) -> Result<String, String> {
    let operand = serde_json::from_str(value_json)
        .map_err(|e| format!("Invalid operand JSON {value_json:?}: {e}"))?;
    let condition = Condition::new(field, op, operand).map_err(|e| e.to_string())?;
    relop_core::filter_json(json, &condition).map_err(|e| e.to_string())
}

/// Evaluate `left op right`, where both operands are JSON literals.
///
/// Throws a JS error for an unknown operator or malformed operand JSON.
#[wasm_bindgen]
pub fn compare(op: &str, left_json: &str, right_json: &str) -> std::result::Result<bool, JsValue> {
    compare_json(op, left_json, right_json).map_err(|e| JsValue::from_str(&e))
}

/// Filter a JSON array of records, keeping those whose `field` satisfies
/// `field op value`. Returns the kept records as compact JSON.
#[wasm_bindgen]
pub fn filter(
    json: &str,
    field: &str,
    op: &str,
    value_json: &str,
) -> std::result::Result<String, JsValue> {
    filter_records_json(json, field, op, value_json).map_err(|e| JsValue::from_str(&e))
}
