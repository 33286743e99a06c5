//! WASM bindings for Circuit Tutor Core.
//!
//! This module provides JavaScript-friendly bindings so the web front end
//! can draw exercise circuits without a layout implementation of its own.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { render_circuit_svg, validate_circuit_json } from 'circuit_tutor_core';
//!
//! await init();
//!
//! const reply = await generateExercise(apiKey, 'mixed', 'medium');
//! validate_circuit_json(reply);            // throws on broken circuits
//! diagram.innerHTML = render_circuit_svg(reply, 700, 350);
//! ```

use wasm_bindgen::prelude::*;

use crate::exercise;
use crate::render;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_error(err: crate::TutorError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Render a circuit to an SVG document.
///
/// # Arguments
/// * `json` - A bare circuit, a full exercise, or a service reply containing either
/// * `width` - Canvas width in pixels
/// * `height` - Canvas height in pixels
///
/// # Returns
/// The SVG markup, or an error if the JSON cannot be decoded. Layout itself
/// never fails: missing structure falls back to a text list.
#[wasm_bindgen]
pub fn render_circuit_svg(json: &str, width: f64, height: f64) -> Result<String, JsValue> {
    let circuit = exercise::parse_any_circuit(json).map_err(js_error)?;
    Ok(render::render_svg(&circuit, width, height))
}

/// Check a circuit for dangling references, duplicate ids and
/// non-positive values.
#[wasm_bindgen]
pub fn validate_circuit_json(json: &str) -> Result<(), JsValue> {
    let circuit = exercise::parse_any_circuit(json).map_err(js_error)?;
    crate::circuit::validate_circuit(&circuit).map_err(js_error)
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
