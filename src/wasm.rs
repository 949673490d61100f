//! WASM bindings for the circuit notation engine.
//!
//! The schematic editor runs in the browser and calls these on every edit of
//! the notation field.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { layout_notation, canonical_notation } from 'circuit_notation';
//!
//! await init();
//!
//! const { components, wires } = JSON.parse(layout_notation('UntKdntR1nt(R2//R3)'));
//! canonical_notation('R1nt(R2//R3)'); // "R1 nt R2 // R3"
//! ```

use wasm_bindgen::prelude::*;

use crate::dsl;
use crate::layout::LayoutResult;

/// Empty layout document, used if serialization itself fails.
const EMPTY_LAYOUT_JSON: &str = r#"{"components":[],"wires":[]}"#;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Lay out a notation string and return the layout as JSON.
///
/// Always returns a valid layout document; malformed input yields
/// placeholders or an empty layout.
#[wasm_bindgen]
pub fn layout_notation(notation: &str) -> String {
    let layout: LayoutResult = crate::parse(notation);
    layout
        .to_json()
        .unwrap_or_else(|_| EMPTY_LAYOUT_JSON.to_string())
}

/// Normalize a notation string, e.g. `R1nt(R2//R3)` to `R1 nt R2 // R3`.
///
/// Returns an empty string for empty or unparseable input.
#[wasm_bindgen]
pub fn canonical_notation(notation: &str) -> String {
    match dsl::parse_tree(notation) {
        Ok(Some(tree)) => tree.to_string(),
        _ => String::new(),
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
