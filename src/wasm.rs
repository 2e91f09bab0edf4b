//! WebAssembly bindings for swatchbook.
//!
//! Exposes the color core to the browser under its JavaScript names.
//! Malformed input never throws: it yields `null`, an empty array, `"dark"`,
//! or the fallback palette.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { normalizeHex, generateShades, generatePaletteFromBase } from 'swatchbook';
//!
//! await init();
//!
//! normalizeHex(' #abc ');             // "#AABBCC"
//! generateShades('#3B82F6').length;   // 12
//! generatePaletteFromBase('#FF0000'); // [{ hex, label, role }, ...]
//! ```

use wasm_bindgen::prelude::*;

use crate::{brightness, harmony, hex, shades};

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Normalize a color string to `#RRGGBB`, or `null`.
#[wasm_bindgen(js_name = normalizeHex)]
pub fn normalize_hex(input: &str) -> Option<String> {
    hex::normalize_hex(input).map(hex::HexColor::into_string)
}

/// Decode a color string to `{ r, g, b }`, or `null`.
#[wasm_bindgen(js_name = hexToRgb)]
pub fn hex_to_rgb(input: &str) -> Result<JsValue, JsValue> {
    match hex::hex_to_rgb(input) {
        Some(rgb) => to_js(&rgb),
        None => Ok(JsValue::NULL),
    }
}

/// Encode channels as `#RRGGBB`, clamping and rounding each one.
#[wasm_bindgen(js_name = rgbToHex)]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    hex::rgb_to_hex(r, g, b).into_string()
}

/// Twelve shades from lightest to darkest, or an empty array.
#[wasm_bindgen(js_name = generateShades)]
pub fn generate_shades(input: &str) -> Vec<String> {
    shades::generate_shades(input)
        .into_iter()
        .map(hex::HexColor::into_string)
        .collect()
}

/// `"light"` or `"dark"`; malformed input is `"dark"`.
#[wasm_bindgen(js_name = getColorBrightness)]
pub fn get_color_brightness(input: &str) -> String {
    brightness::color_brightness(input).as_str().to_string()
}

/// Five `{ hex, label, role }` entries in role order.
#[wasm_bindgen(js_name = generatePaletteFromBase)]
pub fn generate_palette_from_base(input: &str) -> Result<JsValue, JsValue> {
    to_js(harmony::generate_palette_from_base(input).entries())
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// ============================================================================
// Tests
// ============================================================================
