//! Crop snippet bindings.

use focuspoint_core::snippet;
use wasm_bindgen::prelude::*;

/// Render the `<img>` snippet for `src` cropped at `object_position`.
#[wasm_bindgen]
pub fn crop_snippet(src: &str, object_position: &str) -> String {
    snippet::crop_snippet(src, object_position)
}

/// Escape `& < > " '` for insertion into HTML.
#[wasm_bindgen]
pub fn escape_html(text: &str) -> String {
    snippet::escape_html(text)
}
