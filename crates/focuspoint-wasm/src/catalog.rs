//! Aspect ratio catalog and layout bindings.

use focuspoint_core::transform::layout;
use focuspoint_core::AspectRatioCatalog;
use wasm_bindgen::prelude::*;

/// The standard aspect ratios as `{ name, value, position }` objects,
/// sorted by value.
///
/// Pass an image's ratio as `original` to merge it in the same way the
/// editor does when an image is loaded.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const ratios = aspect_ratio_catalog(3000 / 2000, 0.01);
/// ratios.find(r => r.name === "original");
/// ```
#[wasm_bindgen]
pub fn aspect_ratio_catalog(original: Option<f64>, tolerance: f64) -> Result<JsValue, JsValue> {
    let catalog = catalog_for(original, tolerance);
    serde_wasm_bindgen::to_value(&catalog.entries()).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn catalog_for(original: Option<f64>, tolerance: f64) -> AspectRatioCatalog {
    let standard = AspectRatioCatalog::standard();
    match original {
        Some(ratio) => standard.with_original(ratio, tolerance),
        None => standard,
    }
}

/// Editor box height in `vmin` for a given aspect ratio, keeping the image
/// area constant. Returns `undefined` for non-positive ratios.
#[wasm_bindgen]
pub fn container_height_vmin(aspect_ratio: f64) -> Option<f64> {
    layout::container_height_vmin(aspect_ratio)
}
