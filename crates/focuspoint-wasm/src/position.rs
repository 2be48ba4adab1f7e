//! `object-position` codec bindings.

use focuspoint_core::{position, FocalPoint};
use wasm_bindgen::prelude::*;

/// Encode a focal point as `"X% Y%"`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// encode_object_position(33.3, 66.6); // "33.30% 66.60%"
/// ```
#[wasm_bindgen]
pub fn encode_object_position(x: f64, y: f64) -> String {
    position::encode(FocalPoint::new(x, y))
}

/// Decode an `"X% Y%"` string into `{ x, y }`.
///
/// # Errors
///
/// Throws when the string is not two percentages separated by one space.
#[wasm_bindgen]
pub fn decode_object_position(value: &str) -> Result<JsValue, JsValue> {
    let point = position::decode(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&point).map_err(|e| JsValue::from_str(&e.to_string()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_object_position() {
        let value = decode_object_position("25.00% 75.50%").unwrap();
        let point: FocalPoint = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(point, FocalPoint::new(25.0, 75.5));
    }

    #[wasm_bindgen_test]
    fn test_decode_object_position_rejects_malformed() {
        let err = decode_object_position("25% 75% 0%").unwrap_err();
        assert!(err.as_string().unwrap().contains("two space-separated"));
    }
}
