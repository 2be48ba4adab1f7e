//! Pointer capture on DOM elements.

use focuspoint_core::drag::{CaptureError, PointerCapture};
use wasm_bindgen::JsValue;
use web_sys::{console, Element};

/// Adapts an [`Element`] to the core drag controller.
pub(crate) struct ElementCapture<'a> {
    element: &'a Element,
}

impl<'a> ElementCapture<'a> {
    pub(crate) fn new(element: &'a Element) -> Self {
        Self { element }
    }
}

impl PointerCapture for ElementCapture<'_> {
    fn capture(&mut self, pointer_id: i32) -> Result<(), CaptureError> {
        self.element.set_pointer_capture(pointer_id).map_err(|e| {
            let err = CaptureError::Rejected {
                pointer_id,
                reason: e.as_string().unwrap_or_else(|| format!("{:?}", e)),
            };
            console::warn_1(&JsValue::from_str(&err.to_string()));
            err
        })
    }

    fn release(&mut self, pointer_id: i32) {
        if let Err(e) = self.element.release_pointer_capture(pointer_id) {
            console::warn_1(&e);
        }
    }

    fn has_capture(&self, pointer_id: i32) -> bool {
        self.element.has_pointer_capture(pointer_id)
    }
}
