//! Editor session bindings.
//!
//! `JsEditorSession` is the object the page keeps for the lifetime of the
//! editor. DOM events are forwarded to it and it answers with the values to
//! render: the `object-position` string, the aspect ratio and the cursor.
//!
//! # Usage
//!
//! ```typescript
//! const editor = new JsEditorSession({ delta_threshold_px: 1 });
//!
//! img.onload = () => {
//!   const sub = editor.load_image(img.naturalWidth, img.naturalHeight);
//!   observer = new ResizeObserver(([entry]) => {
//!     editor.on_resize(sub, entry.contentRect.width, entry.contentRect.height);
//!   });
//!   observer.observe(box);
//! };
//!
//! box.onpointerdown = (e) => editor.pointer_down(box, e.pointerId, e.clientX, e.clientY);
//! box.onpointermove = (e) => {
//!   const position = editor.pointer_move(box, e.pointerId, e.clientX, e.clientY);
//!   if (position !== undefined) img.style.objectPosition = position;
//! };
//! ```

use focuspoint_core::{
    Dimensions, EditorConfig, EditorSession, Key, Point, ResizeSubscription, SessionSnapshot,
};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::capture::ElementCapture;

/// Token returned by [`JsEditorSession::load_image`].
///
/// Resize notifications must pass the token of the image they observe.
/// Tokens of replaced images are ignored.
#[wasm_bindgen]
pub struct JsResizeSubscription {
    inner: ResizeSubscription,
}

/// Focal point editor for one `<img>` at a time.
#[wasm_bindgen]
pub struct JsEditorSession {
    inner: EditorSession,
}

#[wasm_bindgen]
impl JsEditorSession {
    /// Create an editor.
    ///
    /// # Arguments
    ///
    /// * `config` - Optional partial `EditorConfig` object; missing fields
    ///   take their defaults
    ///
    /// # Errors
    ///
    /// Throws when `config` is not a valid configuration object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsEditorSession, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid editor config: {}", e)))?
        };
        Ok(Self::with_config(config))
    }

    /// Show a new image with the given natural size.
    pub fn load_image(&mut self, width: f64, height: f64) -> JsResizeSubscription {
        JsResizeSubscription {
            inner: self.inner.load_image(Dimensions::new(width, height)),
        }
    }

    /// Report that the image could not be loaded.
    pub fn image_failed(&mut self) {
        self.inner.image_failed();
    }

    /// Remove the image. Outstanding subscriptions become stale.
    pub fn unload_image(&mut self) {
        self.inner.unload_image();
    }

    /// Forward a `ResizeObserver` entry. Returns `false` for stale tokens and
    /// before the image size is known.
    pub fn on_resize(
        &mut self,
        subscription: &JsResizeSubscription,
        width: f64,
        height: f64,
    ) -> bool {
        self.inner
            .on_resize(subscription.inner, Dimensions::new(width, height))
            .is_some()
    }

    /// Start dragging. Captures the pointer on `element`.
    pub fn pointer_down(
        &mut self,
        element: &Element,
        pointer_id: i32,
        client_x: f64,
        client_y: f64,
    ) -> bool {
        let mut target = ElementCapture::new(element);
        self.inner
            .pointer_down(&mut target, pointer_id, Point::new(client_x, client_y))
    }

    /// Track a drag. Returns the new `object-position`, or `undefined` when
    /// the event did not move the focal point.
    pub fn pointer_move(
        &mut self,
        element: &Element,
        pointer_id: i32,
        client_x: f64,
        client_y: f64,
    ) -> Option<String> {
        let target = ElementCapture::new(element);
        self.inner
            .pointer_move(&target, pointer_id, Point::new(client_x, client_y))
            .map(|p| p.to_string())
    }

    pub fn pointer_up(&mut self, element: &Element, pointer_id: i32) {
        let mut target = ElementCapture::new(element);
        self.inner.pointer_up(&mut target, pointer_id);
    }

    pub fn pointer_cancel(&mut self, element: &Element, pointer_id: i32) {
        let mut target = ElementCapture::new(element);
        self.inner.pointer_cancel(&mut target, pointer_id);
    }

    /// Move the focal point marker under the pointer.
    ///
    /// `left`, `top`, `width` and `height` are the marker parent's
    /// `getBoundingClientRect()`. Returns the new `object-position`.
    pub fn marker_drag(
        &mut self,
        client_x: f64,
        client_y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> String {
        self.inner
            .marker_drag(
                Point::new(client_x, client_y),
                Point::new(left, top),
                Dimensions::new(width, height),
            )
            .to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn object_position(&self) -> String {
        self.inner.object_position()
    }

    #[wasm_bindgen(getter)]
    pub fn focal_x(&self) -> f64 {
        self.inner.focal_point().x
    }

    #[wasm_bindgen(getter)]
    pub fn focal_y(&self) -> f64 {
        self.inner.focal_point().y
    }

    #[wasm_bindgen(getter)]
    pub fn aspect_ratio(&self) -> f64 {
        self.inner.aspect_ratio()
    }

    /// CSS cursor for the editor box.
    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> String {
        self.inner.cursor().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    /// Ghost image `translate()` along x, in percent.
    #[wasm_bindgen(getter)]
    pub fn ghost_x(&self) -> f64 {
        self.inner.ghost_offset().x
    }

    /// Ghost image `translate()` along y, in percent.
    #[wasm_bindgen(getter)]
    pub fn ghost_y(&self) -> f64 {
        self.inner.ghost_offset().y
    }

    /// Latest crop delta as `{ width: {px, percent}, height: {px, percent},
    /// changed_axis }`, or `undefined` before the first resize.
    pub fn crop_delta(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.crop_delta())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Pick an aspect ratio directly.
    ///
    /// # Errors
    ///
    /// Throws for non-positive or non-finite ratios.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f64) -> Result<(), JsValue> {
        self.inner
            .set_aspect_ratio(aspect_ratio)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// `min` attribute of the range input.
    #[wasm_bindgen(getter)]
    pub fn slider_min(&self) -> f64 {
        self.inner.slider().input_range().0 as f64
    }

    /// `max` attribute of the range input.
    #[wasm_bindgen(getter)]
    pub fn slider_max(&self) -> f64 {
        self.inner.slider().input_range().1 as f64
    }

    /// `value` attribute of the range input.
    #[wasm_bindgen(getter)]
    pub fn slider_value(&self) -> f64 {
        self.inner.slider().input_value() as f64
    }

    /// Handle an `input` event of the range input. Returns the aspect ratio.
    pub fn slider_input(&mut self, value: f64) -> f64 {
        self.inner.slider_input(value.round() as i64)
    }

    /// Handle a `keydown` on the slider. Returns the aspect ratio it snapped
    /// to, or `undefined` for other keys and at either end.
    pub fn slider_key(&mut self, key: &str) -> Option<f64> {
        self.inner.slider_key(Key::parse(key)?)
    }

    /// Track position of the image's own ratio, for its marker.
    pub fn original_position(&self) -> Option<f64> {
        self.inner.slider().original_position()
    }

    /// Ruler marks as `{ name, offset, original }` objects.
    pub fn marks(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.slider().marks())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current catalog entries, including `"original"` once an image is
    /// loaded.
    pub fn catalog(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.catalog().entries())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// `<img>` snippet for `src` at the current focal point.
    pub fn snippet(&self, src: &str) -> String {
        self.inner.snippet(src)
    }

    /// `{ object_position, aspect_ratio }` for storage.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Apply a stored snapshot.
    ///
    /// # Errors
    ///
    /// Throws, leaving the editor unchanged, when the snapshot is malformed.
    pub fn restore(&mut self, snapshot: JsValue) -> Result<(), JsValue> {
        let snapshot: SessionSnapshot = serde_wasm_bindgen::from_value(snapshot)
            .map_err(|e| JsValue::from_str(&format!("Invalid snapshot: {}", e)))?;
        self.inner
            .restore(&snapshot)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsEditorSession {
    pub(crate) fn with_config(config: EditorConfig) -> Self {
        Self {
            inner: EditorSession::new(config),
        }
    }
}
