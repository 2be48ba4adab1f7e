//! Focuspoint WASM - WebAssembly bindings for the Focuspoint editor
//!
//! This crate exposes the focuspoint-core engine to the page hosting the
//! editor. DOM events go in, CSS values come out.
//!
//! # Module Structure
//!
//! - `editor` - The editor session: image lifecycle, drag, resize, slider
//! - `position` - `object-position` codec
//! - `catalog` - Aspect ratio catalog and editor box layout
//! - `snippet` - HTML snippet for the chosen crop
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditorSession } from '@focuspoint/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const editor = new JsEditorSession();
//! const sub = editor.load_image(img.naturalWidth, img.naturalHeight);
//! img.style.objectPosition = editor.object_position;
//! ```

use wasm_bindgen::prelude::*;

mod capture;
mod catalog;
mod editor;
mod position;
mod snippet;

// Re-export public types
pub use catalog::{aspect_ratio_catalog, container_height_vmin};
pub use editor::{JsEditorSession, JsResizeSubscription};
pub use position::{decode_object_position, encode_object_position};
pub use snippet::{crop_snippet, escape_html};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
