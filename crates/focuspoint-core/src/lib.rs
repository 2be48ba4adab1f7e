//! Focuspoint Core - Focal point and crop preview engine
//!
//! This crate provides the coordinate-transform engine behind the Focuspoint
//! editor: converting pointer drags into a CSS `object-position` focal point,
//! tracking how much of the rendered image is cropped away at the current
//! aspect ratio, and the logarithmic aspect ratio catalog used by the ratio
//! slider.
//!
//! Everything here is synchronous and platform independent. The browser host
//! lives in `focuspoint-wasm`.

pub mod aspect;
pub mod config;
pub mod drag;
pub mod position;
pub mod session;
pub mod snippet;
pub mod transform;

pub use aspect::{AspectRatioCatalog, AspectRatioEntry, Key, LogScale, RatioSlider};
pub use config::EditorConfig;
pub use drag::{CaptureError, DragController, DragState, PointerCapture};
pub use position::PositionError;
pub use session::{EditorSession, ResizeSubscription, SessionError, SessionSnapshot};
pub use transform::{contain_scale, crop_axis_delta, CropAxis, CropAxisDelta, CropDeltaTracker};

use serde::{Deserialize, Serialize};

/// Focal point as percentages along the image width and height.
///
/// Both axes are expected in `[0, 100]`. The default is the image center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocalPoint {
    /// Horizontal position (0 = left edge, 100 = right edge)
    pub x: f64,
    /// Vertical position (0 = top edge, 100 = bottom edge)
    pub y: f64,
}

impl Default for FocalPoint {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

impl FocalPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp both axes to `[0, 100]`. NaN collapses to `0`.
    pub fn clamped(self) -> Self {
        Self {
            x: clamp_percent(self.x),
            y: clamp_percent(self.y),
        }
    }

    /// Clamp and round both axes to two decimals.
    ///
    /// This is exactly the value an encode/decode round trip produces.
    pub fn quantized(self) -> Self {
        let p = self.clamped();
        Self {
            x: round_two_decimals(p.x),
            y: round_two_decimals(p.y),
        }
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height, or `None` when the height is not positive.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.height > 0.0 && self.width.is_finite() && self.height.is_finite() {
            Some(self.width / self.height)
        } else {
            None
        }
    }
}

/// Pointer position in client coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[inline]
fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Compute `part / whole * 100`, or `0` when `whole` is not positive.
#[inline]
pub fn to_percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Round to two decimal places.
///
/// `f64::EPSILON` is added first so values like `1.235` and `0.1 + 0.2`
/// round the way they read.
#[inline]
pub fn round_two_decimals(value: f64) -> f64 {
    ((value + f64::EPSILON) * 100.0).round() / 100.0
}
