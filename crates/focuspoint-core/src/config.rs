//! Editor configuration.

use serde::{Deserialize, Serialize};

use crate::FocalPoint;

/// Tunables for an [`EditorSession`](crate::EditorSession).
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Overflow in pixels an axis needs before it counts as cropped
    pub delta_threshold_px: f64,
    /// Ratio distance within which a standard ratio yields to the original
    pub catalog_tolerance: f64,
    /// Range input steps per unit of track position
    pub slider_precision: u32,
    /// Focal point of a freshly loaded image
    pub default_focal_point: FocalPoint,
    /// Aspect ratio before the user picks one
    pub default_aspect_ratio: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            delta_threshold_px: 1.0,
            catalog_tolerance: 0.01,
            slider_precision: 100_000,
            default_focal_point: FocalPoint::default(),
            default_aspect_ratio: 1.0,
        }
    }
}
