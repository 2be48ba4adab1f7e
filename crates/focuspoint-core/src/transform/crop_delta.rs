//! Cropped extent of a cover-fitted image.
//!
//! Every time the editor box is resized, the host reports its new size and
//! [`crop_axis_delta`] works out how many pixels of the scaled image overflow
//! the box, and along which axis. The drag controller uses that overflow to
//! turn pointer pixels into `object-position` percentages, and the ghost
//! image uses it to show the cropped-away area.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::contain::contain_scale;
use crate::{to_percentage, Dimensions, FocalPoint};

/// Axis along which the scaled image overflows its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropAxis {
    Width,
    Height,
}

impl CropAxis {
    /// CSS cursor hinting the drag direction along this axis.
    pub fn cursor(self) -> &'static str {
        match self {
            CropAxis::Width => "col-resize",
            CropAxis::Height => "row-resize",
        }
    }
}

/// Overflow along a single axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisDelta {
    /// Overflow in CSS pixels
    pub px: f64,
    /// Overflow as a percentage of the scaled image along this axis
    pub percent: f64,
}

/// How much of the scaled image is cropped away, per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CropAxisDelta {
    pub width: AxisDelta,
    pub height: AxisDelta,
    /// The cropped axis, or `None` when the box matches the image ratio
    pub changed_axis: Option<CropAxis>,
}

impl CropAxisDelta {
    /// Overflow along `axis`.
    pub fn axis(&self, axis: CropAxis) -> AxisDelta {
        match axis {
            CropAxis::Width => self.width,
            CropAxis::Height => self.height,
        }
    }

    /// CSS cursor for the editor box: a resize cursor along the cropped
    /// axis, or a crosshair when nothing is cropped.
    pub fn cursor(&self) -> &'static str {
        self.changed_axis.map_or("crosshair", CropAxis::cursor)
    }

    /// Translation of the ghost image for a given focal point.
    pub fn ghost_offset(&self, point: FocalPoint) -> GhostOffset {
        GhostOffset {
            x: point.x * (self.width.percent / -100.0),
            y: point.y * (self.height.percent / -100.0),
        }
    }
}

/// CSS `translate()` percentages placing the full-size ghost image so its
/// visible part lines up with the cropped image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GhostOffset {
    pub x: f64,
    pub y: f64,
}

/// Compute the crop delta of an image with `intrinsic` size shown in `rect`.
///
/// An axis counts as cropped only when its overflow is strictly greater than
/// `threshold_px`; the width is checked first.
pub fn crop_axis_delta(intrinsic: Dimensions, rect: Dimensions, threshold_px: f64) -> CropAxisDelta {
    let scaled = contain_scale(intrinsic, rect);

    let width_px = scaled.width - rect.width;
    let height_px = scaled.height - rect.height;

    let changed_axis = if width_px > threshold_px {
        Some(CropAxis::Width)
    } else if height_px > threshold_px {
        Some(CropAxis::Height)
    } else {
        None
    };

    CropAxisDelta {
        width: AxisDelta {
            px: width_px,
            percent: to_percentage(width_px, scaled.width),
        },
        height: AxisDelta {
            px: height_px,
            percent: to_percentage(height_px, scaled.height),
        },
        changed_axis,
    }
}

/// Keeps the latest crop delta for the image currently in the editor.
///
/// Resize notifications that arrive before the intrinsic size is known are
/// dropped. Once the size is known, the last observed box is remembered so a
/// new intrinsic size can be applied without waiting for the next resize.
#[derive(Debug, Clone, Default)]
pub struct CropDeltaTracker {
    threshold_px: f64,
    intrinsic: Option<Dimensions>,
    rect: Option<Dimensions>,
    delta: Option<CropAxisDelta>,
}

impl CropDeltaTracker {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            ..Default::default()
        }
    }

    /// Latest delta, if any resize has been observed with a known image size.
    pub fn delta(&self) -> Option<&CropAxisDelta> {
        self.delta.as_ref()
    }

    pub fn intrinsic(&self) -> Option<Dimensions> {
        self.intrinsic
    }

    /// Record the image's intrinsic size and recompute against the last box.
    pub fn set_intrinsic(&mut self, intrinsic: Dimensions) -> Option<&CropAxisDelta> {
        self.intrinsic = Some(intrinsic);
        self.delta = self
            .rect
            .map(|rect| crop_axis_delta(intrinsic, rect, self.threshold_px));
        self.delta.as_ref()
    }

    /// Handle a resize notification for the editor box.
    ///
    /// Returns `None` without touching any state when the intrinsic size is
    /// not known yet.
    pub fn observe(&mut self, rect: Dimensions) -> Option<&CropAxisDelta> {
        let Some(intrinsic) = self.intrinsic else {
            debug!(?rect, "resize before intrinsic size is known, ignoring");
            return None;
        };

        let delta = crop_axis_delta(intrinsic, rect, self.threshold_px);
        debug!(?rect, axis = ?delta.changed_axis, "crop delta updated");

        self.rect = Some(rect);
        self.delta = Some(delta);
        self.delta.as_ref()
    }

    /// Forget the image, the box and the delta.
    pub fn reset(&mut self) {
        self.intrinsic = None;
        self.rect = None;
        self.delta = None;
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = Dimensions> {
        (1.0f64..=5_000.0, 1.0f64..=5_000.0).prop_map(|(w, h)| Dimensions::new(w, h))
    }

    proptest! {
        /// Property: at most one axis overflows beyond the threshold.
        #[test]
        fn prop_single_cropped_axis(
            intrinsic in dimensions_strategy(),
            rect in dimensions_strategy(),
        ) {
            let delta = crop_axis_delta(intrinsic, rect, 1.0);
            prop_assert!(!(delta.width.px > 1.0 && delta.height.px > 1.0));
        }

        /// Property: the reported axis is the one that overflows.
        #[test]
        fn prop_changed_axis_matches_overflow(
            intrinsic in dimensions_strategy(),
            rect in dimensions_strategy(),
        ) {
            let delta = crop_axis_delta(intrinsic, rect, 1.0);
            match delta.changed_axis {
                Some(CropAxis::Width) => prop_assert!(delta.width.px > 1.0),
                Some(CropAxis::Height) => prop_assert!(delta.height.px > 1.0),
                None => {
                    prop_assert!(delta.width.px <= 1.0);
                    prop_assert!(delta.height.px <= 1.0);
                }
            }
        }

        /// Property: percentages stay within [0, 100).
        #[test]
        fn prop_percent_bounded(
            intrinsic in dimensions_strategy(),
            rect in dimensions_strategy(),
        ) {
            let delta = crop_axis_delta(intrinsic, rect, 1.0);
            prop_assert!(delta.width.percent > -1e-9 && delta.width.percent < 100.0);
            prop_assert!(delta.height.percent > -1e-9 && delta.height.percent < 100.0);
        }
    }
}
