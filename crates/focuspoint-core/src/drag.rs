//! Pointer drag handling for the focal point.
//!
//! Dragging the image moves the visible crop window, and the focal point
//! follows in the opposite direction: pulling the image to the right reveals
//! more of its left side, so `object-position` moves left.
//!
//! # State Machine
//!
//! ```text
//!          pointer_down (capture ok)
//!   Idle ─────────────────────────────▶ Dragging
//!    ▲                                    │  pointer_move → Option<FocalPoint>
//!    └──── pointer_up / pointer_cancel ───┘
//!          capture lost
//! ```
//!
//! Pointer displacement is measured against the snapshot taken at
//! `pointer_down`, not accumulated per event, so rounding never drifts.

use thiserror::Error;
use tracing::{debug, warn};

use crate::transform::{CropAxis, CropAxisDelta};
use crate::{to_percentage, Dimensions, FocalPoint, Point};

/// Error raised by a [`PointerCapture`] target.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaptureError {
    /// The host refused to capture the pointer.
    #[error("Failed to capture pointer {pointer_id}: {reason}")]
    Rejected { pointer_id: i32, reason: String },

    /// The capture target is no longer attached to the document.
    #[error("Capture target is detached")]
    Detached,
}

/// An element able to capture pointer events for the duration of a drag.
pub trait PointerCapture {
    /// Route all events of `pointer_id` to this target.
    fn capture(&mut self, pointer_id: i32) -> Result<(), CaptureError>;

    /// Stop routing events of `pointer_id` to this target.
    fn release(&mut self, pointer_id: i32);

    /// Whether `pointer_id` is currently captured by this target.
    fn has_capture(&self, pointer_id: i32) -> bool;
}

/// Drag state for the focal point editor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer that started the drag
        pointer_id: i32,
        /// Focal point at drag start, as stored in its encoded form
        start_point: FocalPoint,
        /// Pointer position at drag start
        start_pointer: Point,
    },
}

/// Turns pointer events into focal point updates.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Start a drag.
    ///
    /// Captures `pointer_id` on `target` and snapshots `current` and the
    /// pointer position. Returns `true` when a drag started. A failed capture
    /// leaves the controller idle, and a second pointer is ignored while a
    /// drag is in progress.
    pub fn pointer_down<C: PointerCapture + ?Sized>(
        &mut self,
        target: &mut C,
        pointer_id: i32,
        pointer: Point,
        current: FocalPoint,
    ) -> bool {
        if self.is_dragging() {
            debug!(pointer_id, "pointer down during drag, ignoring");
            return false;
        }

        if let Err(e) = target.capture(pointer_id) {
            warn!(pointer_id, error = %e, "pointer capture failed, drag not started");
            return false;
        }

        self.state = DragState::Dragging {
            pointer_id,
            start_point: current.quantized(),
            start_pointer: pointer,
        };
        debug!(pointer_id, x = pointer.x, y = pointer.y, "drag started");
        true
    }

    /// Track the pointer during a drag.
    ///
    /// Returns the new focal point, or `None` when the event is ignored:
    /// the controller is idle, the event belongs to another pointer, or no
    /// crop delta is known yet. If `target` lost the capture, the drag ends
    /// as if the pointer had been released.
    pub fn pointer_move<C: PointerCapture + ?Sized>(
        &mut self,
        target: &C,
        pointer_id: i32,
        pointer: Point,
        delta: Option<&CropAxisDelta>,
    ) -> Option<FocalPoint> {
        let DragState::Dragging {
            pointer_id: active_id,
            start_point,
            start_pointer,
        } = self.state
        else {
            return None;
        };

        if pointer_id != active_id {
            return None;
        }

        if !target.has_capture(pointer_id) {
            debug!(pointer_id, "pointer capture lost, ending drag");
            self.state = DragState::Idle;
            return None;
        }

        let delta = delta?;
        let shift_x = axis_shift(delta, CropAxis::Width, pointer.x - start_pointer.x);
        let shift_y = axis_shift(delta, CropAxis::Height, pointer.y - start_pointer.y);

        Some(FocalPoint::new(start_point.x - shift_x, start_point.y - shift_y).quantized())
    }

    /// End the drag and release the pointer. Never changes the focal point.
    pub fn pointer_up<C: PointerCapture + ?Sized>(&mut self, target: &mut C, pointer_id: i32) {
        self.end(target, pointer_id, "drag ended");
    }

    /// Abort the drag, e.g. when the browser cancels the pointer.
    pub fn pointer_cancel<C: PointerCapture + ?Sized>(&mut self, target: &mut C, pointer_id: i32) {
        self.end(target, pointer_id, "drag cancelled");
    }

    /// Drop any drag in progress without touching the capture target.
    ///
    /// Used when the target itself goes away, e.g. the image is replaced.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    fn end<C: PointerCapture + ?Sized>(&mut self, target: &mut C, pointer_id: i32, message: &str) {
        match self.state {
            DragState::Dragging {
                pointer_id: active_id,
                ..
            } if active_id == pointer_id => {
                if target.has_capture(pointer_id) {
                    target.release(pointer_id);
                }
                self.state = DragState::Idle;
                debug!(pointer_id, "{message}");
            }
            _ => {}
        }
    }
}

/// Focal point shift in percent for a pointer displacement along `axis`.
///
/// Only the cropped axis moves. The displacement is expressed as a share of
/// the cropped pixels, which is how `object-position` percentages map onto
/// the overflow.
fn axis_shift(delta: &CropAxisDelta, axis: CropAxis, pointer_px: f64) -> f64 {
    if delta.changed_axis != Some(axis) {
        return 0.0;
    }
    to_percentage(pointer_px, delta.axis(axis).px).clamp(-100.0, 100.0)
}

/// Focal point under the pointer while dragging the point marker directly.
///
/// `origin` and `size` describe the marker's parent box in client
/// coordinates. The result is clamped to the box; a zero-sized box yields `0`.
pub fn marker_position(pointer: Point, origin: Point, size: Dimensions) -> FocalPoint {
    FocalPoint::new(
        to_percentage(pointer.x - origin.x, size.width),
        to_percentage(pointer.y - origin.y, size.height),
    )
    .quantized()
}
