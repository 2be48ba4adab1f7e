//! Editing session.
//!
//! [`EditorSession`] owns everything that belongs to one image in the
//! editor: the focal point, the chosen aspect ratio, the crop delta and the
//! catalog with the image's own ratio merged in. Loading a new image starts a
//! new generation; resize notifications from an older generation are
//! dropped.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::aspect::{AspectRatioCatalog, Key, RatioSlider};
use crate::config::EditorConfig;
use crate::drag::{marker_position, DragController, PointerCapture};
use crate::position::{self, PositionError};
use crate::snippet::crop_snippet;
use crate::transform::{CropAxisDelta, CropDeltaTracker, GhostOffset};
use crate::{Dimensions, FocalPoint, Point};

/// Error type for session updates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// The stored focal point does not parse.
    #[error("Invalid object position: {0}")]
    Position(#[from] PositionError),

    /// Aspect ratios must be positive and finite.
    #[error("Invalid aspect ratio: {0}")]
    InvalidAspectRatio(f64),
}

/// Values worth keeping between visits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Focal point as a CSS `object-position` value
    pub object_position: String,
    pub aspect_ratio: f64,
}

/// Token tying resize notifications to the image they were registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSubscription {
    generation: u64,
}

/// State of the editor for the image currently shown.
#[derive(Debug, Clone)]
pub struct EditorSession {
    config: EditorConfig,
    focal_point: FocalPoint,
    standard: AspectRatioCatalog,
    slider: RatioSlider,
    tracker: CropDeltaTracker,
    drag: DragController,
    generation: u64,
    subscribed: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSession {
    /// Create a session with no image loaded.
    pub fn new(config: EditorConfig) -> Self {
        let standard = AspectRatioCatalog::standard();
        let slider = RatioSlider::new(
            standard.clone(),
            config.slider_precision,
            config.default_aspect_ratio,
        );

        Self {
            focal_point: config.default_focal_point.quantized(),
            tracker: CropDeltaTracker::new(config.delta_threshold_px),
            drag: DragController::new(),
            generation: 0,
            subscribed: false,
            standard,
            slider,
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn focal_point(&self) -> FocalPoint {
        self.focal_point
    }

    /// Focal point as a CSS `object-position` value.
    pub fn object_position(&self) -> String {
        position::encode(self.focal_point)
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.slider.aspect_ratio()
    }

    pub fn catalog(&self) -> &AspectRatioCatalog {
        self.slider.catalog()
    }

    pub fn slider(&self) -> &RatioSlider {
        &self.slider
    }

    pub fn intrinsic_size(&self) -> Option<Dimensions> {
        self.tracker.intrinsic()
    }

    pub fn crop_delta(&self) -> Option<&CropAxisDelta> {
        self.tracker.delta()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// CSS cursor for the editor box.
    pub fn cursor(&self) -> &'static str {
        self.tracker.delta().map_or("crosshair", CropAxisDelta::cursor)
    }

    /// Ghost image translation for the current focal point.
    pub fn ghost_offset(&self) -> GhostOffset {
        self.tracker
            .delta()
            .map(|d| d.ghost_offset(self.focal_point))
            .unwrap_or_default()
    }

    /// Show a new image.
    ///
    /// Resets the focal point, merges the image's ratio into the catalog as
    /// `"original"` and abandons any drag on the previous image. The aspect
    /// ratio is kept. Resize notifications must carry the returned token.
    pub fn load_image(&mut self, intrinsic: Dimensions) -> ResizeSubscription {
        self.begin_generation();

        let catalog = match intrinsic.aspect_ratio() {
            Some(ratio) => self
                .standard
                .with_original(ratio, self.config.catalog_tolerance),
            None => {
                warn!(?intrinsic, "image has no usable aspect ratio");
                self.standard.clone()
            }
        };
        self.slider.set_catalog(catalog);
        self.tracker.set_intrinsic(intrinsic);
        self.subscribed = true;

        debug!(generation = self.generation, ?intrinsic, "image loaded");
        ResizeSubscription {
            generation: self.generation,
        }
    }

    /// The upload collaborator could not load the image.
    pub fn image_failed(&mut self) {
        warn!(generation = self.generation, "image failed to load");
        self.clear_image();
    }

    /// Remove the image from the editor.
    pub fn unload_image(&mut self) {
        debug!(generation = self.generation, "image unloaded");
        self.clear_image();
    }

    fn clear_image(&mut self) {
        self.begin_generation();
        self.slider.set_catalog(self.standard.clone());
    }

    fn begin_generation(&mut self) {
        self.generation += 1;
        self.subscribed = false;
        self.focal_point = self.config.default_focal_point.quantized();
        self.tracker.reset();
        self.drag.reset();
    }

    /// Whether `subscription` belongs to the image currently shown.
    pub fn is_current(&self, subscription: ResizeSubscription) -> bool {
        self.subscribed && subscription.generation == self.generation
    }

    /// Handle a resize of the editor box.
    ///
    /// Returns the new crop delta, or `None` when the token is stale.
    pub fn on_resize(
        &mut self,
        subscription: ResizeSubscription,
        rect: Dimensions,
    ) -> Option<CropAxisDelta> {
        if !self.is_current(subscription) {
            debug!(
                stale = subscription.generation,
                current = self.generation,
                "resize for a discarded image, ignoring"
            );
            return None;
        }
        self.tracker.observe(rect).copied()
    }

    /// Start dragging the image. Returns `true` when a drag started.
    pub fn pointer_down<C: PointerCapture + ?Sized>(
        &mut self,
        target: &mut C,
        pointer_id: i32,
        pointer: Point,
    ) -> bool {
        self.drag
            .pointer_down(target, pointer_id, pointer, self.focal_point)
    }

    /// Track a drag. Returns the updated focal point when it changed.
    pub fn pointer_move<C: PointerCapture + ?Sized>(
        &mut self,
        target: &C,
        pointer_id: i32,
        pointer: Point,
    ) -> Option<FocalPoint> {
        let next = self
            .drag
            .pointer_move(target, pointer_id, pointer, self.tracker.delta())?;
        self.focal_point = next;
        Some(next)
    }

    pub fn pointer_up<C: PointerCapture + ?Sized>(&mut self, target: &mut C, pointer_id: i32) {
        self.drag.pointer_up(target, pointer_id);
    }

    pub fn pointer_cancel<C: PointerCapture + ?Sized>(&mut self, target: &mut C, pointer_id: i32) {
        self.drag.pointer_cancel(target, pointer_id);
    }

    /// Move the focal point to the pointer while dragging the marker itself.
    pub fn marker_drag(&mut self, pointer: Point, origin: Point, size: Dimensions) -> FocalPoint {
        self.focal_point = marker_position(pointer, origin, size);
        self.focal_point
    }

    /// Pick an aspect ratio directly, e.g. from a preset button.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f64) -> Result<(), SessionError> {
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(SessionError::InvalidAspectRatio(aspect_ratio));
        }
        self.slider.set_aspect_ratio(aspect_ratio);
        Ok(())
    }

    /// Handle the range input. Returns the new aspect ratio.
    pub fn slider_input(&mut self, input: i64) -> f64 {
        self.slider.on_input(input)
    }

    /// Handle an arrow key on the slider.
    pub fn slider_key(&mut self, key: Key) -> Option<f64> {
        self.slider.on_key(key)
    }

    /// HTML snippet cropping `src` around the current focal point.
    pub fn snippet(&self, src: &str) -> String {
        crop_snippet(src, &self.object_position())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            object_position: self.object_position(),
            aspect_ratio: self.aspect_ratio(),
        }
    }

    /// Apply a stored snapshot.
    ///
    /// Both values are validated before either is applied. Coordinates
    /// outside `[0, 100]` are clamped.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) -> Result<(), SessionError> {
        let point = position::decode(&snapshot.object_position)?;
        if !snapshot.aspect_ratio.is_finite() || snapshot.aspect_ratio <= 0.0 {
            return Err(SessionError::InvalidAspectRatio(snapshot.aspect_ratio));
        }

        self.focal_point = point.quantized();
        self.slider.set_aspect_ratio(snapshot.aspect_ratio);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::ORIGINAL;
    use crate::drag::CaptureError;
    use crate::transform::CropAxis;

    #[derive(Default)]
    struct TestTarget {
        captured: Option<i32>,
    }

    impl PointerCapture for TestTarget {
        fn capture(&mut self, pointer_id: i32) -> Result<(), CaptureError> {
            self.captured = Some(pointer_id);
            Ok(())
        }

        fn release(&mut self, _pointer_id: i32) {
            self.captured = None;
        }

        fn has_capture(&self, pointer_id: i32) -> bool {
            self.captured == Some(pointer_id)
        }
    }

    fn loaded_session() -> (EditorSession, ResizeSubscription) {
        let mut session = EditorSession::default();
        let sub = session.load_image(Dimensions::new(800.0, 600.0));
        (session, sub)
    }

    #[test]
    fn test_new_session() {
        let session = EditorSession::default();
        assert_eq!(session.object_position(), "50.00% 50.00%");
        assert_eq!(session.aspect_ratio(), 1.0);
        assert!(session.crop_delta().is_none());
        assert!(session.catalog().original().is_none());
        assert_eq!(session.cursor(), "crosshair");
    }

    #[test]
    fn test_load_image_merges_original() {
        let (session, _) = loaded_session();
        let original = session.catalog().original().unwrap();
        assert!((original.value - 4.0 / 3.0).abs() < 1e-12);
        // 4:3 is the same ratio and yields to the original
        assert!(session.catalog().get("4:3").is_none());
        assert_eq!(session.intrinsic_size(), Some(Dimensions::new(800.0, 600.0)));
    }

    #[test]
    fn test_resize_and_drag() {
        let (mut session, sub) = loaded_session();
        let delta = session
            .on_resize(sub, Dimensions::new(400.0, 400.0))
            .unwrap();
        assert_eq!(delta.changed_axis, Some(CropAxis::Width));
        assert_eq!(session.cursor(), "col-resize");

        let mut target = TestTarget::default();
        assert!(session.pointer_down(&mut target, 1, Point::new(0.0, 0.0)));
        let next = session
            .pointer_move(&target, 1, Point::new(-delta.width.px / 2.0, 0.0))
            .unwrap();
        session.pointer_up(&mut target, 1);

        assert_eq!(next, FocalPoint::new(100.0, 50.0));
        assert_eq!(session.object_position(), "100.00% 50.00%");
        assert!(!session.is_dragging());
        assert!(target.captured.is_none());
    }

    #[test]
    fn test_drag_before_resize_is_ignored() {
        let (mut session, _) = loaded_session();
        let mut target = TestTarget::default();

        assert!(session.pointer_down(&mut target, 1, Point::new(0.0, 0.0)));
        assert!(session.pointer_move(&target, 1, Point::new(50.0, 0.0)).is_none());
        assert_eq!(session.focal_point(), FocalPoint::default());
    }

    #[test]
    fn test_stale_subscription_is_ignored() {
        let (mut session, old) = loaded_session();
        let new = session.load_image(Dimensions::new(600.0, 800.0));

        assert!(!session.is_current(old));
        assert!(session.on_resize(old, Dimensions::new(400.0, 400.0)).is_none());
        assert!(session.crop_delta().is_none());

        let delta = session.on_resize(new, Dimensions::new(400.0, 400.0)).unwrap();
        assert_eq!(delta.changed_axis, Some(CropAxis::Height));
    }

    #[test]
    fn test_new_image_resets_focal_point_and_drag() {
        let (mut session, sub) = loaded_session();
        session.on_resize(sub, Dimensions::new(400.0, 400.0));
        session.marker_drag(Point::new(10.0, 10.0), Point::default(), Dimensions::new(100.0, 100.0));
        let mut target = TestTarget::default();
        session.pointer_down(&mut target, 1, Point::default());
        session.set_aspect_ratio(2.0).unwrap();

        session.load_image(Dimensions::new(1000.0, 1000.0));

        assert_eq!(session.focal_point(), FocalPoint::default());
        assert!(!session.is_dragging());
        assert_eq!(session.aspect_ratio(), 2.0);
        assert!(session.catalog().get("1:1").is_none());
        assert!(session.catalog().get("4:3").is_some());
    }

    #[test]
    fn test_image_failed_invalidates_subscription() {
        let (mut session, sub) = loaded_session();
        session.image_failed();

        assert!(!session.is_current(sub));
        assert!(session.on_resize(sub, Dimensions::new(400.0, 400.0)).is_none());
        assert!(session.intrinsic_size().is_none());
        assert!(session.catalog().original().is_none());
    }

    #[test]
    fn test_unload_image() {
        let (mut session, sub) = loaded_session();
        session.unload_image();
        assert!(!session.is_current(sub));
        assert_eq!(session.catalog(), &AspectRatioCatalog::standard());
    }

    #[test]
    fn test_zero_height_image_has_no_original() {
        let mut session = EditorSession::default();
        let sub = session.load_image(Dimensions::new(100.0, 0.0));
        assert!(session.is_current(sub));
        assert!(session.catalog().original().is_none());
    }

    #[test]
    fn test_marker_drag() {
        let mut session = EditorSession::default();
        let p = session.marker_drag(
            Point::new(130.0, 60.0),
            Point::new(100.0, 50.0),
            Dimensions::new(200.0, 100.0),
        );
        assert_eq!(p, FocalPoint::new(15.0, 10.0));
        assert_eq!(session.object_position(), "15.00% 10.00%");
    }

    #[test]
    fn test_ghost_offset_follows_focal_point() {
        let (mut session, sub) = loaded_session();
        assert_eq!(session.ghost_offset(), GhostOffset::default());

        session.on_resize(sub, Dimensions::new(400.0, 400.0));
        session.marker_drag(Point::new(100.0, 50.0), Point::default(), Dimensions::new(100.0, 100.0));

        let offset = session.ghost_offset();
        assert!((offset.x + 25.0).abs() < 1e-9);
        assert_eq!(offset.y, 0.0);
    }

    #[test]
    fn test_set_aspect_ratio_rejects_invalid() {
        let mut session = EditorSession::default();
        assert_eq!(
            session.set_aspect_ratio(0.0),
            Err(SessionError::InvalidAspectRatio(0.0))
        );
        assert!(session.set_aspect_ratio(f64::INFINITY).is_err());
        assert_eq!(session.aspect_ratio(), 1.0);
    }

    #[test]
    fn test_slider_keys_reach_original() {
        let (mut session, _) = loaded_session();
        let ratio = session.slider_key(Key::Right).unwrap();

        assert_eq!(ratio, 5.0 / 4.0);
        let ratio = session.slider_key(Key::Right).unwrap();
        assert_eq!(session.catalog().get(ORIGINAL).unwrap().value, ratio);
    }

    #[test]
    fn test_slider_input() {
        let mut session = EditorSession::default();
        let ratio = session.slider_input(0);
        assert!((ratio - 9.0 / 16.0).abs() < 1e-9);
        assert_eq!(session.aspect_ratio(), ratio);
    }

    #[test]
    fn test_snippet() {
        let session = EditorSession::default();
        assert!(session
            .snippet("cat.jpg")
            .contains("object-position: 50.00% 50.00%;"));
    }

    #[test]
    fn test_snapshot_restore() {
        let mut session = EditorSession::default();
        session.marker_drag(Point::new(1.0, 2.0), Point::default(), Dimensions::new(3.0, 3.0));
        session.set_aspect_ratio(1.5).unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.object_position, "33.33% 66.67%");

        let mut restored = EditorSession::default();
        restored.restore(&snapshot).unwrap();
        assert_eq!(restored.snapshot(), snapshot);
    }

    #[test]
    fn test_restore_clamps_out_of_range() {
        let mut session = EditorSession::default();
        session
            .restore(&SessionSnapshot {
                object_position: "120.00% -5.00%".to_string(),
                aspect_ratio: 1.0,
            })
            .unwrap();
        assert_eq!(session.focal_point(), FocalPoint::new(100.0, 0.0));
    }

    #[test]
    fn test_restore_error_leaves_session_untouched() {
        let mut session = EditorSession::default();
        session.set_aspect_ratio(2.0).unwrap();

        let err = session
            .restore(&SessionSnapshot {
                object_position: "10% 20".to_string(),
                aspect_ratio: 1.0,
            })
            .unwrap_err();
        assert!(matches!(err, SessionError::Position(PositionError::MissingPercent(_))));

        let err = session
            .restore(&SessionSnapshot {
                object_position: "10.00% 20.00%".to_string(),
                aspect_ratio: -1.0,
            })
            .unwrap_err();
        assert_eq!(err, SessionError::InvalidAspectRatio(-1.0));

        assert_eq!(session.focal_point(), FocalPoint::default());
        assert_eq!(session.aspect_ratio(), 2.0);
    }

    #[test]
    fn test_error_display() {
        let err = SessionError::InvalidAspectRatio(0.0);
        assert_eq!(err.to_string(), "Invalid aspect ratio: 0");
    }
}
