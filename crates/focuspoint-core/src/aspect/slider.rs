//! Range input and keyboard control over the aspect ratio catalog.
//!
//! The host renders an `<input type="range">` with integer steps. Track
//! positions are scaled by `precision` to get those integers, so the slider
//! moves smoothly across the logarithmic track. Arrow keys jump exactly to
//! the neighbouring catalog entry instead of stepping by one unit.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::AspectRatioCatalog;
use crate::to_percentage;

/// Positions closer than this count as the same track position.
const SNAP_EPSILON: f64 = 1e-9;

/// Keyboard input understood by the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            _ => None,
        }
    }
}

/// A catalog entry as drawn on the ruler below the slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerMark {
    pub name: String,
    /// Offset from the left end of the track, in percent
    pub offset: f64,
    pub original: bool,
}

/// Aspect ratio slider bound to a catalog.
#[derive(Debug, Clone)]
pub struct RatioSlider {
    catalog: AspectRatioCatalog,
    precision: u32,
    ratio: f64,
    position: f64,
}

impl RatioSlider {
    /// Create a slider over `catalog` showing `aspect_ratio`.
    ///
    /// `precision` is the number of input steps per unit of track position.
    pub fn new(catalog: AspectRatioCatalog, precision: u32, aspect_ratio: f64) -> Self {
        let mut slider = Self {
            catalog,
            precision: precision.max(1),
            ratio: 1.0,
            position: 0.0,
        };
        slider.set_aspect_ratio(aspect_ratio);
        slider
    }

    pub fn catalog(&self) -> &AspectRatioCatalog {
        &self.catalog
    }

    /// Swap the catalog, keeping the current aspect ratio.
    pub fn set_catalog(&mut self, catalog: AspectRatioCatalog) {
        self.catalog = catalog;
        self.position = self.catalog.scale().position(self.ratio);
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.ratio
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Move the slider to `aspect_ratio`. Non-positive or non-finite ratios
    /// are ignored.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f64) {
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            debug!(aspect_ratio, "invalid aspect ratio, slider unchanged");
            return;
        }
        self.ratio = aspect_ratio;
        self.position = self.catalog.scale().position(aspect_ratio);
    }

    fn to_input(&self, position: f64) -> i64 {
        (position * f64::from(self.precision)).round() as i64
    }

    /// Integer bounds of the range input.
    ///
    /// Spans the first to the last catalog entry, widened to include the
    /// current ratio when it lies outside the catalog.
    pub fn input_range(&self) -> (i64, i64) {
        let first = self.catalog.first().map_or(0.0, |e| e.position);
        let last = self.catalog.last().map_or(1.0, |e| e.position);
        (
            self.to_input(first.min(self.position)),
            self.to_input(last.max(self.position)),
        )
    }

    /// Current integer value of the range input.
    pub fn input_value(&self) -> i64 {
        self.to_input(self.position)
    }

    /// Handle a change of the range input. Returns the new aspect ratio.
    pub fn on_input(&mut self, input: i64) -> f64 {
        let (min, max) = self.input_range();
        let position = input.clamp(min, max) as f64 / f64::from(self.precision);

        self.position = position;
        self.ratio = self.catalog.scale().value(position);
        self.ratio
    }

    /// Handle an arrow key.
    ///
    /// Jumps to the exact position of the next entry in the key's direction
    /// and returns its ratio, or `None` when no entry lies that way.
    pub fn on_key(&mut self, key: Key) -> Option<f64> {
        let current = self.position;
        let entries = self.catalog.entries();

        let target = match key {
            Key::Right => entries.iter().find(|e| e.position > current + SNAP_EPSILON),
            Key::Left => entries.iter().rev().find(|e| e.position < current - SNAP_EPSILON),
        }?;

        debug!(name = %target.name, ?key, "snapped to catalog entry");
        self.position = target.position;
        self.ratio = target.value;
        Some(self.ratio)
    }

    /// Track position of the `"original"` entry, for drawing its marker.
    pub fn original_position(&self) -> Option<f64> {
        self.catalog.original().map(|e| e.position)
    }

    /// Ruler marks for every catalog entry.
    pub fn marks(&self) -> Vec<RulerMark> {
        let first = self.catalog.first().map_or(0.0, |e| e.position);
        let last = self.catalog.last().map_or(1.0, |e| e.position);

        self.catalog
            .entries()
            .iter()
            .map(|e| RulerMark {
                name: e.name.clone(),
                offset: to_percentage(e.position - first, last - first),
                original: e.is_original(),
            })
            .collect()
    }
}
