//! Named aspect ratios.
//!
//! The standard catalog is fixed. When an image is loaded, its own ratio is
//! merged in as an `"original"` entry, and standard entries whose ratio is
//! nearly the same are dropped so the ruler never shows two marks for one
//! ratio.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scale::LogScale;

/// Name of the entry holding the loaded image's own ratio.
pub const ORIGINAL: &str = "original";

/// Standard ratios as `(name, width, height)`.
const STANDARD_RATIOS: &[(&str, f64, f64)] = &[
    ("9:16", 9.0, 16.0),
    ("4:5", 4.0, 5.0),
    ("5:7", 5.0, 7.0),
    ("3:4", 3.0, 4.0),
    ("3:5", 3.0, 5.0),
    ("2:3", 2.0, 3.0),
    ("1:1", 1.0, 1.0),
    ("3:2", 3.0, 2.0),
    ("5:3", 5.0, 3.0),
    ("4:3", 4.0, 3.0),
    ("7:5", 7.0, 5.0),
    ("5:4", 5.0, 4.0),
    ("16:9", 16.0, 9.0),
    ("4:1", 4.0, 1.0),
];

/// A named aspect ratio and its position on the slider track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRatioEntry {
    /// Display name, e.g. `"16:9"` or `"original"`
    pub name: String,
    /// Width divided by height
    pub value: f64,
    /// Logarithmic track position
    pub position: f64,
}

impl AspectRatioEntry {
    pub fn is_original(&self) -> bool {
        self.name == ORIGINAL
    }
}

/// Ordered list of aspect ratios sharing one logarithmic scale.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectRatioCatalog {
    scale: LogScale,
    /// Entries before any original ratio was merged in
    base: Vec<AspectRatioEntry>,
    entries: Vec<AspectRatioEntry>,
}

impl Default for AspectRatioCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl AspectRatioCatalog {
    /// Build a catalog from named ratios, positioned on `scale` and sorted
    /// by value.
    pub fn new<N: Into<String>>(
        scale: LogScale,
        ratios: impl IntoIterator<Item = (N, f64)>,
    ) -> Self {
        let mut entries: Vec<AspectRatioEntry> = ratios
            .into_iter()
            .map(|(name, value)| AspectRatioEntry {
                name: name.into(),
                value,
                position: scale.position(value),
            })
            .collect();
        entries.sort_by(|a, b| a.value.total_cmp(&b.value));

        Self {
            scale,
            base: entries.clone(),
            entries,
        }
    }

    /// The standard catalog, spanning `9:16` to `4:1`.
    pub fn standard() -> Self {
        let ratios = STANDARD_RATIOS.iter().map(|&(name, w, h)| (name, w / h));
        let (min, max) = STANDARD_RATIOS
            .iter()
            .map(|&(_, w, h)| w / h)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        Self::new(LogScale::new(min, max), ratios)
    }

    /// Merge an image's own ratio into the catalog.
    ///
    /// The `"original"` entry is placed on this catalog's scale, so it lands
    /// outside `[0, 1]` when the image is narrower or wider than every
    /// standard ratio. Every other entry whose value lies within `tolerance`
    /// of `ratio` is removed. A previous `"original"` entry is replaced, and entries it
    /// had suppressed come back. Non-positive or non-finite ratios yield the
    /// catalog without any original.
    pub fn with_original(&self, ratio: f64, tolerance: f64) -> Self {
        if !ratio.is_finite() || ratio <= 0.0 {
            debug!(ratio, "invalid original aspect ratio, keeping catalog");
            return self.without_original();
        }

        let original = AspectRatioEntry {
            name: ORIGINAL.to_string(),
            value: ratio,
            position: self.scale.position(ratio),
        };

        let mut entries: Vec<AspectRatioEntry> = self
            .base
            .iter()
            .filter(|e| e.value < ratio - tolerance || e.value > ratio + tolerance)
            .cloned()
            .collect();
        entries.push(original);
        entries.sort_by(|a, b| a.value.total_cmp(&b.value));

        Self {
            scale: self.scale,
            base: self.base.clone(),
            entries,
        }
    }

    /// The catalog as it was before any original ratio was merged in.
    pub fn without_original(&self) -> Self {
        Self {
            scale: self.scale,
            base: self.base.clone(),
            entries: self.base.clone(),
        }
    }

    pub fn scale(&self) -> LogScale {
        self.scale
    }

    pub fn entries(&self) -> &[AspectRatioEntry] {
        &self.entries
    }

    pub fn first(&self) -> Option<&AspectRatioEntry> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&AspectRatioEntry> {
        self.entries.last()
    }

    /// The `"original"` entry, if an image ratio was merged in.
    pub fn original(&self) -> Option<&AspectRatioEntry> {
        self.entries.iter().find(|e| e.is_original())
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&AspectRatioEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
