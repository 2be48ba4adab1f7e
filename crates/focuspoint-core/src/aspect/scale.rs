//! Logarithmic ratio scale.

use serde::{Deserialize, Serialize};

/// Logarithmic mapping between aspect ratios and track positions.
///
/// `min` maps to position `0.0` and `max` to `1.0`. Ratios outside
/// `[min, max]` map outside `[0, 1]`.
///
/// Formula:
///
/// ```text
/// position = (ln(value) - ln(min)) / (ln(max) - ln(min))
/// value    = exp(position * (ln(max) - ln(min)) + ln(min))
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogScale {
    pub min: f64,
    pub max: f64,
}

impl LogScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether the scale spans a positive, non-empty range.
    pub fn is_valid(&self) -> bool {
        self.min > 0.0 && self.max > self.min && self.max.is_finite()
    }

    fn span(&self) -> f64 {
        self.max.ln() - self.min.ln()
    }

    /// Track position of an aspect ratio.
    ///
    /// Returns `0.0` for a degenerate scale or a non-positive ratio.
    pub fn position(&self, value: f64) -> f64 {
        if !self.is_valid() || value <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        (value.ln() - self.min.ln()) / self.span()
    }

    /// Aspect ratio at a track position.
    ///
    /// Returns `min` for a degenerate scale.
    pub fn value(&self, position: f64) -> f64 {
        if !self.is_valid() {
            return self.min;
        }
        (position * self.span() + self.min.ln()).exp()
    }
}
