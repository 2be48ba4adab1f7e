//! Aspect ratio catalog and slider
//!
//! Target aspect ratios are picked on a slider whose track is logarithmic:
//! `1:2` and `2:1` sit at the same distance from `1:1`, so portrait and
//! landscape ratios get equal room.
//!
//! ## Components
//!
//! - **LogScale**: maps ratios to `[0, 1]` track positions and back
//! - **AspectRatioCatalog**: the named ratios, plus the loaded image's own
//!   `"original"` ratio
//! - **RatioSlider**: binds an integer range input and arrow keys to the
//!   catalog

pub mod catalog;
pub mod scale;
pub mod slider;

pub use catalog::{AspectRatioCatalog, AspectRatioEntry, ORIGINAL};
pub use scale::LogScale;
pub use slider::{Key, RatioSlider, RulerMark};
