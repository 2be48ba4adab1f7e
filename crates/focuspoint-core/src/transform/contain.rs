//! Cover-fit scaling.

use crate::Dimensions;

/// Scale `source` so it just covers `rect` while keeping its aspect ratio.
///
/// The result matches `rect` exactly along one axis and is at least as large
/// along the other.
///
/// # Arguments
///
/// * `source` - Intrinsic image size
/// * `rect` - Box the image has to cover
///
/// # Behavior
///
/// - A relatively wider source pins the height to `rect.height`
/// - Otherwise the width is pinned to `rect.width`
/// - When the source dimension used as divisor is `0`, the derived
///   dimension is `0` instead of NaN or infinity
///
/// # Example
///
/// ```
/// use focuspoint_core::{contain_scale, Dimensions};
///
/// let scaled = contain_scale(Dimensions::new(800.0, 600.0), Dimensions::new(400.0, 400.0));
/// assert_eq!(scaled.height, 400.0);
/// assert!((scaled.width - 533.33).abs() < 0.01);
/// ```
pub fn contain_scale(source: Dimensions, rect: Dimensions) -> Dimensions {
    let source_ratio = source.width / source.height;
    let rect_ratio = rect.width / rect.height;

    // NaN ratios fall through to the width-pinned branch
    if source_ratio > rect_ratio {
        let width = if source.height > 0.0 {
            rect.height * source.width / source.height
        } else {
            0.0
        };
        Dimensions::new(width, rect.height)
    } else {
        let height = if source.width > 0.0 {
            rect.width * source.height / source.width
        } else {
            0.0
        };
        Dimensions::new(rect.width, height)
    }
}
