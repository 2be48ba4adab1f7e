//! Editor box sizing.

/// Share of the squared viewport height the editor box should cover.
pub const IMAGE_AREA_RATIO: f64 = 2.0 / 5.0;

/// Height of the editor box in `vmin` units for a target aspect ratio.
///
/// The box keeps a constant area of `viewport² * IMAGE_AREA_RATIO` whatever
/// the ratio, so switching between portrait and landscape previews does not
/// make the image jump in size. The viewport height cancels out, leaving
/// `100 * sqrt(IMAGE_AREA_RATIO / aspect_ratio)`.
///
/// Returns `None` for non-positive or non-finite ratios.
pub fn container_height_vmin(aspect_ratio: f64) -> Option<f64> {
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return None;
    }
    Some((IMAGE_AREA_RATIO / aspect_ratio).sqrt() * 100.0)
}
