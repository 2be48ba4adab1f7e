//! Geometry of a cover-fitted image inside its editor box.
//!
//! The editor renders the image with `object-fit: cover`: the image is scaled
//! up until it covers the box, and whatever overflows along one axis is
//! cropped away. This module computes that scaled size, how much of it is
//! cropped, and the box size used for a given aspect ratio.
//!
//! # Coordinate System
//!
//! - Dimensions are CSS pixels
//! - Crop amounts are reported both in pixels and as a percentage of the
//!   scaled image size
//! - Only one axis is ever cropped, since the scaled image matches the box
//!   exactly along the other

mod contain;
mod crop_delta;
pub mod layout;

pub use contain::contain_scale;
pub use crop_delta::{
    crop_axis_delta, AxisDelta, CropAxis, CropAxisDelta, CropDeltaTracker, GhostOffset,
};
