//! Shared test utilities for image-based unit tests.

use image::{Rgb, RgbImage};

/// Render a deterministic, horizontally asymmetric base image so that
/// mirroring and marker placement are both detectable in tests.
pub(crate) fn synthetic_base_image(w: u32, h: u32) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + 2 * y) % 256) as u8])
    })
}
