//! Radial-gradient marker compositing.
//!
//! A marker is approximated by `steps` concentric filled discs drawn
//! outermost-first onto an overlay copy of the buffer: each successive
//! disc is smaller and darker, so the finished stack fades from the full
//! marker color at the rim toward black at the center. The overlay is then
//! alpha-blended onto the real buffer so the marker stays translucent over
//! the photograph.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

/// Visual parameters for damage markers.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarkerStyle {
    /// Marker color at the strongest ring.
    pub color: [u8; 3],
    /// Number of concentric discs approximating the radial fade.
    pub steps: u32,
    /// Opacity of the finished marker layer over the photograph, in [0, 1].
    pub alpha: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            steps: 50,
            alpha: 0.8,
        }
    }
}

/// Draw one radially faded marker onto `buffer` in place.
///
/// For step `i` counting down from `steps` to 1, with `t = i / steps`:
/// the disc radius is `round(max_radius * t)` and each color channel is
/// `round(channel * t)`. Discs overwrite the overlay; the smoothing comes
/// from stacking, not per-pixel math. `max_radius <= 0` has no visible
/// effect, and centers outside the buffer clip silently.
pub fn draw_marker(
    buffer: &mut RgbImage,
    center_x: i32,
    center_y: i32,
    max_radius: i32,
    style: &MarkerStyle,
) {
    if max_radius <= 0 || style.steps == 0 {
        return;
    }

    let mut overlay = buffer.clone();
    let n = style.steps;
    for i in (1..=n).rev() {
        let t = i as f32 / n as f32;
        let radius = (max_radius as f32 * t).round() as i32;
        let color = Rgb([
            scale_channel(style.color[0], t),
            scale_channel(style.color[1], t),
            scale_channel(style.color[2], t),
        ]);
        draw_filled_circle_mut(&mut overlay, (center_x, center_y), radius, color);
    }

    blend_onto(buffer, &overlay, style.alpha);
}

fn scale_channel(channel: u8, t: f32) -> u8 {
    (channel as f32 * t).round() as u8
}

/// `base = round(alpha * overlay + (1 - alpha) * base)`, per channel.
fn blend_onto(base: &mut RgbImage, overlay: &RgbImage, alpha: f32) {
    let alpha = alpha.clamp(0.0, 1.0);
    for (dst, src) in base.pixels_mut().zip(overlay.pixels()) {
        for ch in 0..3 {
            let blended = alpha * src[ch] as f32 + (1.0 - alpha) * dst[ch] as f32;
            dst[ch] = blended.round() as u8;
        }
    }
}
