//! View-side mirroring and marker sizing.

use crate::assessment::BoundingBox;

/// Which side of the vehicle the rendered view shows.
///
/// `Left` is the untransformed orientation of the base photograph; `Right`
/// is its horizontal mirror about the vertical midline. The vertical axis
/// is never flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewSide {
    #[default]
    Left,
    Right,
}

impl ViewSide {
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Marker-size scaling profile: base ring radius plus damage-proportional
/// growth.
///
/// `radius = min_ring_radius + round(min(w, h) * percentage / damage_scaling_factor)`
///
/// Two named profiles exist; callers select one explicitly rather than the
/// engine inferring it from request shape.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScalingProfile {
    /// Radius drawn for a barely-damaged component, in pixels.
    pub min_ring_radius: i32,
    /// Divisor applied to `percentage_damage` before scaling by the
    /// bounding box's smaller extent.
    pub damage_scaling_factor: f64,
}

impl ScalingProfile {
    /// General side-overlay profile: large markers.
    pub const SIDE_OVERLAY: Self = Self {
        min_ring_radius: 100,
        damage_scaling_factor: 10.0,
    };

    /// Impact-visualization profile: compact markers.
    pub const IMPACT: Self = Self {
        min_ring_radius: 24,
        damage_scaling_factor: 100.0,
    };

    /// Marker radius for a bounding box and damage percentage.
    pub fn radius_for(&self, bbox: &BoundingBox, percentage_damage: f64) -> i32 {
        let max_dim = bbox.w.min(bbox.h) as f64;
        let scaled = max_dim * (percentage_damage / self.damage_scaling_factor);
        self.min_ring_radius + scaled.round() as i32
    }
}

/// Resolved marker placement on the working buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerGeometry {
    pub center_x: i32,
    pub center_y: i32,
    pub radius: i32,
}

/// Compute marker center and radius for one component.
///
/// For [`ViewSide::Right`] the bounding box x is flipped about the image's
/// vertical midline (`flipped_x = image_width - x - w`) before taking the
/// centroid; y is unchanged. Centers may land outside the buffer; the
/// compositor clips silently.
pub fn resolve(
    side: ViewSide,
    bbox: &BoundingBox,
    percentage_damage: f64,
    image_width: u32,
    profile: &ScalingProfile,
) -> MarkerGeometry {
    let x = match side {
        ViewSide::Left => bbox.x as i64,
        ViewSide::Right => image_width as i64 - bbox.x as i64 - bbox.w as i64,
    };
    let center_x = x + (bbox.w / 2) as i64;
    let center_y = bbox.y as i64 + (bbox.h / 2) as i64;

    MarkerGeometry {
        center_x: clamp_to_i32(center_x),
        center_y: clamp_to_i32(center_y),
        radius: profile.radius_for(bbox, percentage_damage),
    }
}

fn clamp_to_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel_bbox() -> BoundingBox {
        BoundingBox::new(150, 320, 80, 80)
    }

    #[test]
    fn left_center_is_bbox_centroid() {
        let g = resolve(
            ViewSide::Left,
            &wheel_bbox(),
            20.0,
            600,
            &ScalingProfile::IMPACT,
        );
        assert_eq!((g.center_x, g.center_y), (190, 360));
    }

    #[test]
    fn right_center_mirrors_about_midline() {
        let g = resolve(
            ViewSide::Right,
            &wheel_bbox(),
            20.0,
            600,
            &ScalingProfile::IMPACT,
        );
        // flipped_x = 600 - 150 - 80 = 370; center = 370 + 40
        assert_eq!((g.center_x, g.center_y), (410, 360));
    }

    #[test]
    fn mirroring_never_touches_y() {
        let bbox = BoundingBox::new(37, 123, 51, 33);
        let left = resolve(ViewSide::Left, &bbox, 50.0, 640, &ScalingProfile::IMPACT);
        let right = resolve(ViewSide::Right, &bbox, 50.0, 640, &ScalingProfile::IMPACT);
        assert_eq!(left.center_y, right.center_y);
        assert_ne!(left.center_x, right.center_x);
    }

    #[test]
    fn impact_radius_matches_reference_values() {
        let bbox = wheel_bbox(); // min(w, h) = 80
        assert_eq!(ScalingProfile::IMPACT.radius_for(&bbox, 50.0), 64);
        assert_eq!(ScalingProfile::IMPACT.radius_for(&bbox, 100.0), 104);
    }

    #[test]
    fn side_overlay_radius_uses_coarser_divisor() {
        let bbox = wheel_bbox();
        // 100 + round(80 * 50 / 10) = 500
        assert_eq!(ScalingProfile::SIDE_OVERLAY.radius_for(&bbox, 50.0), 500);
    }

    #[test]
    fn radius_is_monotonic_in_damage() {
        let bbox = BoundingBox::new(0, 0, 63, 91);
        for profile in [ScalingProfile::SIDE_OVERLAY, ScalingProfile::IMPACT] {
            let mut prev = i32::MIN;
            for pct in 0..=100 {
                let r = profile.radius_for(&bbox, pct as f64);
                assert!(r >= prev, "radius decreased at {pct}%");
                prev = r;
            }
        }
    }

    #[test]
    fn oversized_bbox_resolves_without_overflow() {
        // x + w beyond the image width: mirrored x goes negative.
        let bbox = BoundingBox::new(550, 10, 200, 40);
        let g = resolve(ViewSide::Right, &bbox, 10.0, 600, &ScalingProfile::IMPACT);
        assert_eq!(g.center_x, 600 - 550 - 200 + 100);
        assert_eq!(g.center_y, 30);
    }
}
