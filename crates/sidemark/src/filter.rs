//! Per-component render gating.
//!
//! Components are filtered before any geometry is computed: zero damage,
//! missing or degenerate bounding boxes, and components named for the
//! wrong side of the vehicle are all dropped silently.

use crate::assessment::BoundingBox;
use crate::geometry::ViewSide;

const LEFT_TAG: &str = "_left_";
const RIGHT_TAG: &str = "_right_";

/// How component-name laterality interacts with the requested view side.
///
/// Components whose names contain neither `_left_` nor `_right_` are
/// side-neutral and pass either rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LateralityRule {
    /// Render components named for the requested side: a left view drops
    /// `_right_` components and vice versa. This is the default.
    #[default]
    SameSide,
    /// Render components named for the mirrored side: a right view built
    /// from left-labeled data drops `_right_` components and keeps
    /// `_left_` ones at their mirrored positions.
    OppositeSide,
}

/// Decide whether one component should be rendered on the requested side.
///
/// Rules, in order: reject non-positive damage, reject absent or
/// degenerate bounding boxes, then apply the laterality rule.
pub fn should_render(
    rule: LateralityRule,
    side: ViewSide,
    component: &str,
    percentage_damage: f64,
    bbox: Option<&BoundingBox>,
) -> bool {
    if percentage_damage <= 0.0 {
        return false;
    }
    let Some(bbox) = bbox else {
        return false;
    };
    if bbox.is_degenerate() {
        return false;
    }

    let rejected_tag = match (rule, side) {
        (LateralityRule::SameSide, ViewSide::Left) => RIGHT_TAG,
        (LateralityRule::SameSide, ViewSide::Right) => LEFT_TAG,
        (LateralityRule::OppositeSide, ViewSide::Left) => LEFT_TAG,
        (LateralityRule::OppositeSide, ViewSide::Right) => RIGHT_TAG,
    };
    !component.contains(rejected_tag)
}
