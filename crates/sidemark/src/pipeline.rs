//! Overlay pipeline: copy/mirror the base image, run accepted components
//! through the geometry resolver and gradient compositor, encode the
//! result.
//!
//! Rendering is synchronous and per-call: every call owns a private copy
//! of the base image and mutates only that copy, so concurrent renders
//! need no locking. Malformed component records degrade per-record; a
//! missing or undecodable base image is fatal for the call.

use std::io::Cursor;

use image::RgbImage;

use crate::assessment::DamageAssessment;
use crate::base_image::BaseImageSource;
use crate::error::RenderError;
use crate::filter::{should_render, LateralityRule};
use crate::geometry::{resolve, ScalingProfile, ViewSide};
use crate::gradient::{draw_marker, MarkerStyle};

/// Per-call rendering configuration.
///
/// Marker sizing and laterality policy are explicit; the engine never
/// infers them from the shape of the request.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderConfig {
    pub profile: ScalingProfile,
    pub laterality: LateralityRule,
    pub style: MarkerStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            profile: ScalingProfile::SIDE_OVERLAY,
            laterality: LateralityRule::default(),
            style: MarkerStyle::default(),
        }
    }
}

impl RenderConfig {
    /// Configuration for the impact-visualization path: compact markers.
    pub fn impact() -> Self {
        Self {
            profile: ScalingProfile::IMPACT,
            ..Self::default()
        }
    }
}

/// Render a damage overlay onto a copy of `base`.
///
/// The base buffer is never mutated. For [`ViewSide::Right`] the copy is
/// mirrored horizontally before any marker is drawn. Components are
/// processed in assessment order, so later markers composite on top of
/// earlier ones.
pub fn render(
    base: &RgbImage,
    side: ViewSide,
    assessment: &DamageAssessment,
    config: &RenderConfig,
) -> RgbImage {
    let mut working = match side {
        ViewSide::Left => base.clone(),
        ViewSide::Right => image::imageops::flip_horizontal(base),
    };
    let image_width = working.width();

    let mut n_drawn = 0usize;
    for item in &assessment.sections_of_interest {
        if !should_render(
            config.laterality,
            side,
            &item.component,
            item.percentage_damage,
            item.bbox.as_ref(),
        ) {
            tracing::debug!(component = %item.component, "component filtered out");
            continue;
        }
        let Some(bbox) = item.bbox.as_ref() else {
            continue;
        };

        let geom = resolve(side, bbox, item.percentage_damage, image_width, &config.profile);
        draw_marker(
            &mut working,
            geom.center_x,
            geom.center_y,
            geom.radius,
            &config.style,
        );
        n_drawn += 1;
    }

    tracing::info!(
        side = side.label(),
        n_components = assessment.sections_of_interest.len(),
        n_drawn,
        "overlay render complete"
    );
    working
}

/// Load a named base image from `source` and render onto it.
///
/// Failure to find or decode the base image aborts the call; no partial
/// output is produced.
pub fn render_named(
    source: &dyn BaseImageSource,
    name: &str,
    side: ViewSide,
    assessment: &DamageAssessment,
    config: &RenderConfig,
) -> Result<RgbImage, RenderError> {
    let base = source.load(name)?;
    Ok(render(&base, side, assessment, config))
}

/// Output raster encodings supported by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    fn to_image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

/// Encode a rendered buffer into an in-memory byte stream.
pub fn encode(buffer: &RgbImage, format: OutputFormat) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    buffer.write_to(&mut Cursor::new(&mut bytes), format.to_image_format())?;
    Ok(bytes)
}

/// Filename hint embedding the rendered side, matching the download names
/// used by the assessment frontend.
pub fn output_filename(side: ViewSide, format: OutputFormat) -> String {
    format!(
        "damage_overlay_{}_side.{}",
        side.label(),
        format.extension()
    )
}
