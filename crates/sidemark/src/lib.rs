//! sidemark — damage overlay rendering for vehicle side-profile photographs.
//!
//! Given a structured damage assessment (named components, bounding boxes,
//! damage percentages), sidemark composites translucent radial-gradient
//! markers onto a fixed reference photograph of a vehicle side profile and
//! encodes the result. The pipeline stages are:
//!
//! 1. **Filter** – per-component gating: damage percentage, bounding box
//!    validity, and a laterality rule matching component names against the
//!    requested view side.
//! 2. **Geometry** – marker center and radius from the bounding box, with
//!    horizontal mirroring about the image midline for right-side views.
//! 3. **Gradient** – a radially faded disc drawn as concentric filled
//!    circles on an overlay layer, alpha-blended onto the working buffer.
//! 4. **Pipeline** – copy/mirror the base image, run accepted components
//!    through geometry + gradient, encode the mutated copy.
//!
//! # Public API
//! The surface is intentionally small:
//! - [`render`] / [`render_named`] and [`RenderConfig`] as primary entry points
//! - [`DamageAssessment`] for the JSON input model
//! - [`ScalingProfile`], [`LateralityRule`], [`MarkerStyle`] for tuning
//!
//! Each render call owns a private copy of the base image; concurrent calls
//! share nothing and need no locking.

mod assessment;
mod base_image;
mod error;
mod filter;
mod geometry;
mod gradient;
mod pipeline;
#[cfg(test)]
mod test_utils;

pub use assessment::{BoundingBox, ComponentDamage, DamageAssessment};
pub use base_image::{load_base_image, BaseImageSource, DirectorySource};
pub use error::RenderError;
pub use filter::{should_render, LateralityRule};
pub use geometry::{resolve, MarkerGeometry, ScalingProfile, ViewSide};
pub use gradient::{draw_marker, MarkerStyle};
pub use pipeline::{encode, output_filename, render, render_named, OutputFormat, RenderConfig};
