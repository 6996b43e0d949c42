//! Error taxonomy for the rendering pipeline.
//!
//! Only fatal conditions reach the caller. Per-component validation
//! failures are recoverable: the pipeline skips the offending record and
//! logs it, rather than failing the whole render.

use std::path::PathBuf;

/// Errors surfaced by the overlay rendering pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The named base image does not exist in the store.
    #[error("base image not found: {path}")]
    BaseImageNotFound { path: PathBuf },

    /// The base image exists but could not be decoded.
    #[error("failed to decode base image {path}: {source}")]
    BaseImageDecodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A component record failed validation. Recoverable: the pipeline
    /// skips the record; this variant exists so the skip reason can be
    /// reported uniformly.
    #[error("invalid component record '{component}': {reason}")]
    InvalidComponentRecord { component: String, reason: String },

    /// Encoding the rendered buffer to an output format failed.
    #[error("failed to encode rendered image: {0}")]
    EncodeFailed(#[from] image::ImageError),
}
