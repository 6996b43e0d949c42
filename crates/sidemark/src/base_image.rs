//! Read-only access to the reference photographs.
//!
//! The base image itself is never mutated; every render works on a private
//! copy. "Not found" and "failed to decode" are distinguishable so callers
//! can surface them as different failure categories.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::RenderError;

/// Read-only source of named reference photographs.
pub trait BaseImageSource {
    /// Decode the named base image into an owned buffer.
    fn load(&self, name: &str) -> Result<RgbImage, RenderError>;
}

/// Directory-backed base image store.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl BaseImageSource for DirectorySource {
    fn load(&self, name: &str) -> Result<RgbImage, RenderError> {
        load_base_image(&self.root.join(name))
    }
}

/// Load and decode a base image from an explicit path.
pub fn load_base_image(path: &Path) -> Result<RgbImage, RenderError> {
    if !path.is_file() {
        return Err(RenderError::BaseImageNotFound {
            path: path.to_path_buf(),
        });
    }
    let img = image::open(path).map_err(|source| RenderError::BaseImageDecodeFailed {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgb8())
}
