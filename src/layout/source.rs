//! Decoded source images with their identity

use crate::geometry::aspect::aspect_ratio;
use crate::io::error::{Result, invalid_image};
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Immutable decoded raster plus the path it was read from
///
/// The path is only an identity for bookkeeping; pixels are never re-read.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbImage,
    path: PathBuf,
}

impl SourceImage {
    /// Wrap decoded pixels
    ///
    /// # Errors
    ///
    /// Returns an invalid image error if the raster has zero width or height
    pub fn new(pixels: RgbImage, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(invalid_image(
                path,
                &format!(
                    "degenerate size {}x{}",
                    pixels.width(),
                    pixels.height()
                ),
            ));
        }
        Ok(Self { pixels, path })
    }

    /// Decoded pixels
    pub const fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// Source identity
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pixel width
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Pixel height
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f64 {
        aspect_ratio(self.width(), self.height())
    }
}
