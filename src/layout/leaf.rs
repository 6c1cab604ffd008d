//! Single-image tiles
//!
//! A leaf fills whatever rectangle it is given with one crop and one uniform
//! scale. It is also the base case every composite recursion bottoms out at:
//! a lone leaf rendered at the full canvas size is a one-image collage.

use crate::geometry::aspect::{Dimensions, crop_factor};
use crate::geometry::crop::{CropRegion, crop_region, crop_resize, exact_crop_size, scaled_size};
use crate::layout::source::SourceImage;
use image::RgbImage;
use std::path::Path;

/// Tile wrapping exactly one source image
#[derive(Debug, Clone)]
pub struct Leaf {
    image: SourceImage,
}

impl Leaf {
    /// Wrap a source image
    pub const fn new(image: SourceImage) -> Self {
        Self { image }
    }

    /// Wrapped source image
    pub const fn image(&self) -> &SourceImage {
        &self.image
    }

    /// Source identity of the wrapped image
    pub fn path(&self) -> &Path {
        self.image.path()
    }

    /// Aspect ratio of the wrapped image
    pub fn aspect_ratio(&self) -> f64 {
        self.image.aspect_ratio()
    }

    /// Margin-removal ratio needed to match the aspect ratio of `dimensions`
    pub fn crop_factor(&self, dimensions: Dimensions) -> f64 {
        crop_factor(self.aspect_ratio(), dimensions.aspect_ratio())
    }

    /// Scale that makes the cropped image exactly fill `dimensions`
    ///
    /// A leaf wider than the target keeps its full height, so height binds;
    /// otherwise width binds.
    pub fn scale_factor(&self, dimensions: Dimensions) -> f64 {
        if self.aspect_ratio() > dimensions.aspect_ratio() {
            dimensions.height / f64::from(self.image.height())
        } else {
            dimensions.width / f64::from(self.image.width())
        }
    }

    /// Part of the source kept when cropping to `target_aspect_ratio`
    pub fn crop_region(&self, target_aspect_ratio: f64) -> CropRegion {
        crop_region(
            self.image.width(),
            self.image.height(),
            target_aspect_ratio,
        )
    }

    /// Pixel size produced by [`Self::render_scaled`]
    pub fn scaled_size(&self, target_aspect_ratio: f64, scale_factor: f64) -> (u32, u32) {
        let exact = exact_crop_size(
            self.image.width(),
            self.image.height(),
            target_aspect_ratio,
        );
        scaled_size(exact, scale_factor)
    }

    /// Pixel size produced by [`Self::render`]
    pub fn rendered_size(&self, dimensions: Dimensions) -> (u32, u32) {
        self.scaled_size(dimensions.aspect_ratio(), self.scale_factor(dimensions))
    }

    /// Crop to `target_aspect_ratio` and scale by an externally chosen factor
    pub fn render_scaled(&self, target_aspect_ratio: f64, scale_factor: f64) -> RgbImage {
        crop_resize(self.image.pixels(), target_aspect_ratio, scale_factor)
    }

    /// Fill `dimensions` with this image
    ///
    /// The result matches `dimensions` rounded to whole pixels, give or take
    /// a pixel of floating point slack.
    pub fn render(&self, dimensions: Dimensions) -> RgbImage {
        self.render_scaled(dimensions.aspect_ratio(), self.scale_factor(dimensions))
    }
}
