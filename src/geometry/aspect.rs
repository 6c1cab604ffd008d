//! Aspect ratios, crop factors and target dimensions

use crate::io::error::{Result, configuration_error};

/// Target size of a render, in (possibly fractional) pixels
///
/// Composite layouts hand their children fractional shares of the canvas;
/// only the final canvas is rounded to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Dimensions {
    /// Create dimensions without validation
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create dimensions from whole pixel counts
    pub const fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f64, height as f64)
    }

    /// Check that both extents are finite and positive
    ///
    /// Fractional shares below one pixel pass; nested layouts may hand
    /// those out.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending extent
    pub fn ensure_positive(self) -> Result<Self> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(configuration_error(
                    parameter,
                    &value,
                    &"must be a positive, finite number of pixels",
                ));
            }
        }
        Ok(self)
    }

    /// Check that both extents are finite, positive and cover at least one pixel
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending extent
    pub fn validated(self) -> Result<Self> {
        let dimensions = self.ensure_positive()?;
        for (parameter, value) in [("width", dimensions.width), ("height", dimensions.height)] {
            if round_pixels(value) == 0 {
                return Err(configuration_error(
                    parameter,
                    &value,
                    &"rounds to an empty canvas",
                ));
            }
        }
        Ok(dimensions)
    }

    /// Width divided by height
    pub const fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Whole-pixel size of a canvas with these dimensions
    pub fn rounded(&self) -> (u32, u32) {
        (round_pixels(self.width), round_pixels(self.height))
    }

    /// Same dimensions with width and height exchanged
    pub const fn transposed(&self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// Round a pixel extent half-to-even, saturating at zero
pub fn round_pixels(value: f64) -> u32 {
    value.round_ties_even().max(0.0) as u32
}

/// Aspect ratio of a `width` x `height` raster
pub const fn aspect_ratio(width: u32, height: u32) -> f64 {
    width as f64 / height as f64
}

/// Uniform margin-removal ratio needed to bring `aspect_ratio` to `target_aspect_ratio`
///
/// Always at least 1; exactly 1 when the ratios already agree.
pub const fn crop_factor(aspect_ratio: f64, target_aspect_ratio: f64) -> f64 {
    if aspect_ratio > target_aspect_ratio {
        // left and right must go
        aspect_ratio / target_aspect_ratio
    } else {
        // top and bottom must go
        target_aspect_ratio / aspect_ratio
    }
}
