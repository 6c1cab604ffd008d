//! Centered margin cropping and crop-then-scale transforms

use crate::geometry::aspect::{aspect_ratio, round_pixels};
use crate::io::configuration::UPSCALE_WARNING_FACTOR;
use image::RgbImage;
use image::imageops::{self, FilterType};

/// Rectangle kept from a source raster after margin removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    /// Left edge of the kept rectangle
    pub x: u32,
    /// Top edge of the kept rectangle
    pub y: u32,
    /// Width of the kept rectangle
    pub width: u32,
    /// Height of the kept rectangle
    pub height: u32,
}

/// Exact size of the largest centered rectangle of `target_aspect_ratio`
///
/// One extent is kept whole; the other may be fractional.
pub fn exact_crop_size(width: u32, height: u32, target_aspect_ratio: f64) -> (f64, f64) {
    let (width, height) = (f64::from(width), f64::from(height));
    if target_aspect_ratio < width / height {
        // Left and right must be cropped
        (target_aspect_ratio * height, height)
    } else {
        // Top and bottom must be cropped
        (width, width / target_aspect_ratio)
    }
}

/// Largest centered rectangle of `target_aspect_ratio` inside a `width` x `height` raster
///
/// The offset is rounded first and the far edge is rounded from the
/// unrounded extent, so the kept size may differ from the ideal one by a
/// pixel. The region always stays inside the raster and is never empty for
/// a non-empty raster.
pub fn crop_region(width: u32, height: u32, target_aspect_ratio: f64) -> CropRegion {
    let (new_width, new_height) = exact_crop_size(width, height, target_aspect_ratio);

    if target_aspect_ratio < aspect_ratio(width, height) {
        let (x, kept) = centered_span(width, new_width);
        CropRegion {
            x,
            y: 0,
            width: kept,
            height,
        }
    } else {
        let (y, kept) = centered_span(height, new_height);
        CropRegion {
            x: 0,
            y,
            width,
            height: kept,
        }
    }
}

// Start and length of a span of `ideal` pixels centered in `extent`
fn centered_span(extent: u32, ideal: f64) -> (u32, u32) {
    let start = round_pixels((f64::from(extent) - ideal) / 2.0).min(extent.saturating_sub(1));
    let end = round_pixels(f64::from(start) + ideal)
        .max(start + 1)
        .min(extent);
    (start, end.saturating_sub(start))
}

/// Pixel size of an exact crop extent after a uniform scale, at least 1x1
///
/// Scaling the unrounded extent keeps the rounding of the crop box from
/// growing with the scale factor.
pub fn scaled_size(exact_size: (f64, f64), scale_factor: f64) -> (u32, u32) {
    (
        round_pixels(exact_size.0 * scale_factor).max(1),
        round_pixels(exact_size.1 * scale_factor).max(1),
    )
}

/// Crop the margins of `image` so it matches `target_aspect_ratio`
pub fn crop(image: &RgbImage, target_aspect_ratio: f64) -> RgbImage {
    let region = crop_region(image.width(), image.height(), target_aspect_ratio);
    imageops::crop_imm(image, region.x, region.y, region.width, region.height).to_image()
}

/// Crop to `target_aspect_ratio`, then scale both axes by `scale_factor`
///
/// Resampling uses a bicubic (Catmull-Rom) filter. The output size is the
/// exact crop extent times `scale_factor`; the integer crop box differs from
/// that extent by less than a source pixel, so no visible distortion occurs.
pub fn crop_resize(image: &RgbImage, target_aspect_ratio: f64, scale_factor: f64) -> RgbImage {
    if scale_factor > UPSCALE_WARNING_FACTOR {
        log::warn!(
            "Upscaling {}x{} image by {scale_factor:.2}; expect visible softening",
            image.width(),
            image.height()
        );
    }

    let (source_width, source_height) = image.dimensions();
    let region = crop_region(source_width, source_height, target_aspect_ratio);
    let (width, height) = scaled_size(
        exact_crop_size(source_width, source_height, target_aspect_ratio),
        scale_factor,
    );
    let cropped =
        imageops::crop_imm(image, region.x, region.y, region.width, region.height).to_image();

    if (width, height) == cropped.dimensions() {
        return cropped;
    }
    imageops::resize(&cropped, width, height, FilterType::CatmullRom)
}
