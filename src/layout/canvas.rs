//! Output canvas allocation, pasting and the top-level render entry point

use crate::geometry::aspect::Dimensions;
use crate::io::configuration::{DEFAULT_BACKGROUND_RGB, PASTE_TOLERANCE_PX};
use crate::io::error::Result;
use crate::layout::tile::Tile;
use image::imageops;
use image::{Rgb, RgbImage};
use std::path::PathBuf;

/// Parameters threaded through every render call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Fill colour of freshly allocated canvases
    pub background: Rgb<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND_RGB,
        }
    }
}

/// Finished collage handed back to the caller
#[derive(Debug, Clone)]
pub struct Collage {
    /// Raster of exactly the requested size
    pub canvas: RgbImage,
    /// Source identities in depth-first, left-to-right order
    pub filenames: Vec<PathBuf>,
}

/// Allocate a canvas filled with `background`
pub fn blank_canvas(width: u32, height: u32, background: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, background)
}

/// Copy `image` onto `canvas` with its top-left corner at (`x`, `y`)
///
/// Pixels falling outside the canvas are dropped.
pub fn paste(canvas: &mut RgbImage, image: &RgbImage, x: u32, y: u32) {
    imageops::replace(canvas, image, i64::from(x), i64::from(y));
}

/// Render `tile` onto a canvas of exactly `dimensions` rounded to whole pixels
///
/// # Errors
///
/// Returns a configuration error for non-positive or empty dimensions and
/// propagates invariant violations from composite layouts
pub fn render_collage(
    tile: &Tile,
    dimensions: Dimensions,
    options: &RenderOptions,
) -> Result<Collage> {
    let dimensions = dimensions.validated()?;
    let (width, height) = dimensions.rounded();

    log::info!(
        "Rendering {width}x{height} collage from {} image(s), depth {}",
        tile.leaf_count(),
        tile.depth()
    );

    let rendered = tile.render(dimensions, options)?;
    let canvas = if rendered.dimensions() == (width, height) {
        rendered
    } else {
        let slack = rendered.width().abs_diff(width).max(rendered.height().abs_diff(height));
        if slack > PASTE_TOLERANCE_PX {
            log::warn!(
                "Render is {}x{}, {slack} px off the {width}x{height} canvas",
                rendered.width(),
                rendered.height()
            );
        } else {
            log::debug!(
                "Padding {}x{} render onto {width}x{height} canvas",
                rendered.width(),
                rendered.height()
            );
        }
        let mut canvas = blank_canvas(width, height, options.background);
        paste(&mut canvas, &rendered, 0, 0);
        canvas
    };

    Ok(Collage {
        canvas,
        filenames: tile.filenames(),
    })
}
