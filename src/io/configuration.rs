//! Collage defaults and parsing of configuration values

use crate::io::error::{Result, configuration_error};
use image::Rgb;

// Default canvas, sized for a common desktop wallpaper
/// Default collage width in pixels
pub const DEFAULT_WIDTH: u32 = 1920;
/// Default collage height in pixels
pub const DEFAULT_HEIGHT: u32 = 1200;

/// Default background colour, only visible as crop-rounding slack
pub const DEFAULT_BACKGROUND: &str = "#2D2424";
/// Default background colour as RGB channels
pub const DEFAULT_BACKGROUND_RGB: Rgb<u8> = Rgb([0x2D, 0x24, 0x24]);

/// Default output file for the finished collage
pub const DEFAULT_OUTPUT: &str = "collage/collage.jpg";
/// Quality used when encoding JPEG output
pub const JPEG_QUALITY: u8 = 95;

// Above this scale factor resampling visibly softens the image
/// Scale factor beyond which upscaling is reported as a warning
pub const UPSCALE_WARNING_FACTOR: f64 = 4.0;

/// Rounding slack, in pixels, padded onto the canvas without a warning
pub const PASTE_TOLERANCE_PX: u32 = 1;

/// Parse a `#RRGGBB` (or `RRGGBB`) colour string
///
/// # Errors
///
/// Returns a configuration error if the string is not six hexadecimal digits
pub fn parse_hex_color(value: &str) -> Result<Rgb<u8>> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(configuration_error(
            "background",
            &value,
            &"expected six hexadecimal digits such as #2D2424",
        ));
    }

    let channel = |range: std::ops::Range<usize>| -> Result<u8> {
        let slice = digits.get(range).unwrap_or_default();
        u8::from_str_radix(slice, 16)
            .map_err(|e| configuration_error("background", &value, &e))
    };

    Ok(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
}
