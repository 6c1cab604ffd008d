//! Decoding source images and encoding finished collages

use crate::io::error::{CollageError, Result};
use crate::layout::source::SourceImage;
use image::ImageFormat;
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Decode an image file into a source image
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or is not a decodable image
/// - The decoded image has zero width or height
pub fn load_source_image<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|e| CollageError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let image = SourceImage::new(decoded.to_rgb8(), path)?;

    log::debug!(
        "Loaded {} ({}x{}, aspect ratio {:.4})",
        path.display(),
        image.width(),
        image.height(),
        image.aspect_ratio()
    );

    Ok(image)
}

/// Write a canvas to disk, creating parent directories as needed
///
/// `.jpg` and `.jpeg` paths are encoded at `jpeg_quality`; any other
/// extension is left to the `image` crate's format detection.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The output file cannot be created
/// - Encoding fails or the extension names no supported format
pub fn save_canvas(canvas: &RgbImage, output_path: &Path, jpeg_quality: u8) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CollageError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let export_error = |e: image::ImageError| CollageError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    };

    if ImageFormat::from_path(output_path).ok() == Some(ImageFormat::Jpeg) {
        let file = File::create(output_path).map_err(|e| CollageError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;
        let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), jpeg_quality);
        canvas.write_with_encoder(encoder).map_err(export_error)?;
    } else {
        canvas.save(output_path).map_err(export_error)?;
    }

    log::info!(
        "Wrote {}x{} collage to {}",
        canvas.width(),
        canvas.height(),
        output_path.display()
    );
    Ok(())
}
