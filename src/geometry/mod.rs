//! Pure geometry shared by every tile: aspect ratios, crop boxes, scaling

/// Aspect ratio arithmetic and render target dimensions
pub mod aspect;
/// Centered cropping and crop-then-scale
pub mod crop;

pub use aspect::Dimensions;
pub use crop::CropRegion;
