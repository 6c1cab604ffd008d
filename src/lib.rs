//! Aspect-preserving collage composition
//!
//! Source images are arranged in a binary layout tree. Every leaf is cropped
//! (never stretched or letterboxed) so that the whole tree exactly fills a
//! fixed-size canvas, each image giving up a fair share of its margins.

#![forbid(unsafe_code)]

/// Aspect ratio arithmetic, cropping and scaling
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Layout trees, rendering and canvas composition
pub mod layout;

pub use io::error::{CollageError, Result};
