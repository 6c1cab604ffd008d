//! Layout trees and their rendering
//!
//! This module contains the composition engine:
//! - Source images and the leaf tiles wrapping them
//! - Composite tiles and the recursive split algorithm
//! - Canvas handling and the top-level render entry point

/// Canvas allocation, pasting and `render_collage`
pub mod canvas;
/// Two-tile layouts
pub mod composite;
/// Single-image tiles
pub mod leaf;
/// Decoded source images
pub mod source;
/// Layout tree nodes
pub mod tile;

pub use canvas::{Collage, RenderOptions, render_collage};
pub use composite::{Composite, Orientation};
pub use leaf::Leaf;
pub use source::SourceImage;
pub use tile::{Placement, Tile};
