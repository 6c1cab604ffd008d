//! Layout tree nodes

use crate::geometry::aspect::Dimensions;
use crate::io::error::Result;
use crate::layout::canvas::RenderOptions;
use crate::layout::composite::Composite;
use crate::layout::leaf::Leaf;
use crate::layout::source::SourceImage;
use image::RgbImage;
use std::fmt;
use std::path::{Path, PathBuf};

/// Node of a layout tree: one image, or two sub-tiles with an orientation
#[derive(Debug, Clone)]
pub enum Tile {
    /// Single source image
    Leaf(Leaf),
    /// Ordered pair of sub-tiles
    Composite(Composite),
}

/// Final pixel rectangle occupied by one leaf on the canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Source identity of the leaf
    pub path: PathBuf,
    /// Left edge on the canvas
    pub x: u32,
    /// Top edge on the canvas
    pub y: u32,
    /// Visible width
    pub width: u32,
    /// Visible height
    pub height: u32,
}

impl Placement {
    /// Rectangle of `size` at `origin`, cut back to the `limit` edges
    pub fn clipped(path: &Path, origin: (u32, u32), size: (u32, u32), limit: (u32, u32)) -> Self {
        let right = origin.0.saturating_add(size.0).min(limit.0);
        let bottom = origin.1.saturating_add(size.1).min(limit.1);
        Self {
            path: path.to_path_buf(),
            x: origin.0,
            y: origin.1,
            width: right.saturating_sub(origin.0),
            height: bottom.saturating_sub(origin.1),
        }
    }

    /// Right edge, exclusive
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge, exclusive
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}+{}+{} {}",
            self.width,
            self.height,
            self.x,
            self.y,
            self.path.display()
        )
    }
}

impl Tile {
    /// Leaf tile for one image
    pub const fn leaf(image: SourceImage) -> Self {
        Self::Leaf(Leaf::new(image))
    }

    /// Side-by-side pair
    pub fn horizontal(first: impl Into<Self>, second: impl Into<Self>) -> Self {
        Self::Composite(Composite::new(first, second, false))
    }

    /// Stacked pair
    pub fn vertical(first: impl Into<Self>, second: impl Into<Self>) -> Self {
        Self::Composite(Composite::new(first, second, true))
    }

    /// Aspect ratio of the whole subtree at its natural proportions
    pub fn aspect_ratio(&self) -> f64 {
        match self {
            Self::Leaf(leaf) => leaf.aspect_ratio(),
            Self::Composite(composite) => composite.aspect_ratio(),
        }
    }

    /// Margin-removal ratio needed to match `dimensions`, at least 1
    pub fn crop_factor(&self, dimensions: Dimensions) -> f64 {
        match self {
            Self::Leaf(leaf) => leaf.crop_factor(dimensions),
            Self::Composite(composite) => composite.crop_factor(dimensions),
        }
    }

    /// Render the subtree to fill `dimensions`
    ///
    /// # Errors
    ///
    /// Returns a configuration error for non-positive dimensions and an
    /// internal invariant error if any split would stretch an image
    pub fn render(&self, dimensions: Dimensions, options: &RenderOptions) -> Result<RgbImage> {
        let dimensions = dimensions.ensure_positive()?;
        match self {
            Self::Leaf(leaf) => Ok(leaf.render(dimensions)),
            Self::Composite(composite) => composite.render(dimensions, options),
        }
    }

    /// Source identities, depth-first and left to right
    pub fn filenames(&self) -> Vec<PathBuf> {
        let mut filenames = Vec::with_capacity(self.leaf_count());
        self.collect_filenames(&mut filenames);
        filenames
    }

    fn collect_filenames(&self, filenames: &mut Vec<PathBuf>) {
        match self {
            Self::Leaf(leaf) => filenames.push(leaf.path().to_path_buf()),
            Self::Composite(composite) => {
                composite.first().collect_filenames(filenames);
                composite.second().collect_filenames(filenames);
            }
        }
    }

    /// Where every leaf ends up on a canvas of `dimensions`
    ///
    /// Computed from geometry alone; matches what [`Self::render`] paints,
    /// including clipping at the canvas edges. Order follows
    /// [`Self::filenames`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::render`]
    pub fn placements(&self, dimensions: Dimensions) -> Result<Vec<Placement>> {
        let dimensions = dimensions.ensure_positive()?;
        let limit = dimensions.rounded();
        let mut placements = Vec::with_capacity(self.leaf_count());

        match self {
            Self::Leaf(leaf) => {
                let size = leaf.rendered_size(dimensions);
                placements.push(Placement::clipped(leaf.path(), (0, 0), size, limit));
            }
            Self::Composite(composite) => {
                composite.collect_placements(dimensions, (0, 0), limit, &mut placements)?;
            }
        }

        Ok(placements)
    }

    /// Number of source images in the subtree
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Composite(composite) => {
                composite.first().leaf_count() + composite.second().leaf_count()
            }
        }
    }

    /// Nesting depth; a lone leaf has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Composite(composite) => {
                1 + composite.first().depth().max(composite.second().depth())
            }
        }
    }
}

impl From<Leaf> for Tile {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<Composite> for Tile {
    fn from(composite: Composite) -> Self {
        Self::Composite(composite)
    }
}

impl From<SourceImage> for Tile {
    fn from(image: SourceImage) -> Self {
        Self::leaf(image)
    }
}
