//! Two-tile layouts and the recursive split algorithm
//!
//! A composite places two tiles next to each other along its main axis. Both
//! children share the other axis before cropping, so the combined aspect
//! ratio of the pair follows from the children's ratios alone:
//!
//! - side by side, at equal height, widths add up: `ar1 + ar2`
//! - stacked, at equal width, heights add up: `1 / (1/ar1 + 1/ar2)`
//!
//! Rendering removes the surplus of that combined ratio against the target
//! ratio as one shared crop, divided fairly between the two children, then
//! scales each child so the shared axis fills the target exactly.

use crate::geometry::aspect::{Dimensions, crop_factor};
use crate::io::error::{Result, invariant_violation};
use crate::layout::canvas::{RenderOptions, blank_canvas, paste};
use crate::layout::tile::{Placement, Tile};
use image::RgbImage;

/// Axis along which the two children of a composite sit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Side by side, sharing height
    Horizontal,
    /// Stacked, sharing width
    Vertical,
}

impl Orientation {
    /// Orientation for a `vertical` flag
    pub const fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Whether the children are stacked
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

/// Geometry of one child within a split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildPlan {
    /// Aspect ratio the child is cropped to
    pub target_aspect_ratio: f64,
    /// Uniform scale applied to a leaf child after cropping
    pub scale_factor: f64,
    /// Rectangle allotted to the child
    pub dimensions: Dimensions,
}

/// Pure geometry of dividing a target rectangle between two children
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    /// Combined aspect ratio of the uncropped pair
    pub combined_aspect_ratio: f64,
    /// Aspect ratio of the target rectangle
    pub target_aspect_ratio: f64,
    /// Overall crop magnitude, at least 1
    pub dimension_factor: f64,
    /// Crop applied to the shared axis, at least 1
    pub shared_axis_crop_factor: f64,
    /// Plan for the first child
    pub first: ChildPlan,
    /// Plan for the second child
    pub second: ChildPlan,
}

/// Tile made of two ordered child tiles and an orientation
#[derive(Debug, Clone)]
pub struct Composite {
    first: Box<Tile>,
    second: Box<Tile>,
    orientation: Orientation,
}

impl Composite {
    /// Pair two tiles; `vertical` stacks them, otherwise they sit side by side
    pub fn new(first: impl Into<Tile>, second: impl Into<Tile>, vertical: bool) -> Self {
        Self::with_orientation(first, second, Orientation::from_vertical(vertical))
    }

    /// Pair two tiles with an explicit orientation
    pub fn with_orientation(
        first: impl Into<Tile>,
        second: impl Into<Tile>,
        orientation: Orientation,
    ) -> Self {
        Self {
            first: Box::new(first.into()),
            second: Box::new(second.into()),
            orientation,
        }
    }

    /// First child, placed at the origin
    pub fn first(&self) -> &Tile {
        &self.first
    }

    /// Second child, placed after the first along the main axis
    pub fn second(&self) -> &Tile {
        &self.second
    }

    /// Orientation of the pair
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Combined aspect ratio of both children at equal shared extent
    pub fn aspect_ratio(&self) -> f64 {
        let first = self.first.aspect_ratio();
        let second = self.second.aspect_ratio();
        match self.orientation {
            Orientation::Horizontal => first + second,
            Orientation::Vertical => 1.0 / (1.0 / first + 1.0 / second),
        }
    }

    /// Margin-removal ratio needed to match the aspect ratio of `dimensions`
    pub fn crop_factor(&self, dimensions: Dimensions) -> f64 {
        crop_factor(self.aspect_ratio(), dimensions.aspect_ratio())
    }

    /// Divide `dimensions` between the two children
    ///
    /// # Errors
    ///
    /// Returns a configuration error for non-positive dimensions and an
    /// internal invariant error if the shared axis would have to grow
    pub fn split(&self, dimensions: Dimensions) -> Result<Split> {
        let dimensions = dimensions.ensure_positive()?;
        let target_aspect_ratio = dimensions.aspect_ratio();
        let combined_aspect_ratio = self.aspect_ratio();

        // Signed by direction, unlike crop_factor(): below 1 when the pair is too tall
        let directed_crop = combined_aspect_ratio / target_aspect_ratio;
        if !directed_crop.is_finite() || directed_crop <= 0.0 {
            return Err(invariant_violation(
                "composite split",
                &format!(
                    "combined aspect ratio {combined_aspect_ratio} cannot be matched to {target_aspect_ratio}"
                ),
            ));
        }
        let dimension_factor = crop_factor(combined_aspect_ratio, target_aspect_ratio);
        let width_cropped = combined_aspect_ratio > target_aspect_ratio;

        let first_ar = self.first.aspect_ratio() / directed_crop;
        let second_ar = self.second.aspect_ratio() / directed_crop;

        let (shared_extent, shared_axis_crop_factor) = match self.orientation {
            Orientation::Horizontal => (
                dimensions.height,
                if width_cropped { 1.0 } else { dimension_factor },
            ),
            Orientation::Vertical => (
                dimensions.width,
                if width_cropped { dimension_factor } else { 1.0 },
            ),
        };

        if shared_axis_crop_factor.is_nan() || shared_axis_crop_factor < 1.0 {
            return Err(invariant_violation(
                "composite split",
                &format!("shared axis crop factor {shared_axis_crop_factor} is below 1"),
            ));
        }

        let plan = |tile: &Tile, target_aspect_ratio: f64| {
            let natural = self.natural_shared_extent(tile, shared_extent);
            let dimensions = match self.orientation {
                Orientation::Horizontal => {
                    Dimensions::new(shared_extent * target_aspect_ratio, shared_extent)
                }
                Orientation::Vertical => {
                    Dimensions::new(shared_extent, shared_extent / target_aspect_ratio)
                }
            };
            ChildPlan {
                target_aspect_ratio,
                scale_factor: shared_extent / (natural / shared_axis_crop_factor),
                dimensions,
            }
        };

        let split = Split {
            combined_aspect_ratio,
            target_aspect_ratio,
            dimension_factor,
            shared_axis_crop_factor,
            first: plan(&self.first, first_ar),
            second: plan(&self.second, second_ar),
        };

        log::debug!(
            "{:?} split: combined ar {combined_aspect_ratio:.4}, target ar {target_aspect_ratio:.4}, crop {dimension_factor:.4}",
            self.orientation
        );

        Ok(split)
    }

    // Extent of `tile` along the shared axis before scaling. Nested
    // composites render straight into their allotted rectangle, so theirs is
    // the target extent.
    fn natural_shared_extent(&self, tile: &Tile, shared_extent: f64) -> f64 {
        match tile {
            Tile::Leaf(leaf) => match self.orientation {
                Orientation::Horizontal => f64::from(leaf.image().height()),
                Orientation::Vertical => f64::from(leaf.image().width()),
            },
            Tile::Composite(_) => shared_extent,
        }
    }

    /// Render both children into a canvas of `dimensions`
    ///
    /// # Errors
    ///
    /// Propagates configuration and invariant errors from this split or any
    /// nested one
    pub fn render(&self, dimensions: Dimensions, options: &RenderOptions) -> Result<RgbImage> {
        let split = self.split(dimensions)?;

        let first = render_child(&self.first, &split.first, options)?;
        let second = render_child(&self.second, &split.second, options)?;

        let (width, height) = dimensions.rounded();
        let mut canvas = blank_canvas(width, height, options.background);
        paste(&mut canvas, &first, 0, 0);
        let (x, y) = self.second_origin(first.dimensions());
        paste(&mut canvas, &second, x, y);

        Ok(canvas)
    }

    // The second child abuts the first along the main axis
    const fn second_origin(&self, first_size: (u32, u32)) -> (u32, u32) {
        match self.orientation {
            Orientation::Horizontal => (first_size.0, 0),
            Orientation::Vertical => (0, first_size.1),
        }
    }

    /// Record where each leaf of this composite lands
    ///
    /// `origin` is the absolute position of this composite's canvas and
    /// `limit` the absolute right/bottom edges everything is clipped to.
    ///
    /// # Errors
    ///
    /// Propagates configuration and invariant errors from the splits
    pub fn collect_placements(
        &self,
        dimensions: Dimensions,
        origin: (u32, u32),
        limit: (u32, u32),
        placements: &mut Vec<Placement>,
    ) -> Result<()> {
        let split = self.split(dimensions)?;
        let (width, height) = dimensions.rounded();
        let limit = (
            limit.0.min(origin.0.saturating_add(width)),
            limit.1.min(origin.1.saturating_add(height)),
        );

        let first_size = place_child(&self.first, &split.first, origin, limit, placements)?;
        let (dx, dy) = self.second_origin(first_size);
        let second_origin = (origin.0.saturating_add(dx), origin.1.saturating_add(dy));
        place_child(&self.second, &split.second, second_origin, limit, placements)?;

        Ok(())
    }
}

fn render_child(tile: &Tile, plan: &ChildPlan, options: &RenderOptions) -> Result<RgbImage> {
    match tile {
        Tile::Leaf(leaf) => Ok(leaf.render_scaled(plan.target_aspect_ratio, plan.scale_factor)),
        Tile::Composite(composite) => composite.render(plan.dimensions, options),
    }
}

// Places a child and returns its unclipped rendered size
fn place_child(
    tile: &Tile,
    plan: &ChildPlan,
    origin: (u32, u32),
    limit: (u32, u32),
    placements: &mut Vec<Placement>,
) -> Result<(u32, u32)> {
    match tile {
        Tile::Leaf(leaf) => {
            let size = leaf.scaled_size(plan.target_aspect_ratio, plan.scale_factor);
            placements.push(Placement::clipped(leaf.path(), origin, size, limit));
            Ok(size)
        }
        Tile::Composite(composite) => {
            composite.collect_placements(plan.dimensions, origin, limit, placements)?;
            Ok(plan.dimensions.rounded())
        }
    }
}
