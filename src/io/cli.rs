//! Command-line interface rendering one collage from a layout expression

use crate::geometry::aspect::Dimensions;
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_WIDTH, JPEG_QUALITY,
    parse_hex_color,
};
use crate::io::error::Result;
use crate::io::expression::LayoutExpression;
use crate::io::image::{load_source_image, save_canvas};
use crate::io::progress::ProgressManager;
use crate::layout::canvas::{Collage, RenderOptions, render_collage};
use crate::layout::tile::Tile;
use clap::Parser;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilecollage")]
#[command(
    author,
    version,
    about = "Compose a fixed-size collage from images without distorting them"
)]
/// Command-line arguments for collage rendering
pub struct Cli {
    /// Layout expression, e.g. "h(a.jpg, v(b.png, c.jpg))"
    #[arg(value_name = "LAYOUT")]
    pub layout: String,

    /// Collage width in pixels
    #[arg(short = 'x', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Collage height in pixels
    #[arg(short = 'y', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Output image file; the extension selects the format
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Background colour showing through rounding gaps
    #[arg(short, long, default_value = DEFAULT_BACKGROUND)]
    pub background: String,

    /// Print each image's placement instead of writing the collage
    #[arg(long)]
    pub plan: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Requested canvas size
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either extent is zero
    pub fn dimensions(&self) -> Result<Dimensions> {
        Dimensions::from_pixels(self.width, self.height).validated()
    }

    /// Render options derived from the arguments
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a malformed background colour
    pub fn render_options(&self) -> Result<RenderOptions> {
        Ok(RenderOptions {
            background: parse_hex_color(&self.background)?,
        })
    }
}

/// Runs one collage job: parse, decode, render, write
pub struct CollageRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CollageRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Execute the job described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, parsing, decoding, rendering or
    /// writing the output fails
    pub fn run(&mut self) -> Result<()> {
        let dimensions = self.cli.dimensions()?;
        let options = self.cli.render_options()?;
        let tile = self.build_tile()?;

        if self.cli.plan {
            self.finish_progress();
            return Self::print_plan(&tile, dimensions);
        }

        if let Some(ref pm) = self.progress_manager {
            let (width, height) = dimensions.rounded();
            pm.start_render(width, height);
        }
        let collage = render_collage(&tile, dimensions, &options)?;
        save_canvas(&collage.canvas, &self.cli.output, JPEG_QUALITY)?;
        self.finish_progress();

        Self::log_sources(&collage);
        Ok(())
    }

    /// Parse the layout expression and decode every image it names
    ///
    /// # Errors
    ///
    /// Returns an error if the expression is malformed or an image cannot be
    /// decoded
    pub fn build_tile(&mut self) -> Result<Tile> {
        let expression = LayoutExpression::parse(&self.cli.layout)?;

        if let Some(ref mut pm) = self.progress_manager {
            let distinct: HashSet<_> = expression.paths().into_iter().collect();
            pm.initialize(distinct.len());
        }

        let progress = &mut self.progress_manager;
        expression.build_tile(|path| {
            if let Some(pm) = progress.as_ref() {
                pm.start_image(path);
            }
            let image = load_source_image(path)?;
            if let Some(pm) = progress.as_mut() {
                pm.complete_image();
            }
            Ok(image)
        })
    }

    // Allow print for the plan, which is the command's output
    #[allow(clippy::print_stdout)]
    fn print_plan(tile: &Tile, dimensions: Dimensions) -> Result<()> {
        for placement in tile.placements(dimensions)? {
            println!("{placement}");
        }
        Ok(())
    }

    fn log_sources(collage: &Collage) {
        for (index, path) in collage.filenames.iter().enumerate() {
            log::info!("Image {}: {}", index + 1, path.display());
        }
    }

    fn finish_progress(&self) {
        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
    }
}
