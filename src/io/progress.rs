//! Progress display while decoding sources and rendering the collage

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar covering every decoded image plus the render step
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    image_count: usize,
    images_done: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no visible bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            image_count: 0,
            images_done: 0,
        }
    }

    /// Show a bar with one step per source image and one for rendering
    pub fn initialize(&mut self, image_count: usize) {
        let bar = ProgressBar::new(image_count as u64 + 1);
        bar.set_style(PROGRESS_STYLE.clone());
        self.bar = Some(bar);
        self.image_count = image_count;
        self.images_done = 0;
    }

    /// Announce the image currently being decoded
    pub fn start_image(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(format!("loading {display_name}"));
        }
    }

    /// Mark one image as decoded
    pub fn complete_image(&mut self) {
        self.images_done = (self.images_done + 1).min(self.image_count);
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Announce the render step
    pub fn start_render(&self, width: u32, height: u32) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("rendering {width}x{height}"));
        }
    }

    /// Number of images reported as decoded so far
    pub const fn images_done(&self) -> usize {
        self.images_done
    }

    /// Complete and remove the bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
