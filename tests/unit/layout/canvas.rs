//! Tests for canvas handling and the top-level render entry point

#[cfg(test)]
mod tests {
    use crate::{colored_image, solid_image};
    use image::{Rgb, RgbImage};
    use std::path::PathBuf;
    use tilecollage::CollageError;
    use tilecollage::geometry::Dimensions;
    use tilecollage::io::configuration::DEFAULT_BACKGROUND_RGB;
    use tilecollage::layout::canvas::{blank_canvas, paste};
    use tilecollage::layout::{RenderOptions, Tile, render_collage};

    // Tests the default background is the documented colour
    // Verified by changing the default colour
    #[test]
    fn test_default_background() {
        assert_eq!(RenderOptions::default().background, Rgb([0x2D, 0x24, 0x24]));
        assert_eq!(RenderOptions::default().background, DEFAULT_BACKGROUND_RGB);
    }

    // Tests a blank canvas is filled with the background
    // Verified by allocating a black canvas
    #[test]
    fn test_blank_canvas_filled() {
        let canvas = blank_canvas(7, 3, Rgb([1, 2, 3]));
        assert_eq!(canvas.dimensions(), (7, 3));
        assert!(canvas.pixels().all(|p| p.0 == [1, 2, 3]));
    }

    // Tests pasting clips at the canvas edge
    // Verified by growing the canvas to fit
    #[test]
    fn test_paste_clips() {
        let mut canvas = blank_canvas(5, 5, Rgb([0, 0, 0]));
        let patch = RgbImage::from_pixel(4, 4, Rgb([255, 0, 0]));
        paste(&mut canvas, &patch, 3, 3);

        assert_eq!(canvas.dimensions(), (5, 5));
        assert_eq!(canvas.get_pixel(4, 4).0, [255, 0, 0]);
        assert_eq!(canvas.get_pixel(3, 3).0, [255, 0, 0]);
        assert_eq!(canvas.get_pixel(2, 2).0, [0, 0, 0]);
    }

    // Tests the collage canvas is exactly the rounded target size
    // Verified by returning the raw render
    #[test]
    fn test_render_collage_exact_size() {
        let trees = [
            Tile::leaf(solid_image(37, 91, "tall")),
            Tile::horizontal(solid_image(30, 40, "a"), solid_image(160, 90, "b")),
            Tile::vertical(
                solid_image(10, 90, "a"),
                Tile::horizontal(solid_image(400, 50, "b"), solid_image(30, 40, "c")),
            ),
        ];
        for tree in &trees {
            for (width, height) in [(64.0, 48.0), (100.5, 60.5), (17.0, 203.0)] {
                let collage =
                    render_collage(tree, Dimensions::new(width, height), &RenderOptions::default())
                        .unwrap();
                assert_eq!(
                    collage.canvas.dimensions(),
                    Dimensions::new(width, height).rounded()
                );
            }
        }
    }

    // Tests the collage carries filenames in traversal order
    // Verified by returning filenames in reverse
    #[test]
    fn test_render_collage_filenames() {
        let tree = Tile::vertical(solid_image(3, 2, "top"), solid_image(3, 2, "bottom"));
        let collage =
            render_collage(&tree, Dimensions::new(30.0, 40.0), &RenderOptions::default()).unwrap();
        assert_eq!(
            collage.filenames,
            vec![PathBuf::from("top"), PathBuf::from("bottom")]
        );
    }

    // Tests invalid target dimensions fail fast
    // Verified by clamping to one pixel
    #[test]
    fn test_render_collage_rejects_bad_dimensions() {
        let tree = Tile::leaf(solid_image(3, 2, "x"));
        for (width, height) in [(0.0, 10.0), (10.0, -1.0), (0.4, 0.4)] {
            let result =
                render_collage(&tree, Dimensions::new(width, height), &RenderOptions::default());
            assert!(matches!(result, Err(CollageError::Configuration { .. })));
        }
    }

    // Tests rendered content covers the canvas for a single leaf
    // Verified by filling the canvas with the background only
    #[test]
    fn test_render_collage_leaf_covers_canvas() {
        let tree = Tile::leaf(colored_image(40, 30, [10, 200, 30], "green"));
        let options = RenderOptions {
            background: Rgb([0, 0, 0]),
        };
        let collage = render_collage(&tree, Dimensions::new(80.0, 40.0), &options).unwrap();
        assert!(collage.canvas.pixels().all(|p| p.0 == [10, 200, 30]));
    }
}
