//! Tests for aspect ratios, crop factors and dimension validation

#[cfg(test)]
mod tests {
    use crate::approx_eq;
    use tilecollage::CollageError;
    use tilecollage::geometry::aspect::{Dimensions, aspect_ratio, crop_factor, round_pixels};

    // Tests aspect ratio is width over height
    // Verified by swapping the division
    #[test]
    fn test_aspect_ratio() {
        assert!(approx_eq(aspect_ratio(1600, 900), 16.0 / 9.0));
        assert!(approx_eq(aspect_ratio(900, 1600), 9.0 / 16.0));
        assert!(approx_eq(Dimensions::new(1920.0, 1200.0).aspect_ratio(), 1.6));
    }

    // Tests crop factor is never below one and picks the larger ratio
    // Verified by returning the plain quotient
    #[test]
    fn test_crop_factor_at_least_one() {
        assert!(approx_eq(crop_factor(2.0, 1.6), 1.25));
        assert!(approx_eq(crop_factor(1.0, 1.6), 1.6));

        for ar in [0.2, 0.5, 1.0, 1.6, 3.0, 9.0] {
            for target in [0.25, 0.75, 1.0, 1.6, 2.4] {
                assert!(crop_factor(ar, target) >= 1.0, "{ar} vs {target}");
            }
        }
    }

    // Tests crop factor is exactly one for matching ratios
    // Verified by adding an epsilon to the comparison branch
    #[test]
    fn test_crop_factor_equal_ratios() {
        let ar = aspect_ratio(1920, 1200);
        assert!(approx_eq(crop_factor(ar, 1.6), 1.0));
        assert!(approx_eq(crop_factor(0.75, 0.75), 1.0));
    }

    // Tests rounding is half-to-even and saturates at zero
    // Verified by using round-half-away-from-zero
    #[test]
    fn test_round_pixels_half_even() {
        assert_eq!(round_pixels(2.5), 2);
        assert_eq!(round_pixels(3.5), 4);
        assert_eq!(round_pixels(639.6), 640);
        assert_eq!(round_pixels(-3.0), 0);
    }

    // Tests rounded canvas size and transposition
    // Verified by swapping rounded components
    #[test]
    fn test_rounded_and_transposed() {
        let dimensions = Dimensions::new(1919.5, 1200.4);
        assert_eq!(dimensions.rounded(), (1920, 1200));
        assert_eq!(dimensions.transposed().rounded(), (1200, 1920));
        assert_eq!(Dimensions::from_pixels(640, 480).rounded(), (640, 480));
    }

    // Tests validation rejects non-positive and non-finite extents
    // Verified by clamping invalid values instead of failing
    #[test]
    fn test_validated_rejects_bad_extents() {
        for (width, height) in [
            (0.0, 1200.0),
            (1920.0, -1.0),
            (f64::NAN, 10.0),
            (10.0, f64::INFINITY),
            (0.4, 10.0),
        ] {
            let result = Dimensions::new(width, height).validated();
            assert!(
                matches!(result, Err(CollageError::Configuration { .. })),
                "{width}x{height} should be rejected"
            );
        }

        assert!(Dimensions::new(1920.0, 1200.0).validated().is_ok());
    }

    // Tests the error names the offending extent
    // Verified by reporting the wrong parameter name
    #[test]
    fn test_validated_names_parameter() {
        match Dimensions::new(10.0, 0.0).validated() {
            Err(CollageError::Configuration { parameter, .. }) => assert_eq!(parameter, "height"),
            other => unreachable!("Expected configuration error, got {other:?}"),
        }
    }

    // Tests sub-pixel shares pass the positivity check used for nested tiles
    // Verified by applying the empty-canvas check in ensure_positive
    #[test]
    fn test_ensure_positive_allows_sub_pixel() {
        assert!(Dimensions::new(0.4, 10.0).ensure_positive().is_ok());
        assert!(Dimensions::new(0.0, 10.0).ensure_positive().is_err());
    }
}
