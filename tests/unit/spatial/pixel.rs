//! Tests for pixel construction and coarse color comparison

#[cfg(test)]
mod tests {
    use mosaic_decomposer::spatial::Pixel;

    // Tests that a pixel matches itself at every tolerance
    // Verified by using a strict less-than comparison
    #[test]
    fn test_self_comparison_always_matches() {
        let pixel = Pixel::new(123, 75, 255);

        for tolerance in [0, 1, 100, 255, 765, u16::MAX] {
            assert!(
                pixel.coarse_compare(&pixel, tolerance),
                "pixel should match itself at tolerance {tolerance}"
            );
        }
    }

    // Tests tolerance boundary as channel differences accumulate
    // Verified by dropping one channel from the deviation sum
    #[test]
    fn test_coarse_compare_boundaries() {
        let pixel = Pixel::new(123, 75, 255);
        let mut other = pixel;

        other.red += 10;
        assert!(pixel.coarse_compare(&other, 11));
        assert!(pixel.coarse_compare(&other, 10));
        assert!(!pixel.coarse_compare(&other, 9));

        other.green += 5;
        assert!(pixel.coarse_compare(&other, 16));
        assert!(pixel.coarse_compare(&other, 15));
        assert!(!pixel.coarse_compare(&other, 14));

        other.blue -= 100;
        assert!(pixel.coarse_compare(&other, 116));
        assert!(pixel.coarse_compare(&other, 115));
        assert!(!pixel.coarse_compare(&other, 114));
        assert!(!pixel.coarse_compare(&other, 110));
    }

    // Tests comparison is symmetric regardless of which side is brighter
    // Verified by using wrapping subtraction instead of absolute difference
    #[test]
    fn test_coarse_compare_symmetric() {
        let dark = Pixel::new(10, 20, 30);
        let bright = Pixel::new(40, 10, 90);

        assert_eq!(dark.color_deviation(&bright), 30 + 10 + 60);
        assert_eq!(bright.color_deviation(&dark), 30 + 10 + 60);
        assert_eq!(
            dark.coarse_compare(&bright, 99),
            bright.coarse_compare(&dark, 99)
        );
    }

    // Tests maximum deviation does not overflow the intermediate type
    // Verified by summing channels as u8
    #[test]
    fn test_maximum_deviation() {
        let black = Pixel::new(0, 0, 0);
        let white = Pixel::new(255, 255, 255);

        assert_eq!(black.color_deviation(&white), 765);
        assert!(black.coarse_compare(&white, 765));
        assert!(!black.coarse_compare(&white, 764));
    }

    // Tests conversions from raw channels and image pixels
    #[test]
    fn test_pixel_conversions() {
        assert_eq!(Pixel::from([1, 2, 3]), Pixel::new(1, 2, 3));
        assert_eq!(Pixel::from(image::Rgb([7, 8, 9])), Pixel::new(7, 8, 9));
        assert_eq!(Pixel::default(), Pixel::new(0, 0, 0));
    }
}
