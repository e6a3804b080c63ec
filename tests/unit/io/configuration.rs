//! Tests for mosaic configuration constants

#[cfg(test)]
mod tests {
    use image::imageops::FilterType;
    use photomosaic::io::configuration::{
        DEFAULT_BRIGHTNESS_WEIGHT, DEFAULT_MAX_USAGE, DEFAULT_OVERLAY_OPACITY,
        DEFAULT_TARGET_HEIGHT, DEFAULT_TILE_SIZE, DEFAULT_USAGE_PENALTY_WEIGHT,
        MAX_TARGET_HEIGHT, MAX_TARGET_WIDTH, OUTPUT_EXTENSION, OUTPUT_SUFFIX, RESAMPLE_FILTER,
        SOURCE_EXTENSIONS,
    };

    // Tests grid geometry defaults
    // Verified by changing constant values
    #[test]
    fn test_geometry_defaults() {
        assert_eq!(DEFAULT_TILE_SIZE, 60);
        assert_eq!(DEFAULT_TARGET_HEIGHT, 5000);
        assert!(DEFAULT_TARGET_HEIGHT <= MAX_TARGET_HEIGHT);
        assert!(MAX_TARGET_WIDTH >= MAX_TARGET_HEIGHT);
    }

    // Tests matching defaults
    // Verified by swapping the two weights
    #[test]
    fn test_matching_defaults() {
        assert_eq!(DEFAULT_MAX_USAGE, 30);
        assert!((DEFAULT_USAGE_PENALTY_WEIGHT - 3.5).abs() < f64::EPSILON);
        assert!((DEFAULT_BRIGHTNESS_WEIGHT - 3.0).abs() < f64::EPSILON);
    }

    // Tests overlay opacity is a valid fraction
    // Verified by setting opacity above one
    #[test]
    fn test_overlay_opacity_default() {
        assert!((DEFAULT_OVERLAY_OPACITY - 0.17).abs() < f64::EPSILON);
        assert!((0.0..=1.0).contains(&DEFAULT_OVERLAY_OPACITY));
    }

    // Tests a smooth filter is used for resampling
    // Verified by switching to nearest neighbour
    #[test]
    fn test_resample_filter_is_smooth() {
        assert_ne!(RESAMPLE_FILTER, FilterType::Nearest);
    }

    // Tests filesystem safety of suffix
    // Verified by adding special character
    #[test]
    fn test_output_naming() {
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        for ch in OUTPUT_SUFFIX.chars() {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Output suffix contains invalid character: {ch}"
            );
        }
        assert!(SOURCE_EXTENSIONS.contains(&OUTPUT_EXTENSION));
    }
}
