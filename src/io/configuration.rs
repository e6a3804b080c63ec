//! Mosaic constants and runtime configuration defaults

use image::imageops::FilterType;

// Grid and output geometry
/// Edge length of a square tile in pixels
pub const DEFAULT_TILE_SIZE: u32 = 60;

/// Height of the resized source canvas in pixels
pub const DEFAULT_TARGET_HEIGHT: u32 = 5000;

// Safety limits to prevent excessive memory allocation
/// Maximum allowed canvas height
pub const MAX_TARGET_HEIGHT: u32 = 20_000;
/// Maximum allowed canvas width after scaling to the target height
pub const MAX_TARGET_WIDTH: u32 = 40_000;

// Matching parameters
/// Number of selections after which a tile is only used as a fallback
pub const DEFAULT_MAX_USAGE: usize = 30;
/// Score added per previous use of a tile
pub const DEFAULT_USAGE_PENALTY_WEIGHT: f64 = 3.5;
/// Multiplier for the brightness difference between block and tile
pub const DEFAULT_BRIGHTNESS_WEIGHT: f64 = 3.0;

/// Translucency of the source image blended over the finished mosaic
pub const DEFAULT_OVERLAY_OPACITY: f64 = 0.17;

// Triangle support widens with the downscale ratio, so it averages areas
/// Resampling filter for both source and tile resizing
pub const RESAMPLE_FILTER: FilterType = FilterType::Triangle;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Extension of generated mosaics when no explicit output path is given
pub const OUTPUT_EXTENSION: &str = "png";
/// Extensions picked up when the target is a directory
pub const SOURCE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
