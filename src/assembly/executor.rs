use crate::assembly::compositor::{crop_region, overlay, resize_to_height, stamp_tile};
use crate::assembly::grid::{partition, shuffle_blocks};
use crate::color::stats::average_color;
use crate::io::configuration::{
    DEFAULT_BRIGHTNESS_WEIGHT, DEFAULT_MAX_USAGE, DEFAULT_OVERLAY_OPACITY, DEFAULT_TARGET_HEIGHT,
    DEFAULT_TILE_SIZE, DEFAULT_USAGE_PENALTY_WEIGHT, MAX_TARGET_HEIGHT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::library::tiles::TileLibrary;
use crate::matching::selection::{MatchEngine, MatchWeights, SelectionPass};
use image::RgbImage;
use rand::{SeedableRng, rngs::StdRng};

/// Parameters of a single mosaic run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MosaicConfig {
    /// Edge length of each square tile in pixels
    pub tile_size: u32,
    /// Height the source is resized to before partitioning
    pub target_height: u32,
    /// Selections after which a tile is only used as a fallback
    pub max_usage: usize,
    /// Opacity of the source overlay in `[0, 1]`
    pub overlay_opacity: f64,
    /// Score added per previous use of a tile
    pub usage_penalty_weight: f64,
    /// Multiplier for the brightness difference
    pub brightness_weight: f64,
    /// Seed for the block order; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            target_height: DEFAULT_TARGET_HEIGHT,
            max_usage: DEFAULT_MAX_USAGE,
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
            usage_penalty_weight: DEFAULT_USAGE_PENALTY_WEIGHT,
            brightness_weight: DEFAULT_BRIGHTNESS_WEIGHT,
            seed: None,
        }
    }
}

impl MosaicConfig {
    /// Scoring parameters for the match engine
    pub const fn match_weights(&self) -> MatchWeights {
        MatchWeights {
            max_usage: self.max_usage,
            usage_penalty_weight: self.usage_penalty_weight,
            brightness_weight: self.brightness_weight,
        }
    }

    /// Check every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending field
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &"must be at least one pixel",
            ));
        }
        if self.target_height == 0 || self.target_height > MAX_TARGET_HEIGHT {
            return Err(invalid_parameter(
                "target_height",
                &self.target_height,
                &format!("must be between 1 and {MAX_TARGET_HEIGHT}"),
            ));
        }
        if self.max_usage == 0 {
            return Err(invalid_parameter(
                "max_usage",
                &self.max_usage,
                &"must allow at least one use per tile",
            ));
        }
        if !(0.0..=1.0).contains(&self.overlay_opacity) {
            return Err(invalid_parameter(
                "overlay_opacity",
                &self.overlay_opacity,
                &"must be between 0.0 and 1.0",
            ));
        }
        for (parameter, weight) in [
            ("usage_penalty_weight", self.usage_penalty_weight),
            ("brightness_weight", self.brightness_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &weight,
                    &"must be a finite, non-negative number",
                ));
            }
        }
        Ok(())
    }
}

/// Counters describing a finished run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssemblyStats {
    /// Blocks stamped onto the canvas
    pub blocks: usize,
    /// Selections that had to ignore the usage cap
    pub fallback_selections: usize,
    /// Canvas dimensions (width, height)
    pub canvas: (u32, u32),
}

/// Runs the resize, partition, shuffle, stamp and overlay stages
pub struct MosaicAssembler {
    config: MosaicConfig,
    engine: MatchEngine,
    rng: StdRng,
    stats: AssemblyStats,
}

impl MosaicAssembler {
    /// Create an assembler after validating the configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration is unusable
    pub fn new(config: MosaicConfig) -> Result<Self> {
        config.validate()?;
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Ok(Self {
            config,
            engine: MatchEngine::new(config.match_weights()),
            rng,
            stats: AssemblyStats::default(),
        })
    }

    /// Configuration of this assembler
    pub const fn config(&self) -> &MosaicConfig {
        &self.config
    }

    /// Counters from the most recent run
    pub const fn stats(&self) -> AssemblyStats {
        self.stats
    }

    /// Build a mosaic of `source` from `library`
    ///
    /// Usage counters are reset first, so a library can be shared across
    /// runs. A seeded assembler restarts its block order on every call, so
    /// each run matches a fresh assembler with the same seed. `on_block` is
    /// called with (stamped, total) after every block.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The library was loaded with a different tile size
    /// - The library is empty
    /// - The source cannot be scaled to the target height
    pub fn assemble<F>(
        &mut self,
        source: &RgbImage,
        library: &mut TileLibrary,
        mut on_block: F,
    ) -> Result<RgbImage>
    where
        F: FnMut(usize, usize),
    {
        let tile_size = self.config.tile_size;
        if library.tile_size() != tile_size {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &format!("library tiles are {}px", library.tile_size()),
            ));
        }
        library.reset_usage();
        if let Some(seed) = self.config.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }

        let resized = resize_to_height(source, self.config.target_height)?;
        let (width, height) = resized.dimensions();
        log::info!("Source resized to {width} x {height}");

        let mut blocks = partition(width, height, tile_size);
        shuffle_blocks(&mut blocks, &mut self.rng);

        let mut canvas = RgbImage::new(width, height);
        let total = blocks.len();
        let mut fallback_selections = 0;

        for (stamped, block) in blocks.iter().enumerate() {
            let target = average_color(&*crop_region(&resized, block)?)?;
            let found = self.engine.select_match(target, library)?;
            if found.pass == SelectionPass::Fallback {
                fallback_selections += 1;
            }
            stamp_tile(&mut canvas, found.tile, block)?;
            on_block(stamped + 1, total);
        }

        overlay(&mut canvas, &resized, self.config.overlay_opacity)?;

        self.stats = AssemblyStats {
            blocks: total,
            fallback_selections,
            canvas: (width, height),
        };
        log::debug!(
            "Stamped {total} blocks, {fallback_selections} past the usage cap of {}",
            self.config.max_usage
        );

        Ok(canvas)
    }
}

/// Build a mosaic of `source` from `library` with the given configuration
///
/// # Errors
///
/// Returns an error if the configuration is invalid or any stage fails;
/// no partial canvas is returned
pub fn generate_mosaic(
    source: &RgbImage,
    library: &mut TileLibrary,
    config: &MosaicConfig,
) -> Result<RgbImage> {
    MosaicAssembler::new(*config)?.assemble(source, library, |_, _| {})
}
