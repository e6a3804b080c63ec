//! Command-line interface for turning one or many photos into mosaics

use crate::assembly::executor::{MosaicAssembler, MosaicConfig};
use crate::io::configuration::{
    DEFAULT_BRIGHTNESS_WEIGHT, DEFAULT_MAX_USAGE, DEFAULT_OVERLAY_OPACITY, DEFAULT_TARGET_HEIGHT,
    DEFAULT_TILE_SIZE, DEFAULT_USAGE_PENALTY_WEIGHT, OUTPUT_EXTENSION, OUTPUT_SUFFIX,
    SOURCE_EXTENSIONS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{decode_image, encode_image};
use crate::io::progress::ProgressManager;
use crate::io::sources::load_tile_library;
use crate::library::tiles::TileLibrary;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Rebuild photos as mosaics of small tile images"
)]
/// Command-line arguments for the mosaic generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Source image or directory of images to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory of tile images
    #[arg(short, long, value_name = "DIR")]
    pub tiles: PathBuf,

    /// Output path (only valid for a single source image)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Edge length of each tile in pixels
    #[arg(short = 's', long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Height of the generated mosaic in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_TARGET_HEIGHT)]
    pub height: u32,

    /// Uses after which a tile is only chosen as a last resort
    #[arg(short, long, default_value_t = DEFAULT_MAX_USAGE)]
    pub max_usage: usize,

    /// Opacity of the source photo blended over the mosaic (0.0 to 1.0)
    #[arg(long, default_value_t = DEFAULT_OVERLAY_OPACITY)]
    pub opacity: f64,

    /// Score penalty per previous use of a tile
    #[arg(long, default_value_t = DEFAULT_USAGE_PENALTY_WEIGHT)]
    pub usage_penalty: f64,

    /// Weight of the brightness difference in the score
    #[arg(long, default_value_t = DEFAULT_BRIGHTNESS_WEIGHT)]
    pub brightness_weight: f64,

    /// Random seed for a reproducible block order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log matching statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Mosaic parameters described by the arguments
    pub const fn mosaic_config(&self) -> MosaicConfig {
        MosaicConfig {
            tile_size: self.tile_size,
            target_height: self.height,
            max_usage: self.max_usage,
            overlay_opacity: self.opacity,
            usage_penalty_weight: self.usage_penalty,
            brightness_weight: self.brightness_weight,
            seed: self.seed,
        }
    }
}

/// Orchestrates mosaic generation for every target with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate mosaics according to CLI arguments
    ///
    /// The tile library is loaded once and shared by every target.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the tile library
    /// cannot be built, or any target fails to load, assemble or save
    pub fn process(&mut self) -> Result<()> {
        let config = self.cli.mosaic_config();
        let mut assembler = MosaicAssembler::new(config)?;

        let files = self.collect_files()?;
        if self.cli.output.is_some() && files.len() > 1 {
            return Err(invalid_parameter(
                "output",
                &self.cli.target.display(),
                &"an explicit output path needs a single source image",
            ));
        }

        if files.is_empty() {
            return Ok(());
        }

        let mut library = load_tile_library(
            &self.cli.tiles,
            config.tile_size,
            self.progress_manager.as_mut(),
        )?;
        log::info!(
            "Loaded {} tiles from {}",
            library.len(),
            self.cli.tiles.display()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file, &mut library, &mut assembler)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !has_source_extension(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("must be one of: {}", SOURCE_EXTENSIONS.join(", ")),
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if has_source_extension(&path)
                    && !is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path_for(input_path);
        if output_path.exists() {
            log::info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        library: &mut TileLibrary,
        assembler: &mut MosaicAssembler,
    ) -> Result<()> {
        let start_time = Instant::now();
        let output_path = self.output_path_for(input_path);

        let source = decode_image(input_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_stage("Stamping", 0);
        }
        let progress = self.progress_manager.as_ref();
        let mosaic = assembler.assemble(&source, library, |done, total| {
            if let Some(pm) = progress {
                pm.update(done, total);
            }
        })?;
        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_stage();
        }

        encode_image(&mosaic, &output_path)?;

        let stats = assembler.stats();
        log::info!(
            "{} -> {} ({} blocks) in {:.2?}",
            input_path.display(),
            output_path.display(),
            stats.blocks,
            start_time.elapsed()
        );

        if let Some(ref pm) = self.progress_manager {
            pm.complete_target();
        }

        Ok(())
    }

    fn output_path_for(&self, input_path: &Path) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| Self::get_output_path(input_path))
    }

    /// Default output location: `<stem>_mosaic.png` beside the input
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
            stem.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

// Re-running over a directory must not turn earlier mosaics into new targets
fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
