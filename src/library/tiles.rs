//! Tile library construction and per-tile usage tracking

use crate::assembly::compositor::resize_exact;
use crate::color::stats::{Color, average_color};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use image::RgbImage;

/// A square candidate image with its precomputed average colour
#[derive(Clone, Debug)]
pub struct Tile {
    pixels: RgbImage,
    average_color: Color,
    usage_count: usize,
}

impl Tile {
    /// Wrap an already-sized tile image, computing its average colour once
    ///
    /// # Errors
    ///
    /// Returns `InvalidRegion` if the image has no pixels
    pub fn new(pixels: RgbImage) -> Result<Self> {
        let average_color = average_color(&pixels)?;
        Ok(Self {
            pixels,
            average_color,
            usage_count: 0,
        })
    }

    /// Tile pixel data
    pub const fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// Average colour of every pixel in the tile
    pub const fn average_color(&self) -> Color {
        self.average_color
    }

    /// Number of times the tile has been selected in the current run
    pub const fn usage_count(&self) -> usize {
        self.usage_count
    }

    pub(crate) const fn record_use(&mut self) {
        self.usage_count += 1;
    }
}

/// Ordered, non-empty set of tiles sharing one edge length
#[derive(Clone, Debug)]
pub struct TileLibrary {
    tiles: Vec<Tile>,
    tile_size: u32,
}

impl TileLibrary {
    /// Resize every decoded source to `tile_size` square and annotate it
    ///
    /// Sources are kept in the order given; undecodable files must be
    /// filtered out by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tile_size` is zero
    /// - No sources were provided
    pub fn load<I>(sources: I, tile_size: u32) -> Result<Self>
    where
        I: IntoIterator<Item = RgbImage>,
    {
        if tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &"must be at least one pixel",
            ));
        }

        let mut tiles = Vec::new();
        let mut candidates = 0;
        for source in sources {
            candidates += 1;
            // Zero-sized decodes cannot be resampled; treat them like decode failures
            if source.width() == 0 || source.height() == 0 {
                log::warn!("Skipping empty tile source #{candidates}");
                continue;
            }
            let resized = resize_exact(&source, tile_size, tile_size);
            tiles.push(Tile::new(resized)?);
        }

        if tiles.is_empty() {
            return Err(MosaicError::EmptyTileLibrary { candidates });
        }

        log::debug!("Loaded {} tiles of {tile_size}px", tiles.len());
        Ok(Self { tiles, tile_size })
    }

    /// Edge length shared by every tile
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Number of tiles in the library
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the library holds no tiles (never true after `load`)
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in load order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at `index` in load order
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    /// Zero every usage counter so the next run starts fair
    pub fn reset_usage(&mut self) {
        for tile in &mut self.tiles {
            tile.usage_count = 0;
        }
    }

    /// Sum of all usage counters
    pub fn total_usage(&self) -> usize {
        self.tiles.iter().map(Tile::usage_count).sum()
    }
}
