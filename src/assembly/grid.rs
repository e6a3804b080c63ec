//! Block partitioning of the canvas and randomised processing order

use rand::Rng;
use rand::seq::SliceRandom;

/// A rectangular canvas region replaced by one tile
///
/// Blocks are `tile_size` square except at the right and bottom edges,
/// where they are clipped to the remaining canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    /// Left edge in canvas pixels
    pub x: u32,
    /// Top edge in canvas pixels
    pub y: u32,
    /// Width in pixels, never zero
    pub width: u32,
    /// Height in pixels, never zero
    pub height: u32,
}

impl Block {
    /// Number of pixels covered by the block
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the block was clipped at a canvas edge
    pub const fn is_clipped(&self, tile_size: u32) -> bool {
        self.width < tile_size || self.height < tile_size
    }
}

/// Cover a `width` x `height` canvas with blocks in row-major order
///
/// Returns no blocks if any dimension or `tile_size` is zero.
pub fn partition(width: u32, height: u32, tile_size: u32) -> Vec<Block> {
    if tile_size == 0 || width == 0 || height == 0 {
        return Vec::new();
    }

    let step = tile_size as usize;
    let columns = width.div_ceil(tile_size) as usize;
    let rows = height.div_ceil(tile_size) as usize;
    let mut blocks = Vec::with_capacity(columns * rows);

    for y in (0..height).step_by(step) {
        for x in (0..width).step_by(step) {
            blocks.push(Block {
                x,
                y,
                width: tile_size.min(width - x),
                height: tile_size.min(height - y),
            });
        }
    }

    blocks
}

/// Permute blocks uniformly at random in place
pub fn shuffle_blocks<R: Rng + ?Sized>(blocks: &mut [Block], rng: &mut R) {
    blocks.shuffle(rng);
}
