//! Usage-fair tile selection by colour and brightness score

use crate::color::stats::{Color, brightness, color_distance};
use crate::io::configuration::{
    DEFAULT_BRIGHTNESS_WEIGHT, DEFAULT_MAX_USAGE, DEFAULT_USAGE_PENALTY_WEIGHT,
};
use crate::io::error::{MosaicError, Result};
use crate::library::tiles::{Tile, TileLibrary};

/// Parameters of the selection score and the fairness cap
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchWeights {
    /// Tiles used this many times are skipped unless every tile is saturated
    pub max_usage: usize,
    /// Score added per previous use of a tile
    pub usage_penalty_weight: f64,
    /// Multiplier for the absolute brightness difference
    pub brightness_weight: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            max_usage: DEFAULT_MAX_USAGE,
            usage_penalty_weight: DEFAULT_USAGE_PENALTY_WEIGHT,
            brightness_weight: DEFAULT_BRIGHTNESS_WEIGHT,
        }
    }
}

/// Which scan of the library produced a selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionPass {
    /// Only tiles below the usage cap were considered
    Capped,
    /// Every tile was saturated, so the whole library was scanned
    Fallback,
}

/// Result of a selection with the pass that produced it
#[derive(Debug)]
pub struct TileMatch<'a> {
    /// The chosen tile, after its usage counter was incremented
    pub tile: &'a Tile,
    /// Position of the tile in load order
    pub index: usize,
    /// Scan that found the tile
    pub pass: SelectionPass,
    /// Score of the tile before its usage was incremented
    pub score: f64,
}

/// Picks tiles for target colours and accounts for their usage
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchEngine {
    weights: MatchWeights,
}

impl MatchEngine {
    /// Create an engine with the given weights
    pub const fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    /// Weights used for scoring
    pub const fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Composite cost of using `tile` for a block of colour `target`
    ///
    /// Lower is better. `target_brightness` is passed in so a scan computes
    /// it only once.
    // Plain left-to-right sum: a fused multiply-add rounds differently and
    // can flip the choice between near-equal tiles
    #[allow(clippy::suboptimal_flops)]
    pub fn score(&self, target: Color, target_brightness: f64, tile: &Tile) -> f64 {
        let tile_color = tile.average_color();
        let brightness_difference = (target_brightness - brightness(tile_color)).abs();
        let usage_penalty = tile.usage_count() as f64 * self.weights.usage_penalty_weight;

        color_distance(target, tile_color)
            + usage_penalty
            + brightness_difference * self.weights.brightness_weight
    }

    /// Select the best tile for `target` and record its use
    ///
    /// # Errors
    ///
    /// Returns `EmptyTileLibrary` if the library has no tiles
    pub fn select<'a>(&self, target: Color, library: &'a mut TileLibrary) -> Result<&'a Tile> {
        self.select_match(target, library).map(|found| found.tile)
    }

    /// Select the best tile for `target`, reporting which pass found it
    ///
    /// Tiles below the usage cap are scanned first. Only when none remain
    /// is the entire library rescanned without the cap. Ties keep the tile
    /// that comes first in load order.
    ///
    /// # Errors
    ///
    /// Returns `EmptyTileLibrary` if the library has no tiles
    pub fn select_match<'a>(
        &self,
        target: Color,
        library: &'a mut TileLibrary,
    ) -> Result<TileMatch<'a>> {
        let target_brightness = brightness(target);
        let candidates: &TileLibrary = library;

        let (index, score, pass) = [SelectionPass::Capped, SelectionPass::Fallback]
            .into_iter()
            .find_map(|pass| {
                self.best_candidate(target, target_brightness, candidates, pass)
                    .map(|(index, score)| (index, score, pass))
            })
            .ok_or(MosaicError::EmptyTileLibrary { candidates: 0 })?;

        let tile = library
            .get_mut(index)
            .ok_or(MosaicError::EmptyTileLibrary { candidates: 0 })?;
        tile.record_use();

        Ok(TileMatch {
            tile,
            index,
            pass,
            score,
        })
    }

    fn best_candidate(
        &self,
        target: Color,
        target_brightness: f64,
        library: &TileLibrary,
        pass: SelectionPass,
    ) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;

        for (index, tile) in library.tiles().iter().enumerate() {
            if pass == SelectionPass::Capped && tile.usage_count() >= self.weights.max_usage {
                continue;
            }

            let score = self.score(target, target_brightness, tile);
            // Strict comparison keeps the earliest tile on ties
            if best.is_none_or(|(_, best_score)| score < best_score) {
                best = Some((index, score));
            }
        }

        best
    }
}
