//! Mosaic assembly pipeline
//!
//! This module contains the stages that turn a source image into a mosaic:
//! - Block partitioning and randomised ordering
//! - Resampling, tile stamping and the source overlay
//! - The assembler that runs the stages in order

/// Resampling, stamping and overlay blending
pub mod compositor;
/// Mosaic configuration and stage orchestration
pub mod executor;
/// Canvas partitioning into tile-sized blocks
pub mod grid;

pub use executor::{MosaicAssembler, MosaicConfig, generate_mosaic};
pub use grid::Block;
