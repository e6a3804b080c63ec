//! Photomosaic generation with usage-fair tile matching
//!
//! A source photo is resized, cut into tile-sized blocks and every block is
//! replaced by the library tile whose average colour and brightness match it
//! best, with a penalty on tiles that have already been used. A faint copy of
//! the source is blended over the result to keep it recognisable.

#![forbid(unsafe_code)]

/// Mosaic assembly pipeline: partitioning, stamping and overlay
pub mod assembly;
/// Average colour, brightness and colour distance
pub mod color;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tile library loading and usage tracking
pub mod library;
/// Tile selection under a usage cap
pub mod matching;

pub use assembly::{MosaicAssembler, MosaicConfig, generate_mosaic};
pub use io::error::{MosaicError, Result};
pub use library::{Tile, TileLibrary};
