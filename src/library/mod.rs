//! Tile library management
//!
//! Tiles are resized and colour-annotated once at load time; only their
//! usage counters change afterwards.

/// Tile and tile library types
pub mod tiles;

pub use tiles::{Tile, TileLibrary};
