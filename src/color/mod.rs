//! Colour statistics used for matching blocks against tiles

/// Average colour, brightness and colour distance
pub mod stats;

pub use stats::Color;
