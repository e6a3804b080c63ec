/// Two-pass tile selection with a usage cap and fallback
pub mod selection;

pub use selection::{MatchEngine, MatchWeights, SelectionPass, TileMatch};
