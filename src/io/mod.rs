/// Command-line parsing and batch processing
pub mod cli;
/// Default parameters and output naming
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Terminal logger setup
pub mod logging;
/// Progress bars for loading and stamping
pub mod progress;
/// Tile directory enumeration and library loading
pub mod sources;
