//! Terminal logger setup

use crate::io::error::{MosaicError, Result};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Log level for the given verbosity flags; `quiet` wins over `verbose`
pub const fn level_filter(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install a stderr logger at the level chosen by the flags
///
/// # Errors
///
/// Returns an error if a global logger has already been installed
pub fn init_logging(quiet: bool, verbose: bool) -> Result<()> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    TermLogger::init(
        level_filter(quiet, verbose),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| MosaicError::InvalidParameter {
        parameter: "logger",
        value: String::new(),
        reason: e.to_string(),
    })
}
