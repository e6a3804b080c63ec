//! CLI entry point for the photomosaic generator

use clap::Parser;
use photomosaic::io::cli::{Cli, FileProcessor};
use photomosaic::io::logging::init_logging;

fn main() -> photomosaic::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose)?;
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
