//! CLI entry point for the mosaic decomposition tool

use clap::Parser;
use mosaic_decomposer::io::cli::{Cli, run, write_tiles};
use mosaic_decomposer::io::error::invalid_parameter;
use mosaic_decomposer::io::logging::{log_spec, setup_logging};

fn main() -> mosaic_decomposer::Result<()> {
    let cli = Cli::parse();

    let spec = log_spec(cli.quiet, cli.log_level.as_deref());
    let _logger = setup_logging(spec).map_err(|e| invalid_parameter("log-level", &spec, &e))?;

    let tiles = run(&cli)?;
    write_tiles(&mut std::io::stdout().lock(), &tiles)
}
