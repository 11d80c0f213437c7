//! Depbuild CLI - dependency-ordered build orchestrator
//!
//! Entry point for the depbuild command-line application.

use anyhow::Result;
use clap::Parser;

use depbuild::cli::output::{display_error, OutputConfig};
use depbuild::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Apply output configuration globally (installs the tracing subscriber)
    let output_config = OutputConfig::new(cli.quiet, cli.json, cli.verbose);
    output_config.apply_global();

    // Run the command and handle errors
    match cli.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
