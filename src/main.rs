//! AUTOCROP CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, trim the
//! input's transparent border, and write the logo and favicon copies.
//! For programmatic use, prefer the library API (`autocrop::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)?;
    Ok(())
}
