#![deny(missing_docs)]

//! # Typesmith CLI
//!
//! Command Line Interface for the versioned Java class generator.
//!
//! Supported Commands:
//! - `generate`: Emits the class files described by a manifest.
//! - `preview`: Renders the same manifest to stdout without writing files.

use clap::{Parser, Subcommand};

use crate::error::CliResult;

mod error;
mod generate;
mod manifest;
mod preview;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Versioned Java class generator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generates class files from an artifact manifest.
    Generate(generate::GenerateArgs),
    /// Prints the rendered class files without touching the filesystem.
    Preview(preview::PreviewArgs),
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
        Commands::Preview(args) => preview::execute(args)?,
    }

    Ok(())
}
