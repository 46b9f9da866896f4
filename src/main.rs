//! Hueforge - Accessible color palette generator
//!
//! This application turns one to three brand seed colors (typed as hex or
//! extracted from an image) into a complete seven-role, ten-step design
//! system palette, exported as CSV, CSS custom properties, a Tailwind
//! config, or JSON.

use clap::{Parser, Subcommand};
use hueforge::cli::{ExtractArgs, GenerateArgs};
use std::process::ExitCode;

/// Hueforge - Accessible color palette generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a full seven-role palette and export it
    Generate(GenerateArgs),
    /// Extract up to three seed colors from an image
    Extract(ExtractArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Extract(args) => args.execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code().into()
        }
    }
}
