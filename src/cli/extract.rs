//! Extract command for pulling seed colors out of an image.

use crate::cli::common::{CliError, CliResult};
use crate::services::extract;
use clap::Args;
use std::path::PathBuf;

/// Extract up to three seed colors from an image
#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Path to a PNG/JPEG/GIF image
    #[arg(value_name = "FILE")]
    pub image: PathBuf,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> CliResult<()> {
        let seeds = extract::extract_from_file(&self.image)
            .map_err(|e| CliError::io(format!("Failed to extract seeds: {e}")))?;

        println!("primary: {}", seeds.primary);
        match seeds.secondary {
            Some(ref hex) => println!("secondary: {hex}"),
            None => println!("secondary: (unresolved)"),
        }
        println!("accent: {}", seeds.accent);

        Ok(())
    }
}
