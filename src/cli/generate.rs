//! Generate command for building a complete palette from seeds.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::{self, ExportFormat};
use crate::models::color::is_valid_hex;
use crate::models::{Role, Seed, SeedSet};
use crate::services::extract;
use crate::services::generator;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Generate a full seven-role palette and export it
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Primary brand seed as hex (e.g. "#3b82f6")
    #[arg(short, long, value_name = "HEX")]
    pub primary: Option<String>,

    /// Secondary brand seed as hex
    #[arg(short, long, value_name = "HEX")]
    pub secondary: Option<String>,

    /// Accent brand seed as hex
    #[arg(short, long, value_name = "HEX")]
    pub accent: Option<String>,

    /// Extract seeds from an image instead of typing them
    #[arg(long, value_name = "FILE", conflicts_with_all = ["primary", "secondary", "accent"])]
    pub image: Option<PathBuf>,

    /// Enforce WCAG AA contrast on key step pairs
    #[arg(long)]
    pub accessible: bool,

    /// Export format
    #[arg(short, long, value_name = "FORMAT", default_value = "json")]
    pub format: ExportFormat,

    /// Output path (defaults to palette_[date].[ext])
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        // Validate typed seeds up front so nothing is generated from garbage
        for (flag, value) in [
            ("--primary", &self.primary),
            ("--secondary", &self.secondary),
            ("--accent", &self.accent),
        ] {
            if let Some(hex) = value {
                if !is_valid_hex(hex) {
                    return Err(CliError::validation(format!(
                        "Invalid hex color for {flag}: {hex}"
                    )));
                }
            }
        }

        let mut seeds = if let Some(ref image_path) = self.image {
            let extracted = extract::extract_from_file(image_path)
                .map_err(|e| CliError::io(format!("Failed to extract seeds: {e}")))?;
            extracted.into_seed_set()
        } else {
            SeedSet::from_manual(
                self.primary.as_deref(),
                self.secondary.as_deref(),
                self.accent.as_deref(),
            )
        };

        // A missing config file is already the default inside load();
        // anything that errors here is a real malformation worth stopping on.
        let config =
            Config::load().map_err(|e| CliError::validation(format!("Invalid config: {e}")))?;
        let options = config.generator_options(self.accessible);

        let palette = generator::generate_palette(&mut seeds, &options);

        let content = export::export_palette(&palette, self.format)
            .map_err(|e| CliError::io(format!("Failed to serialize palette: {e}")))?;

        let output_path = self.get_output_path();
        fs::write(&output_path, content)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        for role in [Role::Primary, Role::Secondary, Role::Accent] {
            if let Some(hex) = seeds.seed(role).and_then(Seed::hex) {
                println!("Seed ({role}): {hex}");
            }
        }
        println!("\u{2713} Exported palette to: {}", output_path.display());

        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        // Auto-generate filename: palette_[date].[ext]
        let date = chrono::Local::now().format("%Y-%m-%d");
        PathBuf::from(format!("palette_{}.{}", date, self.format.extension()))
    }
}
