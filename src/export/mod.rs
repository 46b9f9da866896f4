//! Export serializers for finished palettes.
//!
//! Deterministic plumbing over an already-generated palette: every
//! serializer walks the 7 roles and 10 steps in canonical order and
//! produces a string. Nothing here recomputes colors.

pub mod css;
pub mod csv;
pub mod json;
pub mod tailwind;

pub use css::generate_css;
pub use csv::generate_csv;
pub use json::generate_json;
pub use tailwind::generate_tailwind_config;

use std::str::FromStr;

use anyhow::Result;

use crate::models::Palette;

/// A supported export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values with contrast columns.
    Csv,
    /// CSS custom properties under `:root`.
    Css,
    /// Tailwind-style `module.exports` config.
    Tailwind,
    /// Pretty-printed JSON of the palette.
    Json,
}

impl ExportFormat {
    /// File extension for the format's default output filename.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Css => "css",
            Self::Tailwind => "js",
            Self::Json => "json",
        }
    }

    /// All formats, in canonical order; drives parsing and error text.
    pub const ALL: [Self; 4] = [Self::Csv, Self::Css, Self::Tailwind, Self::Json];

    /// Lowercase name as used on the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Css => "css",
            Self::Tailwind => "tailwind",
            Self::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|f| f.as_str()).collect();
                anyhow::anyhow!(
                    "Unknown export format '{s}'. Expected one of: {}",
                    names.join(", ")
                )
            })
    }
}

/// Serializes a palette in the given format.
///
/// # Errors
///
/// Only the JSON-backed formats can fail, and only on serializer
/// internals; palette content itself is always serializable.
pub fn export_palette(palette: &Palette, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => Ok(generate_csv(palette)),
        ExportFormat::Css => Ok(generate_css(palette)),
        ExportFormat::Tailwind => generate_tailwind_config(palette),
        ExportFormat::Json => generate_json(palette),
    }
}
