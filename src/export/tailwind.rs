//! Tailwind-style config export.

use anyhow::{Context, Result};
use serde_json::json;

use crate::models::Palette;

/// Serializes the palette as a Tailwind `module.exports` snippet.
///
/// The colors land under `theme.extend.colors.<role>.<step>`, ready to
/// paste into a `tailwind.config.js`.
pub fn generate_tailwind_config(palette: &Palette) -> Result<String> {
    let config = json!({
        "theme": {
            "extend": {
                "colors": palette,
            }
        }
    });

    let body = serde_json::to_string_pretty(&config)
        .context("Failed to serialize Tailwind config")?;
    Ok(format!("module.exports = {body};\n"))
}
