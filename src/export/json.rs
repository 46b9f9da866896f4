//! JSON export.

use anyhow::{Context, Result};

use crate::models::Palette;

/// Serializes the palette as pretty-printed JSON.
///
/// Roles are top-level keys in canonical order, each mapping step keys
/// to hex strings.
pub fn generate_json(palette: &Palette) -> Result<String> {
    serde_json::to_string_pretty(palette).context("Failed to serialize palette to JSON")
}
