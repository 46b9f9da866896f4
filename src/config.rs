//! Configuration management for the application.
//!
//! Handles loading, validating, and saving application configuration in
//! TOML format with platform-specific directory resolution. Everything
//! here is optional: a missing config file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{
    APP_BINARY_NAME, APP_NAME, DEFAULT_ERROR_SEED, DEFAULT_SUCCESS_SEED, DEFAULT_WARNING_SEED,
};
use crate::services::generator::GeneratorOptions;

/// State-scale seed overrides.
///
/// The success/warning/error scales normally come from fixed canonical
/// seeds; teams with existing state colors override them here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSeedConfig {
    /// Seed for the success scale.
    pub success: String,
    /// Seed for the warning scale.
    pub warning: String,
    /// Seed for the error scale.
    pub error: String,
}

impl Default for StateSeedConfig {
    fn default() -> Self {
        Self {
            success: DEFAULT_SUCCESS_SEED.to_string(),
            warning: DEFAULT_WARNING_SEED.to_string(),
            error: DEFAULT_ERROR_SEED.to_string(),
        }
    }
}

/// Design-tool bridge settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Name of the variable collection palettes are synced into.
    pub collection: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            collection: APP_NAME.to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Run the WCAG contrast pass unless overridden on the command line.
    pub accessible: bool,
    /// State-scale seed overrides.
    pub seeds: StateSeedConfig,
    /// Design-tool bridge settings.
    pub bridge: BridgeConfig,
}

impl Config {
    /// Resolves the configuration directory.
    ///
    /// - Linux: `~/.config/hueforge/`
    /// - macOS: `~/Library/Application Support/hueforge/`
    /// - Windows: `%APPDATA%\hueforge\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join(APP_BINARY_NAME))
    }

    /// Path of the config file itself.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads the configuration, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or
    /// parsed; a malformed config should be surfaced, not ignored.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Saves the configuration, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Generator options derived from this config.
    #[must_use]
    pub fn generator_options(&self, accessible_flag: bool) -> GeneratorOptions {
        GeneratorOptions {
            accessible: self.accessible || accessible_flag,
            success_seed: self.seeds.success.clone(),
            warning_seed: self.seeds.warning.clone(),
            error_seed: self.seeds.error.clone(),
        }
    }
}
