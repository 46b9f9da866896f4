//! The palette generation pipeline.
//!
//! Wires the passes together: inference completes the brand seeds, the
//! scale generator runs once per role, and the accessibility pass
//! optionally rewrites the four fixed contrast pairs per role. The
//! result is always a fully populated palette; past seed parsing there
//! is no failure path.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ERROR_SEED, DEFAULT_SUCCESS_SEED, DEFAULT_WARNING_SEED};
use crate::models::{Palette, SeedSet};
use crate::services::contrast::apply_accessibility_pass;
use crate::services::infer::infer_missing;
use crate::services::scale::{generate_neutral_scale, generate_scale};

/// Tunables for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Run the WCAG contrast pass over the finished palette.
    pub accessible: bool,
    /// Seed for the success scale.
    pub success_seed: String,
    /// Seed for the warning scale.
    pub warning_seed: String,
    /// Seed for the error scale.
    pub error_seed: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            accessible: false,
            success_seed: DEFAULT_SUCCESS_SEED.to_string(),
            warning_seed: DEFAULT_WARNING_SEED.to_string(),
            error_seed: DEFAULT_ERROR_SEED.to_string(),
        }
    }
}

/// Generates a complete palette from a (possibly partial) seed set.
///
/// Mutates `seeds` in place: inference fills any `Unset` slot and the
/// filled values persist as `Derived`, so a later regeneration with the
/// same set reproduces the same palette. Brand scales are vivid, neutral
/// derives from the primary seed at low chroma, and the three state
/// scales come from the canonical (or overridden) seeds.
///
/// Never partial and never aborts: invalid seeds degrade per scale to
/// the gray fallback ramp.
#[must_use]
pub fn generate_palette(seeds: &mut SeedSet, options: &GeneratorOptions) -> Palette {
    infer_missing(seeds);

    // Inference guarantees all three hexes are present
    let primary_seed = seeds.primary.hex().unwrap_or_default().to_string();
    let secondary_seed = seeds.secondary.hex().unwrap_or_default().to_string();
    let accent_seed = seeds.accent.hex().unwrap_or_default().to_string();

    let mut palette = Palette {
        primary: generate_scale(&primary_seed),
        secondary: generate_scale(&secondary_seed),
        accent: generate_scale(&accent_seed),
        neutral: generate_neutral_scale(&primary_seed),
        success: generate_scale(&options.success_seed),
        warning: generate_scale(&options.warning_seed),
        error: generate_scale(&options.error_seed),
    };

    if options.accessible {
        apply_accessibility_pass(&mut palette);
    }

    palette
}
