//! Data models for colors, scales, palettes, and edits.
//!
//! This module contains the core data structures used throughout the
//! crate. Models are independent of the generation and export logic.

pub mod color;
pub mod edit;
pub mod palette;
pub mod seeds;

// Re-export all model types
pub use color::{circular_hue_distance, contrast_ratio, is_valid_hex, parse_hex, Lch};
pub use edit::EditRequest;
pub use palette::{step_index, Palette, Role, Scale, ROLES, STEPS};
pub use seeds::{Seed, SeedSet};
