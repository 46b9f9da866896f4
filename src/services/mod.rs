//! Service layer for palette generation and mutation.
//!
//! This module contains the algorithmic core: scale generation, seed
//! inference, WCAG contrast correction, image extraction, the generator
//! pipeline, and edit propagation.

pub mod contrast;
pub mod edit;
pub mod extract;
pub mod generator;
pub mod infer;
pub mod scale;

// Re-export commonly used types and functions
pub use contrast::auto_fix_color;
pub use edit::{apply_edit, EditOutcome};
pub use extract::{extract_from_file, extract_from_rgba, ExtractedSeeds};
pub use generator::{generate_palette, GeneratorOptions};
pub use infer::infer_missing;
pub use scale::{generate_neutral_scale, generate_scale};
