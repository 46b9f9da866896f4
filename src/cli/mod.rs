//! CLI command handlers for Hueforge.
//!
//! This module provides headless, scriptable access to Hueforge's core
//! functionality for automation, testing, and CI/CD integration.

pub mod common;
pub mod extract;
pub mod generate;

// Re-export types used by main.rs and tests
pub use common::ExitCode;
pub use extract::ExtractArgs;
pub use generate::GenerateArgs;
