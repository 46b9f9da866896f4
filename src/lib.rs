//! Hueforge Library
//!
//! This library provides core functionality for the Hueforge palette
//! generator: hex/LCh color conversion, tonal scale generation, seed
//! inference, WCAG contrast correction, image seed extraction, edit
//! propagation, and exporters for common design-token formats.

// Module declarations
pub mod bridge;
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;
