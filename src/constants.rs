//! Application-wide constants.
//!
//! Seed defaults and the contrast floor live here so the generator,
//! inference, and accessibility passes agree on them.

/// The display name of the application.
pub const APP_NAME: &str = "Hueforge";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "hueforge";

/// Fallback primary seed when no brand color is known (Tailwind blue-500).
pub const DEFAULT_PRIMARY_SEED: &str = "#3b82f6";

/// Canonical success seed (green-500).
pub const DEFAULT_SUCCESS_SEED: &str = "#22c55e";

/// Canonical warning seed (yellow-500).
pub const DEFAULT_WARNING_SEED: &str = "#eab308";

/// Canonical error seed (red-500).
pub const DEFAULT_ERROR_SEED: &str = "#ef4444";

/// WCAG 2.1 AA contrast floor for normal text.
pub const MIN_CONTRAST_RATIO: f64 = 4.5;

/// Hue substituted for achromatic seeds before any hue shift (blue-ish).
pub const ACHROMATIC_FALLBACK_HUE: f64 = 250.0;
