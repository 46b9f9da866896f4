//! Single-cell edit commands.

use serde::{Deserialize, Serialize};

use super::Role;

/// A request to change one palette cell.
///
/// Transient: applied atomically against the live palette and seed set,
/// never queued. A second edit issued before the first completes is
/// undefined by contract; callers serialize edit application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRequest {
    /// The role whose scale is being edited.
    pub role: Role,
    /// The step key within the scale (one of 50..900).
    pub step: u16,
    /// The replacement color as a hex string.
    pub new_hex: String,
}

impl EditRequest {
    /// Creates an edit request.
    #[must_use]
    pub fn new(role: Role, step: u16, new_hex: impl Into<String>) -> Self {
        Self {
            role,
            step,
            new_hex: new_hex.into(),
        }
    }
}
