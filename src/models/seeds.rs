//! Brand seed tracking with explicit provenance.
//!
//! The original interactive flow silently wrote auto-derived seeds back
//! into input state so they would stop re-deriving on the next change.
//! Here that bookkeeping is explicit: every brand seed is `Unset`,
//! `UserSet`, or `Derived`, and inference only ever fills `Unset`.

use serde::{Deserialize, Serialize};

use super::Role;

/// One brand seed slot, with provenance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "hex", rename_all = "lowercase")]
pub enum Seed {
    /// No value yet; inference will fill this.
    #[default]
    Unset,
    /// Entered by the user (typed, extracted, or edited at step 500).
    UserSet(String),
    /// Filled by inference or a hue-propagating edit; stable until the
    /// user overrides it.
    Derived(String),
}

impl Seed {
    /// The hex value, regardless of provenance, or `None` when unset.
    #[must_use]
    pub fn hex(&self) -> Option<&str> {
        match self {
            Self::Unset => None,
            Self::UserSet(hex) | Self::Derived(hex) => Some(hex),
        }
    }

    /// Whether this slot still needs inference.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

/// The three brand seed slots for one session.
///
/// Created from manual entry or image extraction, completed by inference,
/// and promoted by seed-level edits. Reset wholesale when the user
/// restarts input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeedSet {
    /// Primary brand seed.
    pub primary: Seed,
    /// Secondary brand seed.
    pub secondary: Seed,
    /// Accent brand seed.
    pub accent: Seed,
}

impl SeedSet {
    /// Builds a seed set from optional manual hex entries.
    ///
    /// Present values become `UserSet`; absent ones stay `Unset` for the
    /// inference pass. Values are not validated here; invalid hex surfaces
    /// later through the codec's documented fallbacks.
    #[must_use]
    pub fn from_manual(
        primary: Option<&str>,
        secondary: Option<&str>,
        accent: Option<&str>,
    ) -> Self {
        let slot = |v: Option<&str>| v.map_or(Seed::Unset, |hex| Seed::UserSet(hex.to_string()));
        Self {
            primary: slot(primary),
            secondary: slot(secondary),
            accent: slot(accent),
        }
    }

    /// Returns the seed slot for a brand role, or `None` for derived roles.
    #[must_use]
    pub fn seed(&self, role: Role) -> Option<&Seed> {
        match role {
            Role::Primary => Some(&self.primary),
            Role::Secondary => Some(&self.secondary),
            Role::Accent => Some(&self.accent),
            _ => None,
        }
    }

    /// Mutable access to the seed slot for a brand role.
    pub fn seed_mut(&mut self, role: Role) -> Option<&mut Seed> {
        match role {
            Role::Primary => Some(&mut self.primary),
            Role::Secondary => Some(&mut self.secondary),
            Role::Accent => Some(&mut self.accent),
            _ => None,
        }
    }
}
