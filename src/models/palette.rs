//! Fixed-shape palette structures: roles, steps, scales.
//!
//! The palette is deliberately closed: exactly 7 roles, exactly 10 steps
//! per role. Missing or extra keys are unrepresentable, which is what lets
//! the rest of the pipeline assume a fully populated result.

use anyhow::{bail, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The ten tonal steps of a scale, light to dark.
pub const STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// The seven semantic color roles, in canonical order.
pub const ROLES: [Role; 7] = [
    Role::Primary,
    Role::Secondary,
    Role::Accent,
    Role::Neutral,
    Role::Success,
    Role::Warning,
    Role::Error,
];

/// A semantic color role.
///
/// Brand roles (primary/secondary/accent) are seeded by the user or by
/// image extraction; the rest derive from the primary seed (neutral) or
/// from fixed canonical seeds (success/warning/error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Main brand color.
    Primary,
    /// Supporting brand color.
    Secondary,
    /// High-contrast highlight color.
    Accent,
    /// Low-chroma scale derived from the primary seed.
    Neutral,
    /// Positive-state color.
    Success,
    /// Caution-state color.
    Warning,
    /// Error-state color.
    Error,
}

impl Role {
    /// Lowercase name used in exports and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Neutral => "neutral",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Capitalized name used for design-tool variable paths ("Primary/500").
    #[must_use]
    pub const fn capitalized(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Accent => "Accent",
            Self::Neutral => "Neutral",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    /// Whether this role carries a user-controllable brand seed.
    #[must_use]
    pub const fn is_brand(self) -> bool {
        matches!(self, Self::Primary | Self::Secondary | Self::Accent)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "accent" => Ok(Self::Accent),
            "neutral" => Ok(Self::Neutral),
            "success" => Ok(Self::Success),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => bail!("Unknown color role '{other}'"),
        }
    }
}

/// Index of a step key within [`STEPS`], or `None` for an unknown key.
#[must_use]
pub fn step_index(step: u16) -> Option<usize> {
    STEPS.iter().position(|&s| s == step)
}

/// A 10-step tonal ramp for one role, keyed by [`STEPS`].
///
/// Invariant (for any valid seed): lightness is monotonically
/// non-increasing from step 50 to step 900.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale([String; 10]);

impl Scale {
    /// Builds a scale by evaluating `f` for each step in order.
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(u16) -> String) -> Self {
        Self(STEPS.map(&mut f))
    }

    /// Returns the hex value at `step`, or `None` for an unknown step key.
    #[must_use]
    pub fn get(&self, step: u16) -> Option<&str> {
        step_index(step).map(|i| self.0[i].as_str())
    }

    /// Replaces the hex value at `step`.
    ///
    /// # Errors
    ///
    /// Returns an error for a step key outside [`STEPS`].
    pub fn set(&mut self, step: u16, hex: String) -> Result<()> {
        let Some(i) = step_index(step) else {
            bail!("Unknown scale step '{step}'. Expected one of 50..900");
        };
        self.0[i] = hex;
        Ok(())
    }

    /// Iterates `(step, hex)` pairs in step order.
    pub fn entries(&self) -> impl Iterator<Item = (u16, &str)> {
        STEPS.iter().zip(self.0.iter()).map(|(&s, h)| (s, h.as_str()))
    }
}

impl Serialize for Scale {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(STEPS.len()))?;
        for (step, hex) in self.entries() {
            map.serialize_entry(&step.to_string(), hex)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Scale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ScaleVisitor;

        impl<'de> Visitor<'de> for ScaleVisitor {
            type Value = Scale;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of the 10 scale steps to hex strings")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Scale, A::Error> {
                let mut values: [Option<String>; 10] = Default::default();
                while let Some((key, hex)) = access.next_entry::<String, String>()? {
                    let step: u16 = key.parse().map_err(serde::de::Error::custom)?;
                    let i = step_index(step).ok_or_else(|| {
                        serde::de::Error::custom(format!("unknown scale step '{step}'"))
                    })?;
                    values[i] = Some(hex);
                }
                let mut out: [String; 10] = Default::default();
                for (i, slot) in values.into_iter().enumerate() {
                    out[i] = slot.ok_or_else(|| {
                        serde::de::Error::custom(format!("missing scale step '{}'", STEPS[i]))
                    })?;
                }
                Ok(Scale(out))
            }
        }

        deserializer.deserialize_map(ScaleVisitor)
    }
}

/// A complete design-system palette: all 7 roles, each fully populated.
///
/// Never constructed partially; the generator pipeline fills every role
/// before a `Palette` exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Main brand scale.
    pub primary: Scale,
    /// Supporting brand scale.
    pub secondary: Scale,
    /// Highlight scale.
    pub accent: Scale,
    /// Low-chroma scale tinted by the primary hue.
    pub neutral: Scale,
    /// Positive-state scale.
    pub success: Scale,
    /// Caution-state scale.
    pub warning: Scale,
    /// Error-state scale.
    pub error: Scale,
}

impl Palette {
    /// Returns the scale for `role`.
    #[must_use]
    pub fn scale(&self, role: Role) -> &Scale {
        match role {
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Accent => &self.accent,
            Role::Neutral => &self.neutral,
            Role::Success => &self.success,
            Role::Warning => &self.warning,
            Role::Error => &self.error,
        }
    }

    /// Returns a mutable reference to the scale for `role`.
    pub fn scale_mut(&mut self, role: Role) -> &mut Scale {
        match role {
            Role::Primary => &mut self.primary,
            Role::Secondary => &mut self.secondary,
            Role::Accent => &mut self.accent,
            Role::Neutral => &mut self.neutral,
            Role::Success => &mut self.success,
            Role::Warning => &mut self.warning,
            Role::Error => &mut self.error,
        }
    }

    /// Iterates `(role, scale)` pairs in canonical role order.
    pub fn scales(&self) -> impl Iterator<Item = (Role, &Scale)> {
        ROLES.iter().map(|&r| (r, self.scale(r)))
    }
}
