//! Design-tool variable bridge.
//!
//! Pushes a finished palette into a host application's variable store
//! (a Figma-style design tool) as color variables named `"Role/step"`
//! inside one named collection. The host itself sits behind the
//! [`VariableHost`] trait so the sync logic is testable without a live
//! host; the in-memory implementation backs the tests.

use anyhow::{Context, Result};

use crate::models::{parse_hex, Palette};

/// An RGB color normalized to 0.0-1.0 per channel, as design-tool
/// variable APIs expect it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableColor {
    /// Red channel, 0.0-1.0.
    pub r: f64,
    /// Green channel, 0.0-1.0.
    pub g: f64,
    /// Blue channel, 0.0-1.0.
    pub b: f64,
}

impl VariableColor {
    /// Parses a hex string into a normalized variable color.
    ///
    /// # Errors
    ///
    /// Returns an error for anything that is not a 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let (r, g, b) = parse_hex(hex)?;
        Ok(Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        })
    }
}

/// The design-tool side of the bridge.
///
/// `upsert_color` must be idempotent keyed by `(collection, name)`:
/// create the collection and the variable if absent, otherwise update
/// the existing variable's value in the collection's default mode.
pub trait VariableHost {
    /// Creates or updates one color variable.
    ///
    /// # Errors
    ///
    /// Host API failures propagate to the caller.
    fn upsert_color(&mut self, collection: &str, name: &str, color: VariableColor) -> Result<()>;
}

/// Upserts every palette cell into `collection` on the host.
///
/// Variables are named `"Role/step"` (capitalized role), written in
/// canonical role and step order. Best-effort and non-transactional:
/// a host failure stops the sync and propagates, but variables already
/// written stay written.
///
/// # Errors
///
/// Returns the first host error, annotated with the failing variable.
pub fn sync_palette(host: &mut dyn VariableHost, collection: &str, palette: &Palette) -> Result<()> {
    for (role, scale) in palette.scales() {
        for (step, hex) in scale.entries() {
            let name = format!("{}/{step}", role.capitalized());
            let color = VariableColor::from_hex(hex)
                .with_context(|| format!("Palette cell {name} holds invalid hex '{hex}'"))?;
            host.upsert_color(collection, &name, color)
                .with_context(|| format!("Failed to upsert variable '{name}'"))?;
        }
    }
    Ok(())
}

/// In-memory host used by tests and dry runs.
#[derive(Debug, Default)]
pub struct InMemoryHost {
    /// `(collection, name)` to color, insertion-ordered.
    variables: Vec<((String, String), VariableColor)>,
    /// When set, upserts fail after this many writes.
    fail_after: Option<usize>,
    writes: usize,
}

impl InMemoryHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host whose upserts fail after `n` successful writes.
    #[must_use]
    pub fn failing_after(n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::default()
        }
    }

    /// Number of stored variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Looks up a variable by collection and name.
    #[must_use]
    pub fn get(&self, collection: &str, name: &str) -> Option<VariableColor> {
        self.variables
            .iter()
            .find(|((c, n), _)| c == collection && n == name)
            .map(|&(_, color)| color)
    }
}

impl VariableHost for InMemoryHost {
    fn upsert_color(&mut self, collection: &str, name: &str, color: VariableColor) -> Result<()> {
        if let Some(limit) = self.fail_after {
            if self.writes >= limit {
                anyhow::bail!("Host rejected write to '{name}'");
            }
        }
        self.writes += 1;

        let key = (collection.to_string(), name.to_string());
        if let Some(entry) = self.variables.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = color;
        } else {
            self.variables.push((key, color));
        }
        Ok(())
    }
}
