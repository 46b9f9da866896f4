//! Edit propagation: deciding the blast radius of a single-cell edit.
//!
//! A swatch edit either touches exactly one cell or replaces a whole
//! scale through the generator, depending on where the edit lands and
//! how far the new color moves on the hue wheel:
//!
//! - Brand role at step 500: the edit is a new seed. The role's scale
//!   regenerates, and primary edits also regenerate neutral (neutral is
//!   seed-derived from primary).
//! - Brand role elsewhere: near-gray values and small hue moves stay
//!   local; a hue move above 10 degrees re-seeds the scale with the
//!   current seed's lightness/chroma and the new hue.
//! - Derived role at step 500: the scale regenerates in its own profile.
//! - Derived role elsewhere: always local.

use anyhow::{bail, Result};

use crate::models::{
    circular_hue_distance, step_index, EditRequest, Lch, Palette, Role, Seed, SeedSet,
};
use crate::services::scale::{generate_neutral_scale, generate_scale};

/// Chroma below which an edited value is treated as a deliberate gray
/// and kept local, so one muted cell doesn't desaturate a whole scale.
const LOCAL_GRAY_CHROMA: f64 = 5.0;

/// Hue distance (degrees) beyond which an edit re-seeds the scale.
const HUE_PROPAGATION_THRESHOLD: f64 = 10.0;

/// What an applied edit did to the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Exactly one cell was replaced.
    Local,
    /// The edit became a new user seed; the listed roles regenerated.
    SeedPromoted {
        /// Scales that were fully regenerated.
        regenerated: Vec<Role>,
    },
    /// The edit's hue re-seeded the role through a derived seed.
    HuePropagated {
        /// The derived seed the scale regenerated from.
        new_seed: String,
    },
    /// A derived role's 500 edit regenerated that scale in place.
    Regenerated,
}

/// Applies one edit atomically against the live palette and seed set.
///
/// Local edits touch exactly one cell; every regeneration replaces all
/// 10 cells of the affected scale(s) deterministically through the scale
/// generator. On error nothing is modified.
///
/// # Errors
///
/// Returns an error for an unknown step key or an unparseable new color.
pub fn apply_edit(
    palette: &mut Palette,
    seeds: &mut SeedSet,
    request: &EditRequest,
) -> Result<EditOutcome> {
    if step_index(request.step).is_none() {
        bail!(
            "Unknown scale step '{}'. Expected one of 50..900",
            request.step
        );
    }
    let new_lch = Lch::from_hex(&request.new_hex)?;
    let new_hex = new_lch.to_hex();

    if request.role.is_brand() {
        apply_brand_edit(palette, seeds, request, new_lch, new_hex)
    } else {
        apply_derived_edit(palette, request, new_hex)
    }
}

fn apply_brand_edit(
    palette: &mut Palette,
    seeds: &mut SeedSet,
    request: &EditRequest,
    new_lch: Lch,
    new_hex: String,
) -> Result<EditOutcome> {
    let role = request.role;

    // Step 500 is the seed by definition: promote and regenerate.
    if request.step == 500 {
        *palette.scale_mut(role) = generate_scale(&new_hex);
        let mut regenerated = vec![role];
        if role == Role::Primary {
            palette.neutral = generate_neutral_scale(&new_hex);
            regenerated.push(Role::Neutral);
        }
        // Brand roles always have a seed slot
        if let Some(slot) = seeds.seed_mut(role) {
            *slot = Seed::UserSet(new_hex);
        }
        return Ok(EditOutcome::SeedPromoted { regenerated });
    }

    // A near-gray value is a deliberate local tweak, not a re-theme.
    if new_lch.c < LOCAL_GRAY_CHROMA {
        return apply_local(palette, request, new_hex);
    }

    let old_hue = palette
        .scale(role)
        .get(request.step)
        .and_then(|hex| Lch::from_hex(hex).ok())
        .map(|lch| lch.hue_or(0.0));

    let hue_delta = old_hue.map_or(0.0, |old| {
        circular_hue_distance(old, new_lch.hue_or(0.0))
    });

    if hue_delta > HUE_PROPAGATION_THRESHOLD {
        // Re-seed from the current seed's L/C so the scale's shape is not
        // distorted by the properties of a light or desaturated step.
        let current_seed = seeds
            .seed(role)
            .and_then(Seed::hex)
            .and_then(|hex| Lch::from_hex(hex).ok());
        if let Some(seed_lch) = current_seed {
            let derived = Lch::new(seed_lch.l, seed_lch.c, new_lch.h).to_hex();
            *palette.scale_mut(role) = generate_scale(&derived);
            if let Some(slot) = seeds.seed_mut(role) {
                *slot = Seed::Derived(derived.clone());
            }
            return Ok(EditOutcome::HuePropagated { new_seed: derived });
        }
        // No parseable seed to anchor on; degrade to a local edit.
    }

    apply_local(palette, request, new_hex)
}

fn apply_derived_edit(
    palette: &mut Palette,
    request: &EditRequest,
    new_hex: String,
) -> Result<EditOutcome> {
    if request.step == 500 {
        *palette.scale_mut(request.role) = if request.role == Role::Neutral {
            generate_neutral_scale(&new_hex)
        } else {
            generate_scale(&new_hex)
        };
        return Ok(EditOutcome::Regenerated);
    }
    apply_local(palette, request, new_hex)
}

fn apply_local(palette: &mut Palette, request: &EditRequest, new_hex: String) -> Result<EditOutcome> {
    palette.scale_mut(request.role).set(request.step, new_hex)?;
    Ok(EditOutcome::Local)
}
