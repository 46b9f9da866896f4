//! Missing-role inference: completes a partial brand seed set.
//!
//! Given any subset of primary/secondary/accent, derives the rest with
//! fixed hue-wheel relationships: secondary sits 20 degrees from primary
//! (analogous), accent sits 180 degrees away (complementary) with boosted
//! chroma. Derivations fill only `Unset` slots and are written back as
//! `Derived`, so they stay stable when the user later changes another seed.

use crate::constants::{ACHROMATIC_FALLBACK_HUE, DEFAULT_PRIMARY_SEED};
use crate::models::{Lch, Seed, SeedSet};

/// Chroma floor for derived primary/secondary seeds, keeping them off gray.
const ANALOGOUS_CHROMA_FLOOR: f64 = 30.0;

/// Chroma floor for the derived accent seed.
const ACCENT_CHROMA_FLOOR: f64 = 40.0;

/// Accent chroma boost factor and cap.
const ACCENT_CHROMA_BOOST: f64 = 1.5;
const ACCENT_CHROMA_CAP: f64 = 130.0;

/// Fills every `Unset` brand seed in place.
///
/// Deterministic; after the call all three slots hold valid hex seeds.
/// `UserSet` entries are never touched. A present seed that fails to
/// parse is substituted with the default primary for derivation purposes
/// only (the slot itself keeps the user's value; its own scale degrades
/// through the generator's gray fallback).
///
/// Cases, mutually exclusive by which slots are set:
/// - none: primary becomes the default blue, then the primary-only rules
///   apply.
/// - primary only: secondary = hue+20 (chroma floor 30); accent =
///   hue+180, chroma `min(c*1.5, 130)` floor 40.
/// - secondary only: primary = hue-20 (floor 30); accent complements the
///   derived primary.
/// - accent only: primary becomes the default blue, secondary = hue+20.
/// - one missing: the corresponding single rule applies.
/// - all set: no-op.
///
/// Achromatic seeds take hue 250 before any shift.
pub fn infer_missing(seeds: &mut SeedSet) {
    if seeds.primary.is_unset() && seeds.secondary.is_unset() {
        // Nothing usable, or accent alone (which gives no stable anchor
        // for analogous derivation): anchor on the default primary.
        seeds.primary = Seed::Derived(DEFAULT_PRIMARY_SEED.to_string());
    }

    match (
        seeds.primary.hex().map(parse_or_default),
        seeds.secondary.hex().map(parse_or_default),
        seeds.accent.is_unset(),
    ) {
        // Primary known, secondary missing
        (Some(p), None, accent_unset) => {
            seeds.secondary = Seed::Derived(analogous(p, 20.0));
            if accent_unset {
                seeds.accent = Seed::Derived(complementary(p));
            }
        }
        // Secondary known, primary missing
        (None, Some(s), accent_unset) => {
            let primary_hex = analogous(s, -20.0);
            if accent_unset {
                let derived = parse_or_default(&primary_hex);
                seeds.accent = Seed::Derived(complementary(derived));
            }
            seeds.primary = Seed::Derived(primary_hex);
        }
        // Primary and secondary known, accent missing
        (Some(p), Some(_), true) => {
            seeds.accent = Seed::Derived(complementary(p));
        }
        // All three known
        (Some(_), Some(_), false) => {}
        // Unreachable: primary was anchored above
        (None, None, _) => {}
    }
}

/// Parses a seed, falling back to the default primary on invalid input.
fn parse_or_default(hex: &str) -> Lch {
    Lch::from_hex(hex).unwrap_or_else(|_| {
        Lch::from_hex(DEFAULT_PRIMARY_SEED).unwrap_or(Lch::new(50.0, 30.0, None))
    })
}

/// Hue-shifted sibling with a chroma floor.
fn analogous(base: Lch, shift: f64) -> String {
    let hue = (base.hue_or(ACHROMATIC_FALLBACK_HUE) + shift).rem_euclid(360.0);
    Lch::new(base.l, base.c.max(ANALOGOUS_CHROMA_FLOOR), Some(hue)).to_hex()
}

/// Opposite-hue accent with boosted chroma.
fn complementary(base: Lch) -> String {
    let hue = (base.hue_or(ACHROMATIC_FALLBACK_HUE) + 180.0).rem_euclid(360.0);
    let chroma = (base.c * ACCENT_CHROMA_BOOST)
        .min(ACCENT_CHROMA_CAP)
        .max(ACCENT_CHROMA_FLOOR);
    Lch::new(base.l, chroma, Some(hue)).to_hex()
}
