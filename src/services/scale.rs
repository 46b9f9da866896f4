//! Tonal scale generation: one seed color in, a 10-step ramp out.
//!
//! Each step pins lightness to a fixed target and scales the seed's
//! chroma by a per-step factor, keeping the hue. Two profiles exist:
//! vivid (brand and state roles) and neutral (chroma heavily dampened
//! so the ramp reads as tinted gray).

use crate::models::{Lch, Scale};

/// Fixed lightness target per step, 50 through 900.
///
/// 50 is near-white background, 500 the main tone, 900 near-black heading
/// text. Monotonically decreasing, which is what gives every generated
/// scale its non-increasing-lightness invariant.
const LIGHTNESS_TARGETS: [f64; 10] = [99.0, 97.0, 94.0, 88.0, 80.0, 65.0, 50.0, 35.0, 20.0, 10.0];

/// Chroma profile applied per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromaProfile {
    /// Full seed chroma through the mid-range, eased at the light end.
    Vivid,
    /// Seed chroma dampened to `min(c * 0.15, 6)` before the per-step
    /// factors apply.
    Neutral,
}

impl ChromaProfile {
    fn factor(self, index: usize) -> f64 {
        match self {
            // 50: 0.2, 100: 0.5, 200: 0.8, rest full
            Self::Vivid => match index {
                0 => 0.2,
                1 => 0.5,
                2 => 0.8,
                _ => 1.0,
            },
            // 50: 0.5, 100: 0.8, rest full
            Self::Neutral => match index {
                0 => 0.5,
                1 => 0.8,
                _ => 1.0,
            },
        }
    }
}

/// Literal fallback ramp (Tailwind gray) for unparseable seeds.
///
/// Palette generation must never abort, so a bad seed degrades to this
/// instead of failing.
const GRAY_FALLBACK: [&str; 10] = [
    "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151",
    "#1f2937", "#111827",
];

/// Generates a vivid 10-step scale from a seed hex color.
///
/// Pure and deterministic: identical seed, identical output, always.
/// Invalid seeds return the literal gray fallback scale.
///
/// # Examples
///
/// ```
/// use hueforge::services::scale::generate_scale;
///
/// let scale = generate_scale("#3b82f6");
/// assert_eq!(scale.get(500), Some("#5f9aff"));
/// ```
#[must_use]
pub fn generate_scale(seed: &str) -> Scale {
    generate(seed, ChromaProfile::Vivid)
}

/// Generates a neutral (tinted-gray) scale from a seed hex color.
///
/// The seed is normally the primary brand seed; its hue carries through
/// at very low chroma so surfaces feel related to the brand color.
#[must_use]
pub fn generate_neutral_scale(seed: &str) -> Scale {
    generate(seed, ChromaProfile::Neutral)
}

/// Generates a scale with an explicit chroma profile.
#[must_use]
pub fn generate(seed: &str, profile: ChromaProfile) -> Scale {
    let Ok(lch) = Lch::from_hex(seed) else {
        return gray_fallback();
    };

    let base_chroma = match profile {
        ChromaProfile::Vivid => lch.c,
        ChromaProfile::Neutral => (lch.c * 0.15).min(6.0),
    };

    let mut index = 0;
    Scale::from_fn(|_| {
        let step = Lch::new(
            LIGHTNESS_TARGETS[index],
            base_chroma * profile.factor(index),
            lch.h,
        );
        index += 1;
        step.to_hex()
    })
}

/// The literal gray ramp used when a seed cannot be parsed.
#[must_use]
pub fn gray_fallback() -> Scale {
    let mut index = 0;
    Scale::from_fn(|_| {
        let hex = GRAY_FALLBACK[index].to_string();
        index += 1;
        hex
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lch, STEPS};

    #[test]
    fn test_scale_is_deterministic() {
        let a = generate_scale("#3b82f6");
        let b = generate_scale("#3b82f6");
        assert_eq!(a, b);
    }

    #[test]
    fn test_blue_seed_fixture() {
        // Reference values from the f64 D65 pipeline
        let scale = generate_scale("#3b82f6");
        assert_eq!(scale.get(50), Some("#f7fbff"));
        assert_eq!(scale.get(500), Some("#5f9aff"));
        assert_eq!(scale.get(900), Some("#001d78"));
    }

    #[test]
    fn test_step_500_tracks_seed_hue_and_chroma() {
        // The pre-clip target for step 500 is (L=65, seed chroma, seed
        // hue). This seed is out of sRGB gamut at L=65, so channel
        // clipping costs roughly 10 units of chroma and a few degrees of
        // hue on the way back; the step must still read as the seed's
        // color family, not as the exact triple.
        let seed = Lch::from_hex("#3b82f6").unwrap();
        let step = Lch::from_hex(generate_scale("#3b82f6").get(500).unwrap()).unwrap();
        assert!((step.l - 65.0).abs() < 2.0);
        assert!((step.hue_or(0.0) - seed.hue_or(0.0)).abs() < 5.0);
        assert!((step.c - seed.c).abs() < 12.0);
        assert!(step.c > 50.0, "clipping must not desaturate the tone");
    }

    #[test]
    fn test_lightness_non_increasing() {
        for seed in ["#3b82f6", "#ef4444", "#22c55e", "#eab308", "#777777", "#9271e5"] {
            let scale = generate_scale(seed);
            let mut prev = f64::INFINITY;
            for step in STEPS {
                let l = Lch::from_hex(scale.get(step).unwrap()).unwrap().l;
                assert!(
                    l <= prev + 1e-9,
                    "lightness increased at {seed}[{step}]: {l} > {prev}"
                );
                prev = l;
            }
        }
    }

    #[test]
    fn test_neutral_scale_is_low_chroma() {
        let scale = generate_neutral_scale("#3b82f6");
        for step in STEPS {
            let c = Lch::from_hex(scale.get(step).unwrap()).unwrap().c;
            assert!(c <= 7.0, "neutral step {step} too chromatic: {c}");
        }
    }

    #[test]
    fn test_neutral_scale_fixture() {
        let scale = generate_neutral_scale("#3b82f6");
        assert_eq!(scale.get(500), Some("#9c9da8"));
        assert_eq!(scale.get(900), Some("#1a1b23"));
    }

    #[test]
    fn test_invalid_seed_returns_gray_fallback() {
        let scale = generate_scale("not-a-color");
        assert_eq!(scale, gray_fallback());
        assert_eq!(scale.get(500), Some("#6b7280"));
    }

    #[test]
    fn test_achromatic_seed_stays_achromatic() {
        let scale = generate_scale("#808080");
        for step in [50, 500, 900] {
            let c = Lch::from_hex(scale.get(step).unwrap()).unwrap().c;
            assert!(c < 0.5, "gray seed produced chroma {c} at step {step}");
        }
    }
}
