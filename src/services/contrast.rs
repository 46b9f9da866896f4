//! WCAG contrast auto-correction.
//!
//! Walks a foreground color's lightness away from the background until
//! the WCAG AA ratio (4.5:1) is met, falling back to pure black or white
//! when the hue/chroma family cannot reach it at any lightness.

use crate::constants::MIN_CONTRAST_RATIO;
use crate::models::{contrast_ratio, Lch, Palette, ROLES};

/// Lightness step per iteration.
const LIGHTNESS_STEP: f64 = 2.0;

/// Iteration cap; 50 steps of 2 covers the whole lightness axis.
const MAX_ITERATIONS: u32 = 50;

/// The four (background step, foreground step) cell pairs fixed per role.
/// `None` means pure white (the role's 500 tone must work on white).
const FIXED_PAIRS: [(Option<u16>, u16); 4] =
    [(None, 500), (Some(50), 900), (Some(100), 800), (Some(200), 700)];

/// Adjusts `fg` until it reads at >= 4.5:1 against `bg`.
///
/// Returns `fg` unchanged when it already complies. Otherwise walks its
/// lightness in steps of 2, darkening when the background is light
/// (L > 50) and lightening otherwise, and returns the first compliant hex.
/// If no lightness in the family complies within 50 steps, returns
/// whichever of `#ffffff` / `#000000` contrasts harder against `bg`.
///
/// Deterministic and always terminating; the result either satisfies the
/// ratio or is the explicit black/white fallback.
///
/// # Examples
///
/// ```
/// use hueforge::models::contrast_ratio;
/// use hueforge::services::contrast::auto_fix_color;
///
/// let fixed = auto_fix_color("#ffffff", "#eeeeee");
/// assert!(contrast_ratio("#ffffff", &fixed) >= 4.5);
/// ```
#[must_use]
pub fn auto_fix_color(bg: &str, fg: &str) -> String {
    if contrast_ratio(bg, fg) >= MIN_CONTRAST_RATIO {
        return fg.to_string();
    }

    let (Ok(bg_lch), Ok(fg_lch)) = (Lch::from_hex(bg), Lch::from_hex(fg)) else {
        return fg.to_string();
    };

    let direction = if bg_lch.l > 50.0 {
        -LIGHTNESS_STEP
    } else {
        LIGHTNESS_STEP
    };

    let mut current = fg_lch;
    for _ in 0..MAX_ITERATIONS {
        current.l = (current.l + direction).clamp(0.0, 100.0);
        let candidate = current.to_hex();
        if contrast_ratio(bg, &candidate) >= MIN_CONTRAST_RATIO {
            return candidate;
        }
        if current.l <= 0.0 || current.l >= 100.0 {
            break;
        }
    }

    // The family never complies; fall back to the harder of black/white.
    if contrast_ratio(bg, "#ffffff") > contrast_ratio(bg, "#000000") {
        "#ffffff".to_string()
    } else {
        "#000000".to_string()
    }
}

/// Applies the accessibility pass to every role of a palette, in place.
///
/// For each role, four fixed pairings are corrected: the 500 tone against
/// pure white (button case), 900 against 50 (heading on background),
/// 800 against 100 (text on surface), and 700 against 200 (soft emphasis).
/// Only the foreground cell of each pair is rewritten.
pub fn apply_accessibility_pass(palette: &mut Palette) {
    for role in ROLES {
        for (bg_step, fg_step) in FIXED_PAIRS {
            let scale = palette.scale(role);
            let bg = match bg_step {
                None => "#ffffff".to_string(),
                // Fixed pairs only name steps that exist
                Some(step) => scale.get(step).unwrap_or("#ffffff").to_string(),
            };
            let fg = scale.get(fg_step).unwrap_or("#ffffff").to_string();
            let fixed = auto_fix_color(&bg, &fg);
            let _ = palette.scale_mut(role).set(fg_step, fixed);
        }
    }
}
