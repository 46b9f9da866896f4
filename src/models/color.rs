//! Perceptual color type with hex parsing and WCAG contrast math.
//!
//! All palette math runs in CIE LCh (D65): lightness 0-100, chroma >= 0,
//! hue in degrees. Hex strings (`#rrggbb`) are the only I/O form; the
//! round trip through LCh is lossy at the sRGB gamut boundary because
//! out-of-range channels are clipped on the way back.

// Allow float comparisons against exact clamp bounds (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use std::fmt;

/// CIE Lab `f` threshold: (6/29)^3.
const EPSILON: f64 = 216.0 / 24389.0;
/// CIE Lab linear-segment slope: (29/3)^3.
const KAPPA: f64 = 24389.0 / 27.0;

/// D65 reference white.
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

/// Chroma below this is treated as achromatic and the hue is dropped.
const ACHROMATIC_CHROMA: f64 = 1e-3;

/// A color as a perceptual LCh triple.
///
/// The hue is `None` for achromatic colors (grays), where the angle is
/// numerically meaningless. Constructing a color with out-of-gamut
/// lightness or chroma is allowed; [`Lch::to_hex`] clips on conversion.
///
/// # Examples
///
/// ```
/// use hueforge::models::Lch;
///
/// let blue = Lch::from_hex("#3b82f6").unwrap();
/// assert!((blue.l - 55.63).abs() < 0.01);
/// assert!(blue.h.is_some());
///
/// let gray = Lch::from_hex("#808080").unwrap();
/// assert!(gray.h.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    /// Lightness, 0 (black) to 100 (white).
    pub l: f64,
    /// Chroma, 0 (gray) upward; sRGB-representable colors stay under ~135.
    pub c: f64,
    /// Hue angle in degrees `[0, 360)`, or `None` when achromatic.
    pub h: Option<f64>,
}

impl Lch {
    /// Creates an LCh triple without validation.
    #[must_use]
    pub const fn new(l: f64, c: f64, h: Option<f64>) -> Self {
        Self { l, c, h }
    }

    /// Parses a 6-digit hex color into LCh.
    ///
    /// Accepts `#rrggbb` or `rrggbb`, any case, surrounding whitespace
    /// trimmed. Shorthand (`#fff`) and alpha forms are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a 6-digit RGB hex color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let (r, g, b) = parse_hex(hex)?;
        Ok(Self::from_rgb8(r, g, b))
    }

    /// Converts 8-bit sRGB channels into LCh.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let rl = srgb_to_linear(f64::from(r) / 255.0);
        let gl = srgb_to_linear(f64::from(g) / 255.0);
        let bl = srgb_to_linear(f64::from(b) / 255.0);

        // sRGB D65 -> XYZ
        let x = 0.4124564 * rl + 0.3575761 * gl + 0.1804375 * bl;
        let y = 0.2126729 * rl + 0.7151522 * gl + 0.0721750 * bl;
        let z = 0.0193339 * rl + 0.1191920 * gl + 0.9503041 * bl;

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        let l = 116.0 * fy - 16.0;
        let a = 500.0 * (fx - fy);
        let b = 200.0 * (fy - fz);

        let c = a.hypot(b);
        let h = if c < ACHROMATIC_CHROMA {
            None
        } else {
            let mut deg = b.atan2(a).to_degrees();
            if deg < 0.0 {
                deg += 360.0;
            }
            Some(deg)
        };

        Self { l, c, h }
    }

    /// Converts to a `#rrggbb` hex string.
    ///
    /// Lightness is clamped to [0, 100] first. Colors outside the sRGB
    /// gamut have each channel clipped to [0, 255], silently losing exact
    /// chroma/hue fidelity; scale generation pushes chroma past the gamut
    /// edge at extreme lightness targets and relies on this.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Converts to 8-bit sRGB channels, clipping out-of-gamut values.
    #[must_use]
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let l = self.l.clamp(0.0, 100.0);
        let hr = self.h.unwrap_or(0.0).to_radians();
        let a = self.c * hr.cos();
        let b = self.c * hr.sin();

        let fy = (l + 16.0) / 116.0;
        let fx = fy + a / 500.0;
        let fz = fy - b / 200.0;

        let xr = lab_f_inv(fx);
        let yr = if l > KAPPA * EPSILON {
            let t = (l + 16.0) / 116.0;
            t * t * t
        } else {
            l / KAPPA
        };
        let zr = lab_f_inv(fz);

        let x = xr * WHITE_X;
        let y = yr * WHITE_Y;
        let z = zr * WHITE_Z;

        // XYZ -> sRGB D65
        let rl = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
        let gl = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
        let bl = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;

        (to_u8(rl), to_u8(gl), to_u8(bl))
    }

    /// Returns the hue, substituting `default` when achromatic.
    #[must_use]
    pub fn hue_or(&self, default: f64) -> f64 {
        self.h.unwrap_or(default)
    }
}

impl fmt::Display for Lch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Parses a hex string into 8-bit sRGB channels.
///
/// # Errors
///
/// Returns an error if the string is not a 6-digit RGB hex color.
pub fn parse_hex(hex: &str) -> Result<(u8, u8, u8)> {
    let hex = hex.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if hex.len() != 6 || !hex.is_ascii() {
        anyhow::bail!("Invalid hex color '{hex}'. Expected 6 hex digits (rrggbb)");
    }

    let r = u8::from_str_radix(&hex[0..2], 16)
        .context(format!("Invalid red channel in hex color '{hex}'"))?;
    let g = u8::from_str_radix(&hex[2..4], 16)
        .context(format!("Invalid green channel in hex color '{hex}'"))?;
    let b = u8::from_str_radix(&hex[4..6], 16)
        .context(format!("Invalid blue channel in hex color '{hex}'"))?;

    Ok((r, g, b))
}

/// Returns true when the string parses as a 6-digit RGB hex color.
#[must_use]
pub fn is_valid_hex(hex: &str) -> bool {
    parse_hex(hex).is_ok()
}

/// WCAG 2.x contrast ratio between two hex colors.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)` over relative luminance,
/// ranging 1.0 (identical) to 21.0 (black on white). Unparseable input
/// contributes luminance 0 rather than failing; the metric feeds reports
/// and the accessibility pass, neither of which may abort.
///
/// # Examples
///
/// ```
/// use hueforge::models::contrast_ratio;
///
/// assert!((contrast_ratio("#000000", "#ffffff") - 21.0).abs() < 0.01);
/// assert!((contrast_ratio("#808080", "#808080") - 1.0).abs() < 0.001);
/// ```
#[must_use]
pub fn contrast_ratio(hex1: &str, hex2: &str) -> f64 {
    let l1 = relative_luminance(hex1);
    let l2 = relative_luminance(hex2);
    let (hi, lo) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (hi + 0.05) / (lo + 0.05)
}

/// Shortest angular distance between two hue angles, in `[0, 180]`.
#[must_use]
pub fn circular_hue_distance(h1: f64, h2: f64) -> f64 {
    let diff = (h1 - h2).abs() % 360.0;
    diff.min(360.0 - diff)
}

/// WCAG relative luminance of a hex color; 0.0 for unparseable input.
fn relative_luminance(hex: &str) -> f64 {
    let Ok((r, g, b)) = parse_hex(hex) else {
        return 0.0;
    };
    // WCAG 2.x uses the 0.03928 knee, not the sRGB 0.04045 one.
    let ch = |c: u8| -> f64 {
        let v = f64::from(c) / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * ch(r) + 0.7152 * ch(g) + 0.0722 * ch(b)
}

fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    let t3 = t * t * t;
    if t3 > EPSILON {
        t3
    } else {
        (116.0 * t - 16.0) / KAPPA
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(linear: f64) -> u8 {
    let s = linear_to_srgb(linear).clamp(0.0, 1.0);
    (s * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_valid() {
        assert_eq!(parse_hex("#FF0000").unwrap(), (255, 0, 0));
        assert_eq!(parse_hex("00ff00").unwrap(), (0, 255, 0));
        assert_eq!(parse_hex("  #0000ff  ").unwrap(), (0, 0, 255));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(parse_hex("#fff").is_err());
        assert!(parse_hex("#fffffff").is_err());
        assert!(parse_hex("gggggg").is_err());
        assert!(parse_hex("").is_err());
        assert!(parse_hex("#").is_err());
    }

    #[test]
    fn test_is_valid_hex() {
        assert!(is_valid_hex("#3b82f6"));
        assert!(is_valid_hex("3B82F6"));
        assert!(!is_valid_hex("#3b82f"));
        assert!(!is_valid_hex("not a color"));
    }

    #[test]
    fn test_from_hex_known_values() {
        // Reference values from the f64 D65 pipeline
        let blue = Lch::from_hex("#3b82f6").unwrap();
        assert!((blue.l - 55.630).abs() < 0.01);
        assert!((blue.c - 66.767).abs() < 0.01);
        assert!((blue.h.unwrap() - 285.232).abs() < 0.01);

        let red = Lch::from_hex("#ef4444").unwrap();
        assert!((red.l - 54.978).abs() < 0.01);
        assert!((red.h.unwrap() - 31.170).abs() < 0.01);
    }

    #[test]
    fn test_achromatic_has_no_hue() {
        for hex in ["#000000", "#808080", "#ffffff", "#333333"] {
            let c = Lch::from_hex(hex).unwrap();
            assert!(c.h.is_none(), "{hex} should be achromatic");
            assert!(c.c < 0.001);
        }
    }

    #[test]
    fn test_roundtrip_in_gamut() {
        // In-gamut colors round-trip exactly at 8-bit resolution
        for hex in ["#3b82f6", "#22c55e", "#eab308", "#ef4444", "#123456", "#808080"] {
            let lch = Lch::from_hex(hex).unwrap();
            assert_eq!(lch.to_hex(), hex);
        }
    }

    #[test]
    fn test_roundtrip_black_white() {
        assert_eq!(Lch::from_hex("#000000").unwrap().to_hex(), "#000000");
        assert_eq!(Lch::from_hex("#ffffff").unwrap().to_hex(), "#ffffff");
    }

    #[test]
    fn test_to_hex_clamps_lightness() {
        let too_bright = Lch::new(150.0, 0.0, None);
        assert_eq!(too_bright.to_hex(), "#ffffff");

        let too_dark = Lch::new(-20.0, 0.0, None);
        assert_eq!(too_dark.to_hex(), "#000000");
    }

    #[test]
    fn test_to_hex_clips_out_of_gamut_chroma() {
        // L=99 with vivid chroma cannot be represented; channels clip
        // instead of failing.
        let hot = Lch::new(99.0, 120.0, Some(285.0));
        let hex = hot.to_hex();
        assert!(is_valid_hex(&hex));
    }

    #[test]
    fn test_contrast_ratio_extremes() {
        assert!((contrast_ratio("#000000", "#ffffff") - 21.0).abs() < 0.01);
        assert!((contrast_ratio("#ffffff", "#000000") - 21.0).abs() < 0.01);
        assert!((contrast_ratio("#123456", "#123456") - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_contrast_ratio_known_pair() {
        // White on #eeeeee is nearly invisible
        let ratio = contrast_ratio("#ffffff", "#eeeeee");
        assert!(ratio < 1.2, "got {ratio}");
    }

    #[test]
    fn test_contrast_ratio_invalid_input_is_black() {
        // Bad input counts as luminance 0, same as black
        let against_white = contrast_ratio("#ffffff", "nonsense");
        assert!((against_white - 21.0).abs() < 0.01);
    }

    #[test]
    fn test_circular_hue_distance() {
        assert!((circular_hue_distance(0.0, 0.0)).abs() < f64::EPSILON);
        assert!((circular_hue_distance(10.0, 350.0) - 20.0).abs() < 1e-9);
        assert!((circular_hue_distance(0.0, 180.0) - 180.0).abs() < 1e-9);
        assert!((circular_hue_distance(90.0, 270.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_display_matches_to_hex() {
        let c = Lch::from_hex("#3b82f6").unwrap();
        assert_eq!(format!("{c}"), c.to_hex());
    }
}
