//! Dominant-color extraction from images.
//!
//! Samples a bounded number of pixels, quantizes them into a coarse
//! histogram, and picks three seed candidates with role assignment:
//! the most frequent colorful bucket becomes primary, the remaining
//! candidate that best combines chroma with hue distance from primary
//! becomes accent, and the leftover becomes secondary unless it sits too
//! close to primary on the hue wheel, in which case secondary is left
//! unresolved for the inference pass.
//!
//! Work is bounded at ~1000 samples regardless of image size, and the
//! result is all-or-nothing: decode failures and fully transparent
//! images are explicit errors, never a degraded palette.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::path::Path;

use crate::constants::DEFAULT_PRIMARY_SEED;
use crate::models::{Seed, SeedSet};

/// Approximate number of pixels sampled from any image.
const SAMPLE_TARGET: usize = 1000;

/// Pixels below this alpha are skipped as transparent.
const MIN_ALPHA: u8 = 128;

/// Channel quantization granularity for the histogram.
const QUANT: f64 = 32.0;

/// Minimum hue separation (degrees) between primary and secondary.
const MIN_SECONDARY_HUE_GAP: f64 = 20.0;

/// Three candidate seeds extracted from an image.
///
/// `secondary` is `None` when no sufficiently distinct candidate exists;
/// the inference pass fills it later. Extraction and inference are two
/// separate, separately testable passes over the same seed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSeeds {
    /// Most frequent colorful bucket.
    pub primary: String,
    /// Next distinct candidate, if one sits far enough from primary.
    pub secondary: Option<String>,
    /// Highest-scoring remaining candidate (chroma + hue distance).
    pub accent: String,
}

impl ExtractedSeeds {
    /// Converts the extraction result into a seed set.
    ///
    /// Extracted colors count as user input (`UserSet`); an unresolved
    /// secondary stays `Unset` for inference.
    #[must_use]
    pub fn into_seed_set(self) -> SeedSet {
        SeedSet {
            primary: Seed::UserSet(self.primary),
            secondary: self.secondary.map_or(Seed::Unset, Seed::UserSet),
            accent: Seed::UserSet(self.accent),
        }
    }
}

/// Extracts three seed candidates from an image file.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or decoded, or when
/// the image has no usable (opaque) pixels.
pub fn extract_from_file(path: &Path) -> Result<ExtractedSeeds> {
    let img = image::open(path)
        .with_context(|| format!("Failed to decode image {}", path.display()))?;
    extract_from_rgba(img.to_rgba8().as_raw())
}

/// Extracts three seed candidates from a raw RGBA8 buffer.
///
/// # Errors
///
/// Returns an error when the buffer length is not a multiple of 4 or
/// when no pixel passes the alpha threshold.
pub fn extract_from_rgba(data: &[u8]) -> Result<ExtractedSeeds> {
    if data.len() % 4 != 0 {
        bail!(
            "RGBA buffer length {} is not a multiple of 4",
            data.len()
        );
    }
    let pixel_count = data.len() / 4;
    if pixel_count == 0 {
        bail!("Image has no pixels");
    }

    // Evenly spaced samples, bounded at ~1000 regardless of resolution.
    let stride = (pixel_count / SAMPLE_TARGET).max(1);

    let mut histogram: HashMap<(u8, u8, u8), (usize, usize)> = HashMap::new();
    let mut order = 0usize;
    let mut i = 0;
    while i < pixel_count {
        let base = i * 4;
        let alpha = data[base + 3];
        if alpha >= MIN_ALPHA {
            let key = (
                quantize(data[base]),
                quantize(data[base + 1]),
                quantize(data[base + 2]),
            );
            let entry = histogram.entry(key).or_insert((0, order));
            entry.0 += 1;
            order += 1;
        }
        i += stride;
    }

    if histogram.is_empty() {
        bail!("Image has no opaque pixels to sample");
    }

    // Frequency order, first-seen breaking ties for determinism.
    let mut buckets: Vec<((u8, u8, u8), (usize, usize))> = histogram.into_iter().collect();
    buckets.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    let sorted: Vec<String> = buckets
        .iter()
        .map(|&((r, g, b), _)| format!("#{r:02x}{g:02x}{b:02x}"))
        .collect();

    let (colorful, neutral): (Vec<&String>, Vec<&String>) =
        sorted.iter().partition(|hex| is_colorful(hex));

    // Up to 3 distinct candidates, colorful first, neutrals as fallback.
    let mut distinct: Vec<String> = Vec::with_capacity(3);
    for hex in colorful.iter().chain(neutral.iter()) {
        if distinct.len() >= 3 {
            break;
        }
        if !distinct.contains(hex) {
            distinct.push((*hex).clone());
        }
    }
    while distinct.len() < 3 {
        let filler = distinct
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_PRIMARY_SEED.to_string());
        distinct.push(filler);
    }

    let primary = distinct[0].clone();
    let primary_hc = hexagon_hue_chroma(&primary);

    // Accent wants chroma and hue contrast; weight hue distance heavily.
    let mut candidates: Vec<String> = distinct[1..].to_vec();
    candidates.sort_by(|a, b| {
        let score = |hex: &str| {
            let (h, c) = hexagon_hue_chroma(hex);
            c + hue_distance(primary_hc.0, h) / 180.0 * 200.0
        };
        score(b)
            .partial_cmp(&score(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let accent = candidates[0].clone();
    let mut secondary = Some(
        candidates
            .get(1)
            .unwrap_or(&candidates[0])
            .clone(),
    );

    // Secondary must sit away from primary on the hue wheel; otherwise
    // look through the whole candidate list, otherwise leave it to the
    // inference pass.
    let sec_hc = hexagon_hue_chroma(secondary.as_deref().unwrap_or_default());
    if hue_distance(primary_hc.0, sec_hc.0) < MIN_SECONDARY_HUE_GAP {
        secondary = distinct
            .iter()
            .find(|hex| {
                let (h, _) = hexagon_hue_chroma(hex);
                hue_distance(primary_hc.0, h) >= MIN_SECONDARY_HUE_GAP
                    && **hex != accent
                    && **hex != primary
            })
            .cloned();
    }

    Ok(ExtractedSeeds {
        primary,
        secondary,
        accent,
    })
}

/// Rounds one channel to the nearest multiple of 32, capped at 255.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quantize(channel: u8) -> u8 {
    let q = (f64::from(channel) / QUANT).round() * QUANT;
    q.min(255.0) as u8
}

/// Whether a bucket reads as a real color rather than a neutral.
///
/// Channel spread above 10 (not grayish), max above 20 (not near-black),
/// min below 250 (not near-white).
fn is_colorful(hex: &str) -> bool {
    let Ok((r, g, b)) = crate::models::parse_hex(hex) else {
        return false;
    };
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    max - min > 10 && max > 20 && min < 250
}

/// Cheap RGB-hexagon hue (degrees) and chroma (0-255 channel spread).
///
/// Extraction scoring only needs relative ordering, so the full LCh
/// conversion is overkill here.
fn hexagon_hue_chroma(hex: &str) -> (f64, f64) {
    let Ok((r, g, b)) = crate::models::parse_hex(hex) else {
        return (0.0, 0.0);
    };
    let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let c = max - min;

    let h = if c == 0.0 {
        0.0
    } else if max == rf {
        ((gf - bf) / c).rem_euclid(6.0)
    } else if max == gf {
        (bf - rf) / c + 2.0
    } else {
        (rf - gf) / c + 4.0
    };
    let mut deg = (h * 60.0).round();
    if deg < 0.0 {
        deg += 360.0;
    }
    (deg, c)
}

/// Shortest angular distance between two hue angles.
fn hue_distance(h1: f64, h2: f64) -> f64 {
    crate::models::circular_hue_distance(h1, h2)
}
