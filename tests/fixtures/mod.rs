//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use image::{Rgba, RgbaImage};
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a scratch directory for a test.
///
/// The returned `TempDir` must be kept alive for the duration of the test;
/// dropping it deletes the directory.
pub fn scratch_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Writes a 2x2 PNG with pixels [red, red, blue, white].
///
/// Extraction of this image resolves primary red and accent blue while
/// leaving the secondary seed unresolved (white never beats a colorful
/// candidate, and there is no third distinct colorful hue).
pub fn write_quad_png(dir: &TempDir) -> PathBuf {
    let mut img = RgbaImage::new(2, 2);
    img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    img.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
    img.put_pixel(0, 1, Rgba([0, 0, 255, 255]));
    img.put_pixel(1, 1, Rgba([255, 255, 255, 255]));

    let path = dir.path().join("quad.png");
    img.save(&path).expect("Failed to write test PNG");
    path
}

/// Writes a PNG whose pixels are all fully transparent.
///
/// Every sample fails the alpha cutoff, so extraction reports an error
/// instead of producing seeds.
pub fn write_transparent_png(dir: &TempDir) -> PathBuf {
    let img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 0]));

    let path = dir.path().join("transparent.png");
    img.save(&path).expect("Failed to write test PNG");
    path
}
