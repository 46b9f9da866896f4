//! Integration tests for the full generate / edit / export pipeline.

use hueforge::bridge::{sync_palette, InMemoryHost};
use hueforge::constants::MIN_CONTRAST_RATIO;
use hueforge::export::{export_palette, ExportFormat};
use hueforge::models::color::{contrast_ratio, Lch};
use hueforge::models::{EditRequest, Role, SeedSet, ROLES, STEPS};
use hueforge::services::edit::{apply_edit, EditOutcome};
use hueforge::services::generator::{generate_palette, GeneratorOptions};

fn default_palette() -> (hueforge::models::Palette, SeedSet) {
    let mut seeds = SeedSet::from_manual(Some("#3b82f6"), None, None);
    let palette = generate_palette(&mut seeds, &GeneratorOptions::default());
    (palette, seeds)
}

#[test]
fn test_generated_palette_is_fully_populated() {
    let (palette, _) = default_palette();

    for (role, scale) in palette.scales() {
        for (step, hex) in scale.entries() {
            assert!(
                hex.starts_with('#') && hex.len() == 7,
                "{role} {step} should hold a hex color, got {hex:?}"
            );
        }
    }
}

#[test]
fn test_lightness_monotonic_per_scale() {
    let (palette, _) = default_palette();

    for (role, scale) in palette.scales() {
        let mut prev = f64::INFINITY;
        for (step, hex) in scale.entries() {
            let l = Lch::from_hex(hex).unwrap().l;
            assert!(
                l <= prev + 1e-6,
                "{role} lightness must not increase toward step {step}"
            );
            prev = l;
        }
    }
}

#[test]
fn test_accessible_mode_fixes_key_pairs() {
    let mut seeds = SeedSet::from_manual(Some("#3b82f6"), None, None);
    let palette = generate_palette(
        &mut seeds,
        &GeneratorOptions {
            accessible: true,
            ..GeneratorOptions::default()
        },
    );

    for role in ROLES {
        let scale = palette.scale(role);
        let pairs = [
            ("#ffffff", scale.get(500).unwrap()),
            (scale.get(50).unwrap(), scale.get(900).unwrap()),
            (scale.get(100).unwrap(), scale.get(800).unwrap()),
            (scale.get(200).unwrap(), scale.get(700).unwrap()),
        ];
        for (bg, fg) in pairs {
            assert!(
                contrast_ratio(bg, fg) >= MIN_CONTRAST_RATIO,
                "{role}: {fg} on {bg} below AA"
            );
        }
    }
}

#[test]
fn test_seed_edit_regenerates_brand_and_neutral() {
    let (mut palette, mut seeds) = default_palette();
    let before = palette.clone();

    let edit = EditRequest::new(Role::Primary, 500, "#22c55e");
    let outcome = apply_edit(&mut palette, &mut seeds, &edit).unwrap();

    match outcome {
        EditOutcome::SeedPromoted { regenerated } => {
            assert!(regenerated.contains(&Role::Primary));
            assert!(regenerated.contains(&Role::Neutral));
        }
        other => panic!("Expected seed promotion, got {other:?}"),
    }

    // Primary and neutral change; state scales are untouched.
    assert_ne!(palette.scale(Role::Primary), before.scale(Role::Primary));
    assert_ne!(palette.scale(Role::Neutral), before.scale(Role::Neutral));
    assert_eq!(palette.scale(Role::Success), before.scale(Role::Success));
    assert_eq!(palette.scale(Role::Error), before.scale(Role::Error));
}

#[test]
fn test_near_gray_edit_stays_local() {
    let (mut palette, mut seeds) = default_palette();
    let before = palette.clone();

    let edit = EditRequest::new(Role::Primary, 700, "#777777");
    let outcome = apply_edit(&mut palette, &mut seeds, &edit).unwrap();
    assert_eq!(outcome, EditOutcome::Local);

    let mut changed = 0;
    for (role, scale) in palette.scales() {
        for (step, hex) in scale.entries() {
            if before.scale(role).get(step).unwrap() != hex {
                changed += 1;
            }
        }
    }
    assert_eq!(changed, 1, "Near-gray edit must touch exactly one cell");
    assert_eq!(palette.scale(Role::Primary).get(700), Some("#777777"));
}

#[test]
fn test_invalid_edit_leaves_palette_untouched() {
    let (mut palette, mut seeds) = default_palette();
    let before = palette.clone();
    let seeds_before = seeds.clone();

    let edit = EditRequest::new(Role::Primary, 550, "#22c55e");
    assert!(apply_edit(&mut palette, &mut seeds, &edit).is_err());

    let edit = EditRequest::new(Role::Primary, 500, "not-a-color");
    assert!(apply_edit(&mut palette, &mut seeds, &edit).is_err());

    assert_eq!(palette, before);
    assert_eq!(seeds, seeds_before);
}

#[test]
fn test_exports_cover_every_cell() {
    let (palette, _) = default_palette();

    let csv = export_palette(&palette, ExportFormat::Csv).unwrap();
    // Header plus 7 roles x 10 steps
    assert_eq!(csv.lines().count(), 71);

    let css = export_palette(&palette, ExportFormat::Css).unwrap();
    for role in ROLES {
        for step in STEPS {
            assert!(css.contains(&format!("--color-{role}-{step}:")));
        }
    }

    let tailwind = export_palette(&palette, ExportFormat::Tailwind).unwrap();
    assert!(tailwind.starts_with("module.exports = {"));
    assert!(tailwind.contains("\"colors\""));
}

#[test]
fn test_bridge_sync_writes_seventy_variables() {
    let (palette, _) = default_palette();
    let mut host = InMemoryHost::new();

    sync_palette(&mut host, "Design Tokens", &palette).unwrap();
    assert_eq!(host.len(), 70);
    assert!(host.get("Design Tokens", "Primary/500").is_some());
}
