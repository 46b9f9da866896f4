//! CSS custom-property export.

use crate::models::Palette;

/// Serializes the palette as CSS custom properties under `:root`.
///
/// Variable names follow the `--color-<role>-<step>` convention.
#[must_use]
pub fn generate_css(palette: &Palette) -> String {
    let mut css = String::from(":root {\n");

    for (role, scale) in palette.scales() {
        for (step, hex) in scale.entries() {
            css.push_str(&format!("  --color-{role}-{step}: {hex};\n"));
        }
    }

    css.push_str("}\n");
    css
}
