//! CSV export with contrast audit columns.

use crate::models::{contrast_ratio, Palette};

/// Serializes the palette as CSV.
///
/// One row per (role, step), with the cell's WCAG contrast ratio against
/// pure white and pure black to two decimals, so the sheet doubles as a
/// quick legibility audit.
#[must_use]
pub fn generate_csv(palette: &Palette) -> String {
    let mut csv = String::from("Role,Scale,Hex,Contrast (vs White),Contrast (vs Black)\n");

    for (role, scale) in palette.scales() {
        for (step, hex) in scale.entries() {
            let vs_white = contrast_ratio(hex, "#ffffff");
            let vs_black = contrast_ratio(hex, "#000000");
            csv.push_str(&format!(
                "{role},{step},{hex},{vs_white:.2},{vs_black:.2}\n"
            ));
        }
    }

    csv
}
