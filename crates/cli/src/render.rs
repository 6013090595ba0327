//! Plain-text rendering of palettes and the tone table.

use std::fmt::Write;
use tonal_palette_core::{HexColor, TitledPalette, TONE_SPECS};

/// A four-cell block painted with a 24-bit ANSI background.
fn swatch(color: HexColor) -> String {
    format!(
        "\x1b[48;2;{};{};{}m    \x1b[0m",
        color.r, color.g, color.b
    )
}

/// Renders a titled palette as a header line followed by one
/// `key  #hex` line per tone.
pub fn palette_text(titled: &TitledPalette, with_swatch: bool) -> String {
    let mut out = format!("{} ({})\n", titled.title, titled.base);
    for (tone, color) in titled.palette.iter() {
        if with_swatch {
            out.push_str(&swatch(color));
            out.push(' ');
        }
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{:>4}  {color}", tone.key());
    }
    out
}

/// Renders the tone table, one row per tone.
pub fn tones_text() -> String {
    let mut out = String::from(" key  saturation  lightness\n");
    for spec in TONE_SPECS {
        let _ = writeln!(
            out,
            "{:>4}  {:>+10.1}  {:>9}",
            spec.tone.key(),
            spec.saturation_delta,
            spec.target_lightness
        );
    }
    out
}
