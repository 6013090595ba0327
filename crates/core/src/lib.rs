#![deny(unsafe_code)]
//! Core types for the tonal palette generator.
//!
//! Provides hex/HSL conversion (`HexColor`, `Hsl`), the fixed tone table
//! (`Tone`, `ToneSpec`), the 11-shade `Palette` built from a base color, and
//! `PaletteSheet` for rendering several titled palettes at once.

pub mod color;
pub mod error;
pub mod palette;
pub mod sheet;
pub mod tone;

pub use color::{hex_to_hsl, hsl_to_hex, HexColor, Hsl};
pub use error::ColorError;
pub use palette::{create_palette, Palette};
pub use sheet::{PaletteSheet, SheetEntry, TitledPalette};
pub use tone::{adjust_tone, Tone, ToneSpec, TONE_SPECS};
