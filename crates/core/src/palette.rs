//! Tonal palette: 11 shades derived from a single base color.
//!
//! A palette holds exactly one color per [`Tone`], in table order. It is a
//! pure function of the base color and the constant tone table.

use crate::color::{HexColor, Hsl};
use crate::error::ColorError;
use crate::tone::{Tone, TONE_SPECS};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::ops::Index;

/// Eleven shades of one base color, keyed by [`Tone`].
///
/// Serializes as an ordered map from tone key to hex string, e.g.
/// `{"10": "#0a2917", ..., "99": "#fbfefc"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    base: HexColor,
    shades: [HexColor; 11],
}

impl Palette {
    /// Builds the palette for an already-parsed base color.
    pub fn from_base(base: HexColor) -> Self {
        let hsl = base.to_hsl();
        Self {
            base,
            shades: TONE_SPECS.map(|spec| spec.apply(hsl).to_hex()),
        }
    }

    /// The color this palette was generated from.
    pub fn base(&self) -> HexColor {
        self.base
    }

    pub fn get(&self, tone: Tone) -> HexColor {
        self.shades[tone.index()]
    }

    /// Iterates `(tone, color)` pairs from darkest to lightest.
    pub fn iter(&self) -> impl Iterator<Item = (Tone, HexColor)> + '_ {
        Tone::ALL.into_iter().zip(self.shades.iter().copied())
    }

    /// Returns the HSL of every shade, as read back from its hex value.
    pub fn to_hsl(&self) -> [Hsl; 11] {
        self.shades.map(HexColor::to_hsl)
    }
}

impl Index<Tone> for Palette {
    type Output = HexColor;

    fn index(&self, tone: Tone) -> &HexColor {
        &self.shades[tone.index()]
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.shades.len()))?;
        for (tone, color) in self.iter() {
            map.serialize_entry(&tone, &color)?;
        }
        map.end()
    }
}

/// Parses `hex` and builds its tonal palette.
///
/// Returns `ColorError::InvalidFormat` unchanged from parsing on malformed
/// input.
pub fn create_palette(hex: &str) -> Result<Palette, ColorError> {
    HexColor::from_hex(hex).map(Palette::from_base)
}
