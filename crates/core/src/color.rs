//! Hex and HSL color types and the conversions between them.
//!
//! `HexColor` holds the three sRGB bytes of a `#rrggbb` string. `Hsl` holds
//! hue in degrees and saturation/lightness in percent. HSL values produced
//! from hex are rounded to whole degrees and percentages, so a
//! hex -> HSL -> hex round trip can move a channel by a few units.

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// sRGB color with 8-bit channels.
///
/// Parses from `"#rrggbb"` or `"rrggbb"` (case insensitive) and always
/// formats as lowercase `"#rrggbb"`. Serializes as that hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue-saturation-lightness color.
///
/// `h` is in degrees, `s` and `l` in percent. Values from [`hex_to_hsl`] are
/// whole numbers with `h` in [0, 360) and `s`, `l` in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#27ae60" or "27AE60".
    ///
    /// Returns `ColorError::InvalidFormat` unless the input is an optional
    /// single `#` followed by exactly 6 ASCII hex digits.
    pub fn from_hex(hex: &str) -> Result<HexColor, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_format(
                hex,
                format!("invalid hex digit {c:?}"),
            ));
        }
        if digits.len() != 6 {
            return Err(ColorError::invalid_format(
                hex,
                format!("expected 6 hex digits, got {}", digits.len()),
            ));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| ColorError::invalid_format(hex, e.to_string()))
        };
        Ok(HexColor {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Formats the color as lowercase `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts to HSL, rounding every component to the nearest integer.
    ///
    /// Achromatic colors (r == g == b) have hue and saturation 0.
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: round_half_up(l * 100.0),
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        let h = sector / 6.0;

        Hsl {
            // A hue just below 360 rounds up to 360, which is 0.
            h: round_half_up(h * 360.0).rem_euclid(360.0),
            s: round_half_up(s * 100.0),
            l: round_half_up(l * 100.0),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexColor::from_hex(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HexColor::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Converts to hex. See [`hsl_to_hex`].
    pub fn to_hex(self) -> HexColor {
        hsl_to_hex(self)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Parses a hex color string and converts it to HSL.
///
/// Returns `ColorError::InvalidFormat` on malformed input.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    HexColor::from_hex(hex).map(HexColor::to_hsl)
}

/// Converts HSL to hex using the per-channel `k`/`a` formulation.
///
/// Any hue is accepted and wraps modulo 360. Saturation and lightness are
/// not clamped; callers keep them in [0, 100]. Out-of-range channel values
/// saturate at 0 or 255.
pub fn hsl_to_hex(hsl: Hsl) -> HexColor {
    let l = hsl.l / 100.0;
    let a = hsl.s * l.min(1.0 - l) / 100.0;

    let channel = |n: f64| {
        let k = (n + hsl.h / 30.0).rem_euclid(12.0);
        let value = l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
        round_half_up(255.0 * value) as u8
    };

    HexColor {
        r: channel(0.0),
        g: channel(8.0),
        b: channel(4.0),
    }
}

/// Rounds to the nearest integer, with halves going up.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
