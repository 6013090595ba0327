//! The fixed tone table and the per-tone HSL adjustment.
//!
//! Each of the 11 tones pins lightness to a fixed target and nudges
//! saturation by a small number of percentage points. The base color's own
//! lightness is discarded, so every palette shares the same lightness ladder
//! and only hue and saturation follow the base color.

use crate::color::Hsl;
use serde::{Serialize, Serializer};
use std::fmt;

/// One step of the tonal ladder. Lower keys are darker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tone {
    T10,
    T20,
    T30,
    T40,
    T50,
    T60,
    T70,
    T80,
    T90,
    T95,
    T99,
}

/// Adjustment parameters for a single tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub tone: Tone,
    /// Percentage points added to the base saturation.
    pub saturation_delta: f64,
    /// Lightness of the resulting shade, in percent.
    pub target_lightness: f64,
}

/// The tone table, ordered by key.
pub const TONE_SPECS: [ToneSpec; 11] = [
    spec(Tone::T10, -1.0, 10.0),
    spec(Tone::T20, -0.8, 20.0),
    spec(Tone::T30, -0.6, 30.0),
    spec(Tone::T40, -0.4, 40.0),
    spec(Tone::T50, -0.2, 50.0),
    spec(Tone::T60, -0.2, 60.0),
    spec(Tone::T70, 0.2, 70.0),
    spec(Tone::T80, 0.4, 80.0),
    spec(Tone::T90, 0.6, 90.0),
    spec(Tone::T95, 0.8, 95.0),
    spec(Tone::T99, 1.0, 99.0),
];

const fn spec(tone: Tone, saturation_delta: f64, target_lightness: f64) -> ToneSpec {
    ToneSpec {
        tone,
        saturation_delta,
        target_lightness,
    }
}

impl Tone {
    /// All tones in table order.
    pub const ALL: [Tone; 11] = [
        Tone::T10,
        Tone::T20,
        Tone::T30,
        Tone::T40,
        Tone::T50,
        Tone::T60,
        Tone::T70,
        Tone::T80,
        Tone::T90,
        Tone::T95,
        Tone::T99,
    ];

    /// Returns the numeric key, e.g. `50` for `Tone::T50`.
    pub const fn key(self) -> u8 {
        match self {
            Tone::T10 => 10,
            Tone::T20 => 20,
            Tone::T30 => 30,
            Tone::T40 => 40,
            Tone::T50 => 50,
            Tone::T60 => 60,
            Tone::T70 => 70,
            Tone::T80 => 80,
            Tone::T90 => 90,
            Tone::T95 => 95,
            Tone::T99 => 99,
        }
    }

    /// Looks up a tone by its numeric key.
    pub fn from_key(key: u8) -> Option<Tone> {
        Tone::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Position of this tone in [`Tone::ALL`] and [`TONE_SPECS`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn spec(self) -> ToneSpec {
        TONE_SPECS[self.index()]
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Serialize for Tone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.key())
    }
}

/// Derives a shade from `base`.
///
/// `saturation_delta` is added to the saturation percentage as-is (a delta
/// of `-1.0` removes one percentage point). Lightness is replaced by
/// `target_lightness`. Both are clamped to [0, 100]; hue passes through.
pub fn adjust_tone(base: Hsl, saturation_delta: f64, target_lightness: f64) -> Hsl {
    Hsl {
        h: base.h,
        s: (base.s + saturation_delta).clamp(0.0, 100.0),
        l: target_lightness.clamp(0.0, 100.0),
    }
}

impl ToneSpec {
    /// Applies this tone's adjustment to `base`.
    pub fn apply(&self, base: Hsl) -> Hsl {
        adjust_tone(base, self.saturation_delta, self.target_lightness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_in_key_order_and_matches_tones() {
        for (i, (tone, spec)) in Tone::ALL.iter().zip(TONE_SPECS.iter()).enumerate() {
            assert_eq!(spec.tone, *tone, "mismatch at index {i}");
            assert_eq!(tone.index(), i);
        }
        let keys: Vec<u8> = Tone::ALL.iter().map(|t| t.key()).collect();
        assert_eq!(keys, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 99]);
    }

    #[test]
    fn target_lightness_rises_with_key() {
        let lightness: Vec<f64> = TONE_SPECS.iter().map(|s| s.target_lightness).collect();
        assert!(lightness.windows(2).all(|w| w[0] < w[1]), "{lightness:?}");
    }

    #[test]
    fn from_key_round_trips_every_tone() {
        for tone in Tone::ALL {
            assert_eq!(Tone::from_key(tone.key()), Some(tone));
        }
    }

    #[test]
    fn from_key_rejects_unknown_keys() {
        for key in [0, 5, 15, 55, 98, 100, 255] {
            assert_eq!(Tone::from_key(key), None, "key {key}");
        }
    }

    #[test]
    fn spec_lookup_returns_table_entry() {
        let s = Tone::T95.spec();
        assert_eq!(s.tone, Tone::T95);
        assert_eq!(s.saturation_delta, 0.8);
        assert_eq!(s.target_lightness, 95.0);
    }

    #[test]
    fn tone_displays_and_serializes_as_key() {
        assert_eq!(Tone::T40.to_string(), "40");
        assert_eq!(serde_json::to_string(&Tone::T99).unwrap(), "99");
    }

    #[test]
    fn adjust_tone_discards_base_lightness() {
        let out = adjust_tone(Hsl::new(145.0, 63.0, 42.0), -0.2, 50.0);
        assert_eq!(out.h, 145.0);
        assert_eq!(out.l, 50.0);
    }

    #[test]
    fn saturation_delta_is_additive_percentage_points() {
        // -1.0 removes one point, it does not zero the saturation.
        let out = adjust_tone(Hsl::new(145.0, 63.0, 42.0), -1.0, 10.0);
        assert_eq!(out.s, 62.0);
        let out = adjust_tone(Hsl::new(145.0, 63.0, 42.0), 1.0, 99.0);
        assert_eq!(out.s, 64.0);
    }

    #[test]
    fn adjust_tone_clamps_saturation() {
        assert_eq!(adjust_tone(Hsl::new(0.0, 0.0, 50.0), -1.0, 10.0).s, 0.0);
        assert_eq!(adjust_tone(Hsl::new(0.0, 100.0, 50.0), 1.0, 99.0).s, 100.0);
    }

    #[test]
    fn adjust_tone_clamps_lightness() {
        let base = Hsl::new(10.0, 50.0, 50.0);
        assert_eq!(adjust_tone(base, 0.0, -5.0).l, 0.0);
        assert_eq!(adjust_tone(base, 0.0, 130.0).l, 100.0);
    }

    #[test]
    fn apply_uses_table_parameters() {
        let base = Hsl::new(200.0, 40.0, 70.0);
        let out = Tone::T30.spec().apply(base);
        assert_eq!(out, adjust_tone(base, -0.6, 30.0));
    }
}
