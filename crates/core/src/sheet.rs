//! A sheet of titled palettes, described in JSON.
//!
//! ```json
//! { "palettes": [ { "title": "Primary", "color": "#27AE60" } ] }
//! ```
//!
//! Colors are kept as the raw strings the sheet was written with and only
//! parsed when the sheet is rendered.

use crate::color::HexColor;
use crate::error::ColorError;
use crate::palette::Palette;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An ordered list of titled base colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteSheet {
    pub palettes: Vec<SheetEntry>,
}

/// One titled base color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetEntry {
    pub title: String,
    pub color: String,
}

/// A rendered palette with its display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitledPalette {
    pub title: String,
    pub base: HexColor,
    pub palette: Palette,
}

impl SheetEntry {
    pub fn new(title: &str, color: &str) -> Self {
        Self {
            title: title.to_string(),
            color: color.to_string(),
        }
    }
}

impl Default for PaletteSheet {
    /// A primary green and a neutral background gray.
    fn default() -> Self {
        Self {
            palettes: vec![
                SheetEntry::new("Primary", "27AE60"),
                SheetEntry::new("Backgrounds", "938F96"),
            ],
        }
    }
}

impl PaletteSheet {
    /// Parses a sheet from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, ColorError> {
        let sheet: PaletteSheet =
            serde_json::from_str(json).map_err(|e| ColorError::InvalidSheet(e.to_string()))?;
        sheet.validate()?;
        Ok(sheet)
    }

    /// Checks that the sheet is non-empty and that titles are present and
    /// unique (ignoring case).
    ///
    /// Colors are not checked here; [`PaletteSheet::render`] reports them.
    pub fn validate(&self) -> Result<(), ColorError> {
        if self.palettes.is_empty() {
            return Err(ColorError::InvalidSheet(
                "sheet requires at least 1 palette".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for (i, entry) in self.palettes.iter().enumerate() {
            let title = entry.title.trim();
            if title.is_empty() {
                return Err(ColorError::InvalidSheet(format!(
                    "palette {i} has an empty title"
                )));
            }
            if !seen.insert(title.to_lowercase()) {
                return Err(ColorError::InvalidSheet(format!(
                    "duplicate palette title: {title}"
                )));
            }
        }
        Ok(())
    }

    /// Builds every palette in sheet order.
    ///
    /// The first malformed color fails the whole sheet with
    /// `ColorError::InvalidFormat`.
    pub fn render(&self) -> Result<Vec<TitledPalette>, ColorError> {
        self.validate()?;
        self.palettes
            .iter()
            .map(|entry| {
                let base = HexColor::from_hex(&entry.color)?;
                Ok(TitledPalette {
                    title: entry.title.clone(),
                    base,
                    palette: Palette::from_base(base),
                })
            })
            .collect()
    }
}
