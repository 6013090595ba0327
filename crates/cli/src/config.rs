//! Loading palette sheets from disk.

use crate::error::CliError;
use std::fs;
use std::path::Path;
use tonal_palette_core::PaletteSheet;

/// Reads a JSON sheet from `path`, or returns the default sheet when no
/// path is given.
pub fn load_sheet(path: Option<&Path>) -> Result<PaletteSheet, CliError> {
    let Some(path) = path else {
        tracing::debug!("no sheet given, using the default sheet");
        return Ok(PaletteSheet::default());
    };
    let json = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("failed to read {}: {e}", path.display())))?;
    let sheet = PaletteSheet::from_json(&json)?;
    tracing::debug!(
        path = %path.display(),
        palettes = sheet.palettes.len(),
        "loaded sheet"
    );
    Ok(sheet)
}
