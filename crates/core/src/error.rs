//! Error types for the tonal palette core.

use thiserror::Error;

/// Errors produced by color parsing and palette sheets.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A hex color string did not match `#?rrggbb`.
    #[error("invalid hex color {input:?}: {reason}")]
    InvalidFormat { input: String, reason: String },

    /// A palette sheet could not be parsed or failed validation.
    #[error("invalid sheet: {0}")]
    InvalidSheet(String),
}

impl ColorError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        ColorError::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
