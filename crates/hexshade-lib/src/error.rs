//! Unified error type for the hexshade-lib crate.
//!
//! [`ShadeError`] covers malformed color input, configuration validation,
//! and output I/O. The `From<io::Error>` impl lets `?` propagate write failures.

use std::fmt;

/// Unified error type for hexshade-lib operations.
#[derive(Debug)]
pub enum ShadeError {
    /// Input is not a strict `#RRGGBB` string. Carries the offending input.
    InvalidFormat(String),
    /// Configuration validation error.
    Config(String),
    /// Standard I/O error (writing output).
    Io(std::io::Error),
}

impl fmt::Display for ShadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadeError::InvalidFormat(s) => {
                write!(f, "Invalid hex color format: '{s}'. Expected '#RRGGBB'.")
            }
            ShadeError::Config(e) => write!(f, "Config error: {e}"),
            ShadeError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ShadeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShadeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ShadeError {
    fn from(e: std::io::Error) -> Self {
        ShadeError::Io(e)
    }
}

/// Crate-level Result alias using [`ShadeError`].
pub type Result<T> = std::result::Result<T, ShadeError>;
