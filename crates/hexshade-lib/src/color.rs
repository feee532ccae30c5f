//! Color parsing and formatting.
//!
//! Colors travel as strict `#RRGGBB` strings and are decoded into an [`Rgb`]
//! triple for arithmetic.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, ShadeError};

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Apply `f` to each channel.
    pub fn map(self, mut f: impl FnMut(u8) -> u8) -> Self {
        Rgb::new(f(self.r), f(self.g), f(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parse a strict `#RRGGBB` string (hex digits in either case).
///
/// No trimming, no shorthand, no named colors: anything other than exactly
/// seven characters starting with `#` followed by six hex digits is
/// [`ShadeError::InvalidFormat`].
pub fn parse_hex(s: &str) -> Result<Rgb> {
    let invalid = || ShadeError::InvalidFormat(s.to_string());

    let digits = s.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    // All six bytes are ASCII, so byte slicing lands on char boundaries.
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format a color as `#RRGGBB` with uppercase, zero-padded digits.
pub fn format_hex(rgb: Rgb) -> String {
    rgb.to_string()
}
