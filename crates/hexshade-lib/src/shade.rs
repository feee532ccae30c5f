//! Lighten/darken arithmetic.
//!
//! Each channel moves toward 255 (lighten) in proportion to its remaining
//! headroom, or toward 0 (darken) in proportion to its current value.
//! Results are rounded half away from zero, then clamped to `0..=255`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{Rgb, format_hex, parse_hex};
use crate::error::Result;

/// Percentage applied when none is given.
pub const DEFAULT_PERCENTAGE: f64 = 10.0;

/// Direction of the shade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadeMode {
    #[default]
    Lighten,
    Darken,
}

impl ShadeMode {
    /// `true` selects [`ShadeMode::Lighten`], `false` [`ShadeMode::Darken`].
    pub fn from_light_mode(light_mode: bool) -> Self {
        if light_mode {
            ShadeMode::Lighten
        } else {
            ShadeMode::Darken
        }
    }

    pub fn is_light(self) -> bool {
        self == ShadeMode::Lighten
    }
}

impl fmt::Display for ShadeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadeMode::Lighten => write!(f, "lighten"),
            ShadeMode::Darken => write!(f, "darken"),
        }
    }
}

/// A shade operation: how far, and which way.
///
/// `percentage` is conventionally 0–100 but not range-checked; values outside
/// that range simply push more channels into the clamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shade {
    pub percentage: f64,
    pub mode: ShadeMode,
}

impl Default for Shade {
    fn default() -> Self {
        Shade {
            percentage: DEFAULT_PERCENTAGE,
            mode: ShadeMode::default(),
        }
    }
}

impl Shade {
    pub fn new(percentage: f64, mode: ShadeMode) -> Self {
        Shade { percentage, mode }
    }

    pub fn lighten(percentage: f64) -> Self {
        Shade::new(percentage, ShadeMode::Lighten)
    }

    pub fn darken(percentage: f64) -> Self {
        Shade::new(percentage, ShadeMode::Darken)
    }

    /// Signed scaling factor: `percentage / 100`, negated when darkening.
    pub fn factor(&self) -> f64 {
        let magnitude = self.percentage / 100.0;
        if self.mode.is_light() {
            magnitude
        } else {
            -magnitude
        }
    }

    /// Shade an already-decoded color.
    pub fn apply_rgb(&self, rgb: Rgb) -> Rgb {
        let factor = self.factor();
        let light_mode = self.mode.is_light();
        let shaded = rgb.map(|c| adjust_component(c, factor, light_mode));
        log::trace!(
            "{} {}% (factor {factor}): {rgb} -> {shaded}",
            self.mode,
            self.percentage
        );
        shaded
    }

    /// Shade a `#RRGGBB` string, returning an uppercase `#RRGGBB` string.
    ///
    /// Fails only on a malformed color.
    pub fn apply(&self, hex: &str) -> Result<String> {
        let rgb = parse_hex(hex)?;
        Ok(format_hex(self.apply_rgb(rgb)))
    }
}

/// Move one channel by `factor`.
///
/// With `light_mode` the step is proportional to the headroom `255 - c`,
/// otherwise to `c` itself (`factor` is expected to be negative for a darken).
/// Rounds half away from zero, then clamps. A NaN result (e.g. an infinite
/// factor times zero span) becomes 0.
pub fn adjust_component(component: u8, factor: f64, light_mode: bool) -> u8 {
    let c = f64::from(component);
    let span = if light_mode { 255.0 - c } else { c };
    let value = (c + factor * span).round();
    // `as` saturates and maps NaN to 0
    value.clamp(0.0, 255.0) as u8
}

/// Lighten (`light_mode = true`) or darken a `#RRGGBB` color by `percentage`.
///
/// ```
/// use hexshade_lib::shade_color;
///
/// assert_eq!(shade_color("#1E5CC4", 50.0, true).unwrap(), "#8FAEE2");
/// assert_eq!(shade_color("#1E5CC4", 10.0, false).unwrap(), "#1B53B0");
/// ```
pub fn shade_color(hex: &str, percentage: f64, light_mode: bool) -> Result<String> {
    Shade::new(percentage, ShadeMode::from_light_mode(light_mode)).apply(hex)
}

/// Lighten a `#RRGGBB` color by `percentage`.
pub fn lighten(hex: &str, percentage: f64) -> Result<String> {
    Shade::lighten(percentage).apply(hex)
}

/// Darken a `#RRGGBB` color by `percentage`.
pub fn darken(hex: &str, percentage: f64) -> Result<String> {
    Shade::darken(percentage).apply(hex)
}
