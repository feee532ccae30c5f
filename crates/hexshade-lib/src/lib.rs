//! hexshade — lighten or darken `#RRGGBB` colors by a percentage.

pub mod color;
pub mod config;
pub mod error;
pub mod shade;

pub use color::{Rgb, format_hex, parse_hex};
pub use error::ShadeError;
pub use shade::{Shade, ShadeMode, adjust_component, darken, lighten, shade_color};
