//! `shade`, `lighten`, `darken` subcommands — shade one color.

use hexshade_lib::{Shade, format_hex, parse_hex};

use super::{Config, Result, ShadeMode, ShadeOutput, kv, kv_width, print_json};

/// Explicit arguments win; anything left unset comes from the config.
pub(super) fn resolve_shade(
    percent: Option<f64>,
    mode: Option<ShadeMode>,
    config: &Config,
) -> Shade {
    Shade::new(
        percent.unwrap_or(config.percentage),
        mode.unwrap_or(config.mode),
    )
}

pub(super) fn cmd_shade(
    color: &str,
    percent: Option<f64>,
    mode: Option<ShadeMode>,
    config: &Config,
    json: bool,
) -> Result<()> {
    let shade = resolve_shade(percent, mode, config);
    log::debug!("{} {}% of {color}", shade.mode, shade.percentage);

    let rgb = shade.apply_rgb(parse_hex(color)?);
    let output = format_hex(rgb);

    if json {
        let out = ShadeOutput {
            input: color.to_string(),
            output,
            mode: shade.mode,
            percentage: shade.percentage,
            rgb,
        };
        return print_json(&out);
    }

    let w = kv_width(&["Input:", "Output:", "Mode:", "Percentage:", "RGB:"]);
    kv("Input:", color, w);
    kv("Output:", &output, w);
    kv("Mode:", shade.mode, w);
    kv("Percentage:", format_args!("{}%", shade.percentage), w);
    kv("RGB:", format_args!("{}, {}, {}", rgb.r, rgb.g, rgb.b), w);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_uses_config_when_unset() {
        let config = Config {
            percentage: 20.0,
            mode: ShadeMode::Darken,
        };
        let shade = resolve_shade(None, None, &config);
        assert_eq!(shade, Shade::darken(20.0));
    }

    #[test]
    fn resolve_prefers_explicit_values() {
        let config = Config {
            percentage: 20.0,
            mode: ShadeMode::Darken,
        };
        let shade = resolve_shade(Some(50.0), Some(ShadeMode::Lighten), &config);
        assert_eq!(shade, Shade::lighten(50.0));
    }

    #[test]
    fn resolve_defaults_without_config_file() {
        assert_eq!(resolve_shade(None, None, &Config::default()), Shade::default());
    }

    #[test]
    fn cmd_shade_rejects_bad_color() {
        let result = cmd_shade("1E5CC4", Some(10.0), None, &Config::default(), false);
        assert!(matches!(
            result,
            Err(hexshade_lib::ShadeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn cmd_shade_accepts_nan_percentage() {
        let result = cmd_shade("#1E5CC4", Some(f64::NAN), None, &Config::default(), false);
        assert!(result.is_ok());
    }
}
