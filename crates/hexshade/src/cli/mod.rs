//! CLI subcommands — shade a color, show configuration.

mod config_cmd;
mod shade_cmd;

use std::io::Write;
use std::path::Path;

use clap::Subcommand;
use serde::Serialize;

pub(super) use hexshade_lib::config::Config;
pub(super) use hexshade_lib::error::Result;
pub(super) use hexshade_lib::{Rgb, ShadeMode};

const PADDING: usize = 2;

/// Compute alignment width for key-value output: the longest key plus PADDING.
pub(super) fn kv_width(keys: &[&str]) -> usize {
    keys.iter().map(|k| k.len() + PADDING).max().unwrap_or(0)
}

pub(super) fn format_kv(key: &str, value: impl std::fmt::Display, w: usize) -> String {
    format!("{key:<width$}{value}", width = w)
}

pub(super) fn kv(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("{}", format_kv(key, value, w));
}

/// Pretty-print `value` as JSON on stdout. Serialization and write failures
/// surface as [`hexshade_lib::ShadeError::Io`].
pub(super) fn print_json(value: &impl Serialize) -> Result<()> {
    let mut out = std::io::stdout().lock();
    write_json(&mut out, value)
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

/// Load the config from `custom_path` if given, otherwise the platform default.
/// Parse warnings are logged, never fatal.
pub(super) fn load_config(custom_path: Option<&Path>) -> Config {
    match custom_path {
        Some(path) => {
            let (config, warnings) = Config::load_from(path);
            for w in &warnings {
                log::warn!("{w}");
            }
            config
        }
        None => Config::load(),
    }
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct ShadeOutput {
    pub input: String,
    pub output: String,
    pub mode: ShadeMode,
    pub percentage: f64,
    pub rgb: Rgb,
}

#[derive(Serialize)]
pub(super) struct ConfigOutput {
    pub config_file: Option<String>,
    pub config_file_exists: bool,
    pub settings: Config,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lighten or darken a color (percentage and mode default to the config file)
    Shade {
        /// Color in #RRGGBB form
        color: String,
        /// Percentage to shade by
        #[arg(short, long, allow_negative_numbers = true)]
        percent: Option<f64>,
        /// Darken instead of lighten
        #[arg(long, conflicts_with = "light")]
        dark: bool,
        /// Lighten (overrides a configured darken)
        #[arg(long)]
        light: bool,
    },

    /// Lighten a color toward white
    Lighten {
        /// Color in #RRGGBB form
        color: String,
        /// Percentage (default: configured percentage)
        #[arg(allow_negative_numbers = true)]
        percent: Option<f64>,
    },

    /// Darken a color toward black
    Darken {
        /// Color in #RRGGBB form
        color: String,
        /// Percentage (default: configured percentage)
        #[arg(allow_negative_numbers = true)]
        percent: Option<f64>,
    },

    /// Show current configuration and file path
    Config,
}

/// Resolve the `--dark`/`--light` pair; `None` means "use the config".
fn mode_flag(dark: bool, light: bool) -> Option<ShadeMode> {
    match (dark, light) {
        (true, _) => Some(ShadeMode::Darken),
        (_, true) => Some(ShadeMode::Lighten),
        _ => None,
    }
}

pub fn run(cmd: Command, json: bool, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        Command::Shade {
            color,
            percent,
            dark,
            light,
        } => {
            let config = load_config(config_path);
            shade_cmd::cmd_shade(&color, percent, mode_flag(dark, light), &config, json)
        }
        Command::Lighten { color, percent } => {
            let config = load_config(config_path);
            shade_cmd::cmd_shade(&color, percent, Some(ShadeMode::Lighten), &config, json)
        }
        Command::Darken { color, percent } => {
            let config = load_config(config_path);
            shade_cmd::cmd_shade(&color, percent, Some(ShadeMode::Darken), &config, json)
        }
        Command::Config => config_cmd::cmd_config(json, config_path),
    }
}
