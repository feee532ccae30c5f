//! User configuration — TOML-based, platform-aware paths.
//!
//! Holds the percentage and mode used when a caller does not give one.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::shade::{DEFAULT_PERCENTAGE, Shade, ShadeMode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default shade percentage. Default: 10.
    #[serde(default = "default_percentage")]
    pub percentage: f64,

    /// Default direction, `"lighten"` or `"darken"`. Default: lighten.
    #[serde(default)]
    pub mode: ShadeMode,
}

fn default_percentage() -> f64 {
    DEFAULT_PERCENTAGE
}

impl Default for Config {
    fn default() -> Self {
        Config {
            percentage: default_percentage(),
            mode: ShadeMode::default(),
        }
    }
}

impl Config {
    /// Platform-specific config directory.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hexshade"))
    }

    /// Full path to config file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("config.toml"))
    }

    /// Load config from disk, or return defaults if not found.
    pub fn load() -> Self {
        let (config, warnings) = Self::load_with_warnings();
        for w in &warnings {
            log::warn!("{w}");
        }
        config
    }

    /// Load config from an arbitrary path, returning the config and any parse warnings.
    ///
    /// Returns `(defaults, [])` if the file doesn't exist.
    /// Returns `(defaults, [warning])` if the file exists but can't be parsed
    /// or fails [`Config::validate`].
    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return (Self::default(), vec![]),
        };
        let config: Self = match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                let warning = format!(
                    "config parse error ({}), using defaults: {e}",
                    path.display()
                );
                return (Self::default(), vec![warning]);
            }
        };
        match config.validate() {
            Ok(()) => {
                log::debug!("loaded config from {}", path.display());
                (config, vec![])
            }
            Err(e) => {
                let warning = format!("{e} ({}), using defaults", path.display());
                (Self::default(), vec![warning])
            }
        }
    }

    /// Load config from the default path, returning the config and any parse warnings.
    pub fn load_with_warnings() -> (Self, Vec<String>) {
        let Some(path) = Self::path() else {
            return (Self::default(), vec![]);
        };
        Self::load_from(&path)
    }

    /// Reject values no shade could use.
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.percentage.is_finite() {
            return Err(crate::ShadeError::Config(format!(
                "percentage must be a finite number, got {}",
                self.percentage
            )));
        }
        Ok(())
    }

    /// The shade described by this config.
    pub fn shade(&self) -> Shade {
        Shade::new(self.percentage, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let c = Config::default();
        assert_eq!(c.percentage, 10.0);
        assert_eq!(c.mode, ShadeMode::Lighten);
    }

    #[test]
    fn default_shade_matches_shade_default() {
        assert_eq!(Config::default().shade(), Shade::default());
    }

    #[test]
    fn path_ends_with_config_toml() {
        if let Some(p) = Config::path() {
            assert!(p.ends_with("hexshade/config.toml"));
        }
    }

    #[test]
    fn parse_full_toml() {
        let c: Config = toml::from_str("percentage = 25.5\nmode = \"darken\"\n").unwrap();
        assert_eq!(c.percentage, 25.5);
        assert_eq!(c.mode, ShadeMode::Darken);
    }

    #[test]
    fn parse_empty_toml_uses_defaults() {
        let c: Config = toml::from_str("").unwrap();
        assert_eq!(c, Config::default());
    }

    #[test]
    fn parse_partial_toml() {
        let c: Config = toml::from_str("mode = \"darken\"\n").unwrap();
        assert_eq!(c.percentage, 10.0);
        assert_eq!(c.mode, ShadeMode::Darken);
    }

    #[test]
    fn parse_unknown_mode_fails() {
        assert!(toml::from_str::<Config>("mode = \"sideways\"\n").is_err());
    }

    #[test]
    fn validate_accepts_out_of_range_finite() {
        for p in [-20.0, 0.0, 100.0, 400.0] {
            let c = Config {
                percentage: p,
                ..Config::default()
            };
            assert!(c.validate().is_ok(), "{p} should be accepted");
        }
    }

    #[test]
    fn validate_rejects_non_finite() {
        let c = Config {
            percentage: f64::NAN,
            ..Config::default()
        };
        assert!(matches!(c.validate(), Err(crate::ShadeError::Config(_))));
    }

    #[test]
    fn load_from_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (c, warnings) = Config::load_from(&dir.path().join("nope.toml"));
        assert_eq!(c, Config::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn load_from_garbage_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "percentage = \"lots\"").unwrap();
        let (c, warnings) = Config::load_from(&path);
        assert_eq!(c, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("config parse error"));
    }

    #[test]
    fn load_from_non_finite_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "percentage = nan").unwrap();
        let (c, warnings) = Config::load_from(&path);
        assert_eq!(c, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("finite"));
    }
}
