//! `tsmirror.toml` project configuration.
//!
//! ```toml
//! [convert]
//! input = "Models"
//! output = "web/src/models"
//! banner = true
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use std::path::{Path, PathBuf};

use eyre::{Context, Result, bail};
use serde::Deserialize;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "tsmirror.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// The `[convert]` table.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Directory scanned for `.cs` files.
    pub input: PathBuf,
    /// Directory receiving the `.ts` files.
    pub output: PathBuf,
    /// Prepend the auto-generated banner to every file.
    pub banner: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("."),
            output: PathBuf::from("."),
            banner: true,
        }
    }
}

impl Config {
    /// Load the config at `path`, or `./tsmirror.toml` when no path is given.
    ///
    /// A missing default file yields the defaults; a missing explicit file is
    /// an error.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG), false),
        };

        if !path.exists() {
            if explicit {
                bail!("config file {} does not exist", path.display());
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        let config = Self::parse(&content)
            .wrap_err_with(|| format!("Invalid config in {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config.relative_to(path.parent().unwrap_or(Path::new(""))))
    }

    /// Parse a config from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn relative_to(mut self, base: &Path) -> Self {
        self.convert.input = base.join(&self.convert.input);
        self.convert.output = base.join(&self.convert.output);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.convert.input, PathBuf::from("."));
        assert_eq!(config.convert.output, PathBuf::from("."));
        assert!(config.convert.banner);
    }

    #[test]
    fn test_partial_table() {
        let config = Config::parse("[convert]\nbanner = false\n").unwrap();
        assert!(!config.convert.banner);
        assert_eq!(config.convert.input, PathBuf::from("."));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::parse("[convert]\nindent = 2\n").is_err());
        assert!(Config::parse("[render]\n").is_err());
    }

    #[test]
    fn test_open_resolves_against_config_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tsmirror.toml");
        fs::write(&path, "[convert]\ninput = \"Models\"\noutput = \"out\"\n").unwrap();

        let config = Config::open(Some(&path)).unwrap();
        assert_eq!(config.convert.input, temp.path().join("Models"));
        assert_eq!(config.convert.output, temp.path().join("out"));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let temp = TempDir::new().unwrap();
        let err = Config::open(Some(&temp.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
