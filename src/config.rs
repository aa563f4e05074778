//! Project configuration (uxkit.yaml) parsing.
//!
//! Every field has a default, so an empty or missing file is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::date::DEFAULT_DATE_PATTERN;
use crate::device::DeviceThresholds;
use crate::error::{KitError, Result};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "uxkit.yaml";

/// Configuration loaded from uxkit.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Screen-size classification thresholds.
    pub device: DeviceThresholds,

    /// strftime pattern used by the `date` command.
    #[serde(default = "default_date_pattern")]
    pub date_pattern: String,

    /// Strings table used for localisation lookups.
    pub strings: Option<PathBuf>,
}

fn default_date_pattern() -> String {
    DEFAULT_DATE_PATTERN.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: DeviceThresholds::default(),
            date_pattern: default_date_pattern(),
            strings: None,
        }
    }
}

impl Config {
    /// Load config from a yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| KitError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else `uxkit.yaml` from `dir` if present,
    /// else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| KitError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check uxkit.yaml syntax".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.date_pattern, "%d %b %Y");
        assert_eq!(config.device.little_below, 852.0);
        assert_eq!(config.device.big_from, 874.0);
        assert_eq!(config.device.home_button_max_inset, 20.0);
        assert!(config.strings.is_none());
    }

    #[test]
    fn test_parse_partial() {
        let yaml = r#"
device:
  little_below: 700
date_pattern: "%Y-%m-%d"
strings: locales/en.yaml
"#;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.device.little_below, 700.0);
        assert_eq!(config.device.big_from, 874.0);
        assert_eq!(config.date_pattern, "%Y-%m-%d");
        assert_eq!(config.strings, Some(PathBuf::from("locales/en.yaml")));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Config::parse("device: [1, 2").is_err());
    }

    #[test]
    fn test_discover() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::discover(None, dir.path()).unwrap(), Config::default());

        fs::write(dir.path().join(CONFIG_FILE), "date_pattern: \"%d/%m\"\n").unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.date_pattern, "%d/%m");

        let missing = dir.path().join("nope.yaml");
        assert!(Config::discover(Some(&missing), dir.path()).is_err());
    }
}
