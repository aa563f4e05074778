//! Localised string tables.
//!
//! A table is a flat key/value map stored as JSON or YAML:
//!
//! ```yaml
//! greeting: Hello
//! farewell: Goodbye
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{KitError, Result};

/// A loaded string table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Strings {
    entries: HashMap<String, String>,
}

impl Strings {
    /// Load a table, choosing the format from the file extension
    /// (`.json`, otherwise YAML).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| KitError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read strings: {}", e),
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| KitError::Parse {
            message: format!("Invalid strings table: {}", e),
            help: Some("Expected a JSON object of string keys to string values".to_string()),
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| KitError::Parse {
            message: format!("Invalid strings table: {}", e),
            help: Some("Expected a YAML mapping of string keys to string values".to_string()),
        })
    }

    /// Add or replace the translation for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Translation for `key`, or `key` itself when there is none.
    pub fn localized<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Translator comment conventionally attached to `key`.
    pub fn comment_for(key: &str) -> String {
        format!("{}_comment", key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_falls_back() {
        let strings = Strings::default();
        assert_eq!(strings.localized("login.title"), "login.title");
    }

    #[test]
    fn test_yaml_table() {
        let strings = Strings::from_yaml("greeting: Hallo\nfarewell: Tschüss\n").unwrap();
        assert_eq!(strings.len(), 2);
        assert_eq!(strings.localized("greeting"), "Hallo");
        assert_eq!(strings.localized("farewell"), "Tschüss");
    }

    #[test]
    fn test_insert_overrides_loaded_entry() {
        let mut strings = Strings::from_yaml("title: Old\n").unwrap();
        strings.insert("title", "New");
        strings.insert("subtitle", "Sub");
        assert_eq!(strings.localized("title"), "New");
        assert_eq!(strings.localized("subtitle"), "Sub");
        assert_eq!(strings.len(), 2);
    }

    #[test]
    fn test_empty_yaml() {
        assert!(Strings::from_yaml("").unwrap().is_empty());
    }

    #[test]
    fn test_comment() {
        assert_eq!(Strings::comment_for("ok"), "ok_comment");
    }

    #[test]
    fn test_load_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fr.json");
        fs::write(&path, r#"{"ok": "D'accord"}"#).unwrap();

        let strings = Strings::load(&path).unwrap();
        assert_eq!(strings.localized("ok"), "D'accord");
    }

    #[test]
    fn test_load_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "[1, 2]").unwrap();
        assert!(Strings::load(&path).is_err());
        assert!(Strings::load(&dir.path().join("missing.yaml")).is_err());
    }
}
