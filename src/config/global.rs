//! # Global Configuration
//!
//! Handles the user configuration stored at `~/.config/daybook/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DATA_FILE, DEFAULT_LOG_LEVEL, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME,
};

/// Valid field names in the global config file.
/// Used for validation to detect unknown/invalid fields.
const VALID_FIELDS: &[&str] = &["data_file", "log_level"];

/// Result of validating a config file.
#[derive(Debug, Default)]
pub struct ConfigValidation {
    /// Fields that are not recognized and will be ignored
    pub invalid: Vec<String>,
}

impl ConfigValidation {
    /// Returns true if the file contains anything worth reporting.
    pub fn has_issues(&self) -> bool {
        !self.invalid.is_empty()
    }
}

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/daybook/config
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Task file location (default: "tasks.txt" in the current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,

    /// Log level: off, error, warn, info, debug or trace (default: "warn")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/daybook/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(GLOBAL_CONFIG_FILENAME))
    }

    /// Returns the path to the global config directory (~/.config/daybook)
    pub fn dir() -> Option<PathBuf> {
        get_home_override()
            .or_else(dirs::home_dir)
            .map(|home| home.join(".config").join(GLOBAL_CONFIG_DIR))
    }

    /// Loads the global config. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }

    /// Writes a commented default config. Returns true if created, false if
    /// one already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, Self::default_content())
            .with_context(|| format!("Failed to write global config: {}", path.display()))?;
        Ok(true)
    }

    fn default_content() -> String {
        format!(
            r#"# daybook Global Configuration
# Location: ~/.config/daybook/config

# Task file used when --file is not given.
# Relative paths are resolved against the current directory.
# Default: "{DEFAULT_DATA_FILE}"
# data_file = "/home/me/notes/tasks.txt"

# Log level written to stderr: off, error, warn, info, debug or trace.
# -v / -vv / -vvv on the command line take precedence.
# Default: "{DEFAULT_LOG_LEVEL}"
# log_level = "info"
"#
        )
    }

    /// Effective task file name
    pub fn data_file(&self) -> &str {
        self.data_file.as_deref().unwrap_or(DEFAULT_DATA_FILE)
    }

    /// Validates the global config file and returns any issues found.
    ///
    /// Parses the raw TOML to detect unknown fields, which serde would
    /// otherwise ignore silently.
    pub fn validate() -> Result<ConfigValidation> {
        let mut validation = ConfigValidation::default();

        let Some(path) = Self::path().filter(|p| p.exists()) else {
            return Ok(validation);
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))?;

        validation.invalid = table
            .keys()
            .filter(|key| !VALID_FIELDS.contains(&key.as_str()))
            .cloned()
            .collect();

        Ok(validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GlobalConfig::default();
        assert_eq!(config.data_file(), "tasks.txt");
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
data_file = "/tmp/cal.txt"
log_level = "debug"
"#;
        let config: GlobalConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.data_file(), "/tmp/cal.txt");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_default_content_parses_to_defaults() {
        let config: GlobalConfig = toml::from_str(&GlobalConfig::default_content()).unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn test_home_override() {
        use tempfile::tempdir;

        let temp = tempdir().unwrap();
        let expected_path = temp.path().join(".config").join("daybook").join("config");

        set_home_override(Some(temp.path().to_path_buf()));
        assert_eq!(GlobalConfig::path().unwrap(), expected_path);
        assert_eq!(GlobalConfig::load().unwrap(), GlobalConfig::default());

        assert!(GlobalConfig::create_default_if_missing().unwrap());
        assert!(!GlobalConfig::create_default_if_missing().unwrap());
        assert!(expected_path.exists());

        fs::write(&expected_path, "data_file = \"x.txt\"\ncolour = true\n").unwrap();
        let validation = GlobalConfig::validate().unwrap();
        assert!(validation.has_issues());
        assert_eq!(validation.invalid, vec!["colour".to_string()]);

        set_home_override(None);
        let path = GlobalConfig::path();
        assert_ne!(path, Some(expected_path));
    }
}
