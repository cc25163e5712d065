//! # Configuration
//!
//! Effective settings: global config file merged with command-line overrides.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use std::path::PathBuf;

use anyhow::Result;

pub use self::global::{set_home_override, ConfigValidation, GlobalConfig};

/// Merged configuration with command-line flags overriding the global file
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,

    /// Task file given with `--file`
    pub file_override: Option<PathBuf>,
}

impl Config {
    /// Loads the global config and applies the `--file` override
    pub fn load(file_override: Option<PathBuf>) -> Result<Self> {
        let global = GlobalConfig::load()?;
        Ok(Self {
            global,
            file_override,
        })
    }

    /// Task file path: `--file` > `data_file` in config > `tasks.txt`
    pub fn data_path(&self) -> PathBuf {
        self.file_override
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.global.data_file()))
    }

    /// Configured log level, if any
    pub fn log_level(&self) -> Option<&str> {
        self.global.log_level.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_path_precedence() {
        let mut config = Config::default();
        assert_eq!(config.data_path(), PathBuf::from("tasks.txt"));

        config.global.data_file = Some("from-config.txt".to_string());
        assert_eq!(config.data_path(), PathBuf::from("from-config.txt"));

        config.file_override = Some(PathBuf::from("from-flag.txt"));
        assert_eq!(config.data_path(), PathBuf::from("from-flag.txt"));
    }
}
