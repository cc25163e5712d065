//! # Config Command
//!
//! Shows the effective configuration and optionally writes a default
//! global config file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{
    config::{Config, GlobalConfig},
    constants::DEFAULT_LOG_LEVEL,
    ui,
};

/// Arguments for the config command
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigArgs {
    /// Create ~/.config/daybook/config with commented defaults
    pub init: bool,
}

/// Executes the config command.
pub fn execute(config: &Config, args: ConfigArgs) -> Result<()> {
    let path = GlobalConfig::path();

    if args.init {
        if GlobalConfig::create_default_if_missing()? {
            ui::print_success("Created global config.");
        } else {
            println!("{}", "Global config already exists.".dimmed());
        }
    }

    let validation = GlobalConfig::validate()?;
    if validation.has_issues() {
        let warnings: Vec<String> = validation
            .invalid
            .iter()
            .map(|field| format!("Unknown config field '{field}' is ignored"))
            .collect();
        ui::print_warnings(&warnings);
    }

    let config_line = path
        .filter(|p| p.exists())
        .map_or_else(|| "(none, using defaults)".to_string(), |p| p.display().to_string());

    println!("{} {config_line}", "config:".dimmed());
    println!("{} {}", "data_file:".dimmed(), config.data_path().display());
    println!(
        "{} {}",
        "log_level:".dimmed(),
        config.log_level().unwrap_or(DEFAULT_LOG_LEVEL)
    );

    Ok(())
}
