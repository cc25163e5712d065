//! # Logging
//!
//! Diagnostic logging to stderr through the `log` facade.
//!
//! The library only emits `log` records; the binary installs the backend once
//! per process. Log output never replaces user-facing messages on stdout.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle};

use crate::constants::DEFAULT_LOG_LEVEL;

const SUPPORTED_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Picks the effective level: `-v` flags first, then the configured level,
/// then the default.
pub fn resolve_level(verbosity: u8, configured: Option<&str>) -> Result<&'static str> {
    match verbosity {
        0 => configured.map_or(Ok(DEFAULT_LOG_LEVEL), normalize_level),
        1 => Ok("info"),
        2 => Ok("debug"),
        _ => Ok("trace"),
    }
}

fn normalize_level(level: &str) -> Result<&'static str> {
    let wanted = level.trim().to_ascii_lowercase();
    SUPPORTED_LEVELS
        .iter()
        .find(|l| **l == wanted)
        .copied()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Unsupported log level '{level}' (expected one of: {})",
                SUPPORTED_LEVELS.join(", ")
            )
        })
}

/// Starts the stderr logger. Keep the returned handle alive for the
/// lifetime of the process.
pub fn init(verbosity: u8, configured: Option<&str>) -> Result<LoggerHandle> {
    let level = resolve_level(verbosity, configured)?;

    Logger::try_with_str(level)
        .with_context(|| format!("Invalid log specification '{level}'"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .context("Failed to start logger")
}
