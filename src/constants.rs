//! # Constants
//!
//! Centralized constants for magic values used throughout daybook.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Calendar Tables
// =============================================================================

/// Month display names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Number of months in a year.
pub const MONTHS_PER_YEAR: u32 = 12;

// =============================================================================
// Task File Format
// =============================================================================

/// Marker that starts a year section in the task file.
pub const YEAR_HEADER: &str = "[YEAR]";

/// Default task file name (relative to the current directory).
pub const DEFAULT_DATA_FILE: &str = "tasks.txt";

/// Suffix for the temporary file written before an atomic rename.
pub const TEMP_FILE_SUFFIX: &str = ".tmp";

// =============================================================================
// UI Display
// =============================================================================

/// Width of a rendered month grid (7 cells of 3 chars plus 8 borders).
pub const UI_GRID_WIDTH: usize = 29;

/// Horizontal rule drawn above the weekday header of a month grid.
pub const UI_GRID_RULE: &str = "_____________________________";

/// Weekday header row of a month grid.
pub const UI_GRID_HEADER: &str = "|Su |Mo |Tu |We |Th |Fr |Sa |";

/// Separator row drawn below each week of a month grid.
pub const UI_GRID_SEPARATOR: &str = "|___|___|___|___|___|___|___|";

/// Legend printed after a month grid.
pub const UI_GRID_LEGEND: &str = "* = day has one or more tasks.";

// =============================================================================
// Configuration
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "daybook";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

/// Log level used when neither flags nor config pick one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
