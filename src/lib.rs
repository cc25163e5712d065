//! # daybook
//!
//! A plain-text calendar and task keeper for the terminal.
//!
//! Tasks live in a single text file, grouped by year, and are addressed by
//! date and a per-day number.
//!
//! ## Features
//!
//! - **Calendar Store**: Years are built on demand with every month and day
//! - **Dense Task Numbers**: Tasks are numbered 1..N per day and renumbered on delete
//! - **Search**: Case-insensitive keyword search across all dates
//! - **Plain-Text Storage**: `[YEAR] N` headers followed by `month day description` lines
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod calendar;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod session;
pub mod storage;
pub mod ui;

pub use calendar::{Calendar, Task};
pub use config::{set_home_override, Config};
pub use error::{CalendarError, CalendarResult};
pub use session::Session;
