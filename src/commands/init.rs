//! # Init Command
//!
//! Creates a new task file holding an empty calendar for a starting year.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{calendar::Calendar, config::Config, session::Session, ui};

/// Executes the init command.
pub fn execute(config: &Config, year: i32) -> Result<()> {
    let path = config.data_path();

    if path.exists() {
        anyhow::bail!("Task file already exists: {}", path.display());
    }

    let mut calendar = Calendar::new();
    calendar.find_or_add_year(year)?;

    let mut session = Session::new(path, calendar);
    session.save()?;

    ui::print_success(&format!("Calendar for {year} created and saved."));
    println!("  {} {}", "File:".dimmed(), session.path().display());

    Ok(())
}
