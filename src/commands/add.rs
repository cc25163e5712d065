//! # Add Command
//!
//! Appends a task to a date, creating the year if needed.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use super::{ensure_single_line, DateArgs};
use crate::{session::Session, ui};

/// Arguments for the add command
pub struct AddArgs {
    pub date: DateArgs,
    pub description: String,
}

/// Executes the add command.
pub fn execute(session: &mut Session, args: &AddArgs) -> Result<()> {
    ensure_single_line(&args.description)?;

    let DateArgs { year, month, day } = args.date;
    let id = session
        .calendar_mut()
        .add_task(year, month, day, &args.description)?;
    session.mark_dirty();

    ui::print_success(&format!("Task {id} added for {}.", args.date.display()));

    Ok(())
}
