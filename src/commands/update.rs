//! # Update Command
//!
//! Replaces the description of an existing task.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use super::{ensure_single_line, DateArgs};
use crate::{session::Session, ui};

/// Arguments for the update command
pub struct UpdateArgs {
    pub date: DateArgs,
    pub id: u32,
    pub description: String,
}

/// Executes the update command.
pub fn execute(session: &mut Session, args: &UpdateArgs) -> Result<()> {
    ensure_single_line(&args.description)?;

    let DateArgs { year, month, day } = args.date;

    let unchanged = session
        .calendar()
        .day(year, month, day)
        .and_then(|d| d.task(args.id))
        .is_some_and(|t| t.description() == args.description);
    if unchanged {
        println!("{}", "No changes to apply.".dimmed());
        return Ok(());
    }

    session
        .calendar_mut()
        .update_task(year, month, day, args.id, &args.description)?;
    session.mark_dirty();

    ui::print_success(&format!(
        "Updated task {} on {}.",
        args.id,
        args.date.display()
    ));

    Ok(())
}
