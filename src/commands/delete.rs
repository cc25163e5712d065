//! # Delete Command
//!
//! Removes a task from a date. Without an id, lists the date's tasks so the
//! user can pick one; ids shift after every delete.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use super::DateArgs;
use crate::{session::Session, ui};

/// Arguments for the delete command
pub struct DeleteArgs {
    pub date: DateArgs,
    pub id: Option<u32>,
}

/// Executes the delete command.
pub fn execute(session: &mut Session, args: &DeleteArgs) -> Result<()> {
    let DateArgs { year, month, day } = args.date;
    let date = args.date.display();

    let day_node = session.calendar().day(year, month, day);

    let Some(id) = args.id else {
        match day_node {
            Some(day_node) if day_node.has_tasks() => {
                println!("Tasks for {date}:");
                println!("{}", ui::render_task_lines(day_node));
                println!(
                    "{}",
                    "Run again with the task number to delete it.".dimmed()
                );
            }
            _ => println!("No tasks for {date}."),
        }
        return Ok(());
    };

    if day_node.is_some_and(|d| !d.has_tasks()) {
        anyhow::bail!("No tasks to delete for {date}");
    }

    let removed = session.calendar_mut().delete_task(year, month, day, id)?;
    session.mark_dirty();

    ui::print_success(&format!(
        "Deleted task {id} from {date}: {}",
        removed.description()
    ));

    Ok(())
}
