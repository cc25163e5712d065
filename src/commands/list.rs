//! # List Commands
//!
//! Read-only task listings for a day, a month or a whole year.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use chrono::{Datelike, Local};

use super::DateArgs;
use crate::{calendar::month_name, error::CalendarError, session::Session, ui};

/// Prints the tasks of one date.
pub fn day(session: &Session, args: &DateArgs) -> Result<()> {
    let DateArgs { year, month, day } = *args;

    let found = session
        .calendar()
        .year(year)
        .and_then(|y| y.month(month))
        .and_then(|m| m.day(day).map(|d| (m, d)));

    match found {
        Some((month_node, day_node)) => println!("{}", ui::render_day(year, month_node, day_node)),
        None => println!("No tasks for {}.", args.display()),
    }

    Ok(())
}

/// Prints the tasks of the current local date.
pub fn today(session: &Session) -> Result<()> {
    day(session, &today_date())
}

/// Prints every day with tasks in a month.
pub fn month(session: &Session, year: i32, month: u32) -> Result<()> {
    if month_name(month).is_none() {
        return Err(CalendarError::InvalidMonth { month }.into());
    }

    let found = session
        .calendar()
        .year(year)
        .and_then(|y| y.month(month).map(|m| (y, m)));

    match found {
        Some((year_node, month_node)) => {
            println!("{}", ui::render_month_tasks(year_node, month_node));
        }
        None => println!("No data for year {year}."),
    }

    Ok(())
}

/// Prints every day with tasks in a year.
pub fn year(session: &Session, year: i32) -> Result<()> {
    match session.calendar().year(year) {
        Some(year_node) => println!("{}", ui::render_year_tasks(year_node)),
        None => println!("No data for year {year}."),
    }

    Ok(())
}

/// The current local date.
pub fn today_date() -> DateArgs {
    let now = Local::now().date_naive();
    DateArgs {
        year: now.year(),
        month: now.month(),
        day: now.day(),
    }
}
