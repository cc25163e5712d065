//! # Cal Command
//!
//! Draws month grids marking the days that have tasks.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use super::list::today_date;
use crate::{constants::UI_GRID_LEGEND, session::Session, ui};

/// Arguments for the cal command
#[derive(Debug, Clone, Copy, Default)]
pub struct CalArgs {
    /// Defaults to the current year
    pub year: Option<i32>,
    /// Whole year when absent (and a year was given)
    pub month: Option<u32>,
}

/// Executes the cal command.
///
/// Displaying a year builds it in memory; the session is not marked dirty,
/// so nothing is written for a pure display.
pub fn execute(session: &mut Session, args: &CalArgs) -> Result<()> {
    let (year, months): (i32, Vec<u32>) = match (args.year, args.month) {
        (None, _) => {
            let today = today_date();
            (today.year, vec![today.month])
        }
        (Some(year), Some(month)) => (year, vec![month]),
        (Some(year), None) => {
            println!("{}", ui::render_year_heading(year));
            println!();
            (year, (1..=12).collect())
        }
    };

    for month in months {
        let grid = session.calendar_mut().month_grid(year, month)?;
        println!("{}", ui::render_month_grid(&grid));
        println!();
    }

    println!("{UI_GRID_LEGEND}");

    Ok(())
}
