//! # UI Utilities
//!
//! Console rendering for calendars, task listings and search results, plus
//! the shared success/warning message helpers.
//!
//! Render functions are pure and return the text without a trailing newline;
//! commands decide where it goes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

use crate::{
    calendar::{Day, Month, MonthGrid, SearchHit, Year},
    constants::{UI_GRID_HEADER, UI_GRID_RULE, UI_GRID_SEPARATOR, UI_GRID_WIDTH},
};

// =============================================================================
// Messages
// =============================================================================

/// Prints a success message.
///
/// Format: `✓ {message}`
pub fn print_success(message: &str) {
    println!("{} {message}", "✓".green());
}

/// Prints warnings with yellow prefix.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }
}

// =============================================================================
// Formatting Helpers
// =============================================================================

/// `YYYY-MM-DD`
pub fn format_date(year: i32, month: u32, day: u32) -> String {
    format!("{year}-{month:02}-{day:02}")
}

/// Left-pads `text` so it sits centered in `width` columns.
pub fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width()) / 2;
    format!("{}{text}", " ".repeat(pad))
}

// =============================================================================
// Calendar Grids
// =============================================================================

/// Draws one month as a 7-column grid starting on Sunday; days with tasks
/// are marked with `*`.
pub fn render_month_grid(grid: &MonthGrid) -> String {
    let mut lines = vec![
        center(&format!("{} {}", grid.name, grid.year), UI_GRID_WIDTH),
        UI_GRID_RULE.to_string(),
        UI_GRID_HEADER.to_string(),
        UI_GRID_SEPARATOR.to_string(),
    ];

    let lead = grid.first_weekday.index() as usize;
    let cells: Vec<String> = std::iter::repeat(String::new())
        .take(lead)
        .chain((1..=grid.days_in_month).map(|day| {
            let mark = if grid.day_has_tasks(day) { "*" } else { "" };
            format!("{day}{mark}")
        }))
        .collect();

    for week in cells.chunks(7) {
        let row: String = (0..7)
            .map(|i| format!("{:<3}|", week.get(i).map_or("", String::as_str)))
            .collect();
        lines.push(format!("|{row}"));
        lines.push(UI_GRID_SEPARATOR.to_string());
    }

    lines.join("\n")
}

/// Heading printed above the twelve grids of a year.
pub fn render_year_heading(year: i32) -> String {
    center(&format!("===Calendar of {year}==="), UI_GRID_WIDTH)
}

// =============================================================================
// Task Listings
// =============================================================================

/// ` 1. description` lines for a day.
pub fn render_task_lines(day: &Day) -> String {
    day.list_tasks()
        .map(|(id, desc)| format!(" {id}. {desc}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tasks of a single date with a descriptive heading.
pub fn render_day(year: i32, month: &Month, day: &Day) -> String {
    if !day.has_tasks() {
        return format!(
            "No tasks for {}.",
            format_date(year, month.number(), day.number())
        );
    }

    format!(
        "Tasks for {}, {} {}, {year}:\n{}",
        day.weekday(),
        month.name(),
        day.number(),
        render_task_lines(day)
    )
}

/// `25 (Thursday): first, second`
fn render_day_summary(day: &Day) -> String {
    let tasks: Vec<&str> = day.list_tasks().map(|(_, desc)| desc).collect();
    format!("{:>2} ({}): {}", day.number(), day.weekday(), tasks.join(", "))
}

fn day_summaries(month: &Month) -> Vec<String> {
    month
        .days()
        .iter()
        .filter(|day| day.has_tasks())
        .map(render_day_summary)
        .collect()
}

/// Every day with tasks in one month, one line per day.
pub fn render_month_tasks(year: &Year, month: &Month) -> String {
    let mut lines = vec![format!("=== {} {} ===", month.name(), year.number())];

    let summaries = day_summaries(month);
    if summaries.is_empty() {
        lines.push(format!(
            "No tasks stored for {} {}.",
            month.name(),
            year.number()
        ));
    } else {
        lines.extend(summaries);
    }

    lines.join("\n")
}

/// Every day with tasks in a year, grouped under month headers.
pub fn render_year_tasks(year: &Year) -> String {
    let mut lines = vec![format!("=== Tasks for {} ===", year.number())];
    let mut found_any = false;

    for month in year.months() {
        let summaries = day_summaries(month);
        if summaries.is_empty() {
            continue;
        }
        found_any = true;
        lines.push(String::new());
        lines.push(format!("-- {} --", month.name()));
        lines.extend(summaries);
    }

    if !found_any {
        lines.push(format!("No tasks stored for {}.", year.number()));
    }

    lines.join("\n")
}

// =============================================================================
// Search Results
// =============================================================================

/// ` - 2025-12-25 (Task 1): Christmas Day`
pub fn render_search_hit(hit: &SearchHit<'_>) -> String {
    format!(
        " - {} (Task {}): {}",
        format_date(hit.year, hit.month, hit.day),
        hit.task_id,
        hit.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(2025, 3, 7), "2025-03-07");
        assert_eq!(format_date(2025, 12, 25), "2025-12-25");
    }

    #[test]
    fn test_center() {
        assert_eq!(center("December 2025", 29), "        December 2025");
        assert_eq!(center("much too long for the width", 5), "much too long for the width");
    }

    #[test]
    fn test_month_grid_december_2025() {
        let mut cal = Calendar::new();
        cal.add_task(2025, 12, 25, "Christmas Day").unwrap();
        cal.add_task(2025, 12, 1, "Start").unwrap();
        let grid = cal.month_grid(2025, 12).unwrap();

        let expected = "        December 2025
_____________________________
|Su |Mo |Tu |We |Th |Fr |Sa |
|___|___|___|___|___|___|___|
|   |1* |2  |3  |4  |5  |6  |
|___|___|___|___|___|___|___|
|7  |8  |9  |10 |11 |12 |13 |
|___|___|___|___|___|___|___|
|14 |15 |16 |17 |18 |19 |20 |
|___|___|___|___|___|___|___|
|21 |22 |23 |24 |25*|26 |27 |
|___|___|___|___|___|___|___|
|28 |29 |30 |31 |   |   |   |
|___|___|___|___|___|___|___|";
        assert_eq!(render_month_grid(&grid), expected);
    }

    #[test]
    fn test_month_grid_starting_sunday_fits_four_rows() {
        let mut cal = Calendar::new();
        // February 2015 starts on a Sunday and has 28 days.
        let grid = cal.month_grid(2015, 2).unwrap();
        let rendered = render_month_grid(&grid);

        let week_rows = rendered
            .lines()
            .filter(|l| l.starts_with('|') && !l.contains("___") && !l.contains("Su"))
            .count();
        assert_eq!(week_rows, 4);
        assert!(rendered.contains("|1  |2  |3  |4  |5  |6  |7  |"));
    }

    #[test]
    fn test_render_day() {
        let mut cal = Calendar::new();
        cal.add_task(2025, 12, 25, "Christmas Day").unwrap();
        cal.add_task(2025, 12, 25, "Dinner at 6").unwrap();

        let year = cal.year(2025).unwrap();
        let month = year.month(12).unwrap();
        assert_eq!(
            render_day(2025, month, month.day(25).unwrap()),
            "Tasks for Thursday, December 25, 2025:\n 1. Christmas Day\n 2. Dinner at 6"
        );
        assert_eq!(
            render_day(2025, month, month.day(24).unwrap()),
            "No tasks for 2025-12-24."
        );
    }

    #[test]
    fn test_render_month_tasks() {
        let mut cal = Calendar::new();
        cal.add_task(2025, 12, 25, "Christmas Day").unwrap();
        cal.add_task(2025, 12, 25, "Dinner at 6").unwrap();
        cal.add_task(2025, 12, 3, "Dentist").unwrap();

        let year = cal.year(2025).unwrap();
        assert_eq!(
            render_month_tasks(year, year.month(12).unwrap()),
            "=== December 2025 ===\n 3 (Wednesday): Dentist\n25 (Thursday): Christmas Day, Dinner at 6"
        );
        assert_eq!(
            render_month_tasks(year, year.month(1).unwrap()),
            "=== January 2025 ===\nNo tasks stored for January 2025."
        );
    }

    #[test]
    fn test_render_year_tasks() {
        let mut cal = Calendar::new();
        cal.add_task(2025, 12, 25, "Christmas Day").unwrap();
        cal.add_task(2025, 3, 2, "Dentist").unwrap();

        assert_eq!(
            render_year_tasks(cal.year(2025).unwrap()),
            "=== Tasks for 2025 ===\n\n-- March --\n 2 (Sunday): Dentist\n\n-- December --\n25 (Thursday): Christmas Day"
        );

        cal.find_or_add_year(2026).unwrap();
        assert_eq!(
            render_year_tasks(cal.year(2026).unwrap()),
            "=== Tasks for 2026 ===\nNo tasks stored for 2026."
        );
    }

    #[test]
    fn test_render_search_hit() {
        let hit = SearchHit {
            year: 2026,
            month: 1,
            day: 1,
            task_id: 1,
            description: "New Year's Day",
        };
        assert_eq!(
            render_search_hit(&hit),
            " - 2026-01-01 (Task 1): New Year's Day"
        );
    }
}
