//! # Search
//!
//! Case-insensitive keyword search across every task in the calendar.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::Calendar;
use crate::error::{CalendarError, CalendarResult};

/// A task whose description matched a search keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub task_id: u32,
    pub description: &'a str,
}

/// ASCII case-insensitive substring test.
///
/// An empty `key` matches everything, including empty `text`. Only `A-Z`
/// and `a-z` are folded; other bytes must match exactly.
pub fn contains_ignore_case(text: &str, key: &str) -> bool {
    if key.is_empty() {
        return true;
    }

    let key = key.as_bytes();
    text.as_bytes()
        .windows(key.len())
        .any(|window| window.eq_ignore_ascii_case(key))
}

impl Calendar {
    /// Lazily yields every task whose description contains `keyword`.
    ///
    /// Order: years ascending, months 1..=12, days ascending, tasks in list
    /// order. Each call starts a fresh traversal. An empty keyword is
    /// rejected instead of matching everything.
    pub fn search_tasks<'a>(
        &'a self,
        keyword: &'a str,
    ) -> CalendarResult<impl Iterator<Item = SearchHit<'a>> + 'a> {
        if keyword.is_empty() {
            return Err(CalendarError::EmptyKeyword);
        }

        Ok(self.years().flat_map(move |year| {
            year.entries()
                .filter(move |(_, _, task)| contains_ignore_case(task.description(), keyword))
                .map(move |(month, day, task)| SearchHit {
                    year: year.number(),
                    month: month.number(),
                    day: day.number(),
                    task_id: task.id(),
                    description: task.description(),
                })
        }))
    }
}
