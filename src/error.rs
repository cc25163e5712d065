//! # Errors
//!
//! Error kinds reported by the calendar core and the task file codec.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io;

use thiserror::Error;

/// Errors returned by calendar, task and storage operations.
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Memory for a year, its day tables or a task could not be reserved.
    #[error("Memory allocation failed")]
    AllocationFailure,

    /// Month outside 1..=12.
    #[error("Invalid month: {month}")]
    InvalidMonth { month: u32 },

    /// Day outside the valid range of its month.
    #[error("Invalid day for this month: {year}-{month:02}-{day:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    /// The addressed date is not present in the calendar.
    #[error("Date not found: {year}-{month:02}-{day:02}")]
    DateNotFound { year: i32, month: u32, day: u32 },

    /// The date exists but holds no task with this id.
    #[error("Task {id} not found on {year}-{month:02}-{day:02}")]
    TaskNotFound {
        year: i32,
        month: u32,
        day: u32,
        id: u32,
    },

    /// Search was called without a keyword.
    #[error("Search keyword can't be empty")]
    EmptyKeyword,

    /// Reading or writing the task file failed.
    #[error("I/O error")]
    Io(#[from] io::Error),
}

/// Convenience alias for results carrying a [`CalendarError`].
pub type CalendarResult<T> = Result<T, CalendarError>;
