//! # Commands
//!
//! CLI command implementations for daybook.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod add;
pub mod cal;
pub mod completions;
pub mod config;
pub mod delete;
pub mod init;
pub mod list;
pub mod search;
pub mod shell;
pub mod update;

use anyhow::Result;

pub use self::{
    add::{execute as add, AddArgs},
    cal::{execute as cal, CalArgs},
    completions::execute as completions,
    config::{execute as config, ConfigArgs},
    delete::{execute as delete, DeleteArgs},
    init::execute as init,
    list::{day as show, month, today, year},
    search::{execute as search, SearchArgs},
    shell::execute as shell,
    update::{execute as update, UpdateArgs},
};

/// A calendar date as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateArgs {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateArgs {
    /// `YYYY-MM-DD`
    pub fn display(&self) -> String {
        crate::ui::format_date(self.year, self.month, self.day)
    }
}

/// Joins the words of a description given as separate arguments.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}

/// Task descriptions are stored one per line in the task file.
pub fn ensure_single_line(description: &str) -> Result<()> {
    if description.contains(['\n', '\r']) {
        anyhow::bail!("Task descriptions must fit on a single line");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_words() {
        let words = vec!["Dinner".to_string(), "at".to_string(), "6".to_string()];
        assert_eq!(join_words(&words), "Dinner at 6");
        assert_eq!(join_words(&[]), "");
    }

    #[test]
    fn test_ensure_single_line() {
        assert!(ensure_single_line("one line").is_ok());
        assert!(ensure_single_line("two\nlines").is_err());
        assert!(ensure_single_line("carriage\rreturn").is_err());
    }
}
