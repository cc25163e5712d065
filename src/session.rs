//! # Session
//!
//! The loaded calendar together with the file it came from. One-shot
//! commands open a session, run once and save; the shell keeps one session
//! open for its whole lifetime.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{calendar::Calendar, config::Config, storage};

/// A calendar bound to its task file
#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    calendar: Calendar,
    dirty: bool,
}

impl Session {
    /// Loads the task file selected by `config` (missing file = empty calendar)
    pub fn open(config: &Config) -> Result<Self> {
        let path = config.data_path();
        let calendar = storage::load(&path)
            .with_context(|| format!("Failed to load tasks: {}", path.display()))?;

        Ok(Self::new(path, calendar))
    }

    /// Wraps an already-built calendar
    pub const fn new(path: PathBuf, calendar: Calendar) -> Self {
        Self {
            path,
            calendar,
            dirty: false,
        }
    }

    /// Task file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The calendar
    pub const fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Mutable calendar access. Call [`Session::mark_dirty`] after a change
    /// that should be persisted.
    pub fn calendar_mut(&mut self) -> &mut Calendar {
        &mut self.calendar
    }

    /// Flags the calendar as changed
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether there are unsaved changes
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes the calendar to its file unconditionally
    pub fn save(&mut self) -> Result<()> {
        storage::save(&self.path, &self.calendar)
            .with_context(|| format!("Failed to save tasks: {}", self.path.display()))?;
        self.dirty = false;
        Ok(())
    }

    /// Writes the calendar only if something changed
    pub fn save_if_dirty(&mut self) -> Result<()> {
        if self.dirty {
            self.save()?;
        }
        Ok(())
    }
}
