//! # Task Registry
//!
//! Per-day task operations. Within a day, task ids always form the dense
//! sequence 1..=count in list order; deletions renumber the survivors.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use log::trace;

use super::{days_in_month, Calendar, Day, Task};
use crate::error::{CalendarError, CalendarResult};

impl Day {
    /// Tasks as `(id, description)` pairs in list order.
    pub fn list_tasks(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.tasks.iter().map(|t| (t.id, t.description.as_str()))
    }

    /// Looks up a task by id.
    pub fn task(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Appends a task and returns its id (highest existing id + 1, or 1).
    fn push_task(&mut self, description: &str) -> CalendarResult<u32> {
        self.tasks
            .try_reserve(1)
            .map_err(|_| CalendarError::AllocationFailure)?;

        let id = self.tasks.iter().map(Task::id).max().unwrap_or(0) + 1;
        self.tasks.push(Task {
            id,
            description: description.to_owned(),
        });
        Ok(id)
    }

    /// Removes a task by id and renumbers the remaining ones.
    fn remove_task(&mut self, id: u32) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        let removed = self.tasks.remove(index);
        self.renumber();
        Some(removed)
    }

    fn renumber(&mut self) {
        for (task, id) in self.tasks.iter_mut().zip(1..) {
            task.id = id;
        }
    }
}

impl Calendar {
    /// Appends a task to a date and returns the id it was given.
    ///
    /// The year is created first, so an out-of-range month or day still leaves
    /// the (empty) year behind. No existing task is renumbered.
    ///
    /// Produces no output; callers decide whether to notify.
    pub fn add_task(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        description: &str,
    ) -> CalendarResult<u32> {
        let year_node = self.find_or_add_year(year)?;

        let month_node = year_node
            .month_mut(month)
            .ok_or(CalendarError::InvalidMonth { month })?;

        let day_node = month_node
            .day_mut(day)
            .ok_or(CalendarError::InvalidDay { year, month, day })?;

        let id = day_node.push_task(description)?;
        trace!("added task {id} on {year}-{month:02}-{day:02}");
        Ok(id)
    }

    /// Replaces the description of an existing task, keeping its id and position.
    ///
    /// Never creates the year.
    pub fn update_task(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        id: u32,
        description: &str,
    ) -> CalendarResult<()> {
        let day_node = self
            .day_mut(year, month, day)
            .ok_or(CalendarError::DateNotFound { year, month, day })?;

        let task = day_node
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(CalendarError::TaskNotFound {
                year,
                month,
                day,
                id,
            })?;

        description.clone_into(&mut task.description);
        trace!("updated task {id} on {year}-{month:02}-{day:02}");
        Ok(())
    }

    /// Removes a task and renumbers the rest of its day to 1..=count.
    ///
    /// Returns the removed task (with the id it had before removal). Never
    /// creates the year.
    pub fn delete_task(&mut self, year: i32, month: u32, day: u32, id: u32) -> CalendarResult<Task> {
        let day_node = self
            .day_mut(year, month, day)
            .ok_or(CalendarError::DateNotFound { year, month, day })?;

        let removed = day_node
            .remove_task(id)
            .ok_or(CalendarError::TaskNotFound {
                year,
                month,
                day,
                id,
            })?;

        trace!("deleted task {id} on {year}-{month:02}-{day:02}");
        Ok(removed)
    }

    /// Tasks of one date; empty when the date does not resolve.
    pub fn list_tasks(&self, year: i32, month: u32, day: u32) -> Vec<(u32, &str)> {
        self.day(year, month, day)
            .map(|d| d.list_tasks().collect())
            .unwrap_or_default()
    }

    /// Whether `day` is a valid day of `month` in `year`.
    pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
        days_in_month(year, month).is_some_and(|len| (1..=len).contains(&day))
    }
}
