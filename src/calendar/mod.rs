//! # Calendar
//!
//! The in-memory calendar store: years own twelve months, months own their
//! days, days own an ordered task list.
//!
//! Years are built lazily with their whole month and day skeleton the first
//! time they are addressed, and are never removed individually.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod date;
pub mod search;
pub mod tasks;

use std::collections::{btree_map::Entry, BTreeMap};

use log::debug;

pub use self::{
    date::{day_of_week, days_in_month, is_leap, month_name, Weekday},
    search::{contains_ignore_case, SearchHit},
};
use crate::{
    constants::MONTHS_PER_YEAR,
    error::{CalendarError, CalendarResult},
};

// =============================================================================
// Nodes
// =============================================================================

/// A task stored on a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: u32,
    description: String,
}

impl Task {
    /// Position-derived id, dense within its day (1..=count).
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Task description, verbatim.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// One calendar date and its tasks.
#[derive(Debug, Clone)]
pub struct Day {
    number: u32,
    weekday: Weekday,
    tasks: Vec<Task>,
}

impl Day {
    /// Day of the month, starting at 1.
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Weekday, computed when the year was built.
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Whether the day holds at least one task.
    pub fn has_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }
}

/// A month of a specific year.
#[derive(Debug, Clone)]
pub struct Month {
    number: u32,
    name: &'static str,
    days: Vec<Day>,
}

impl Month {
    /// Month number, 1..=12.
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// English display name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Days in ascending order.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Number of days, fixed when the year was built.
    pub fn len(&self) -> u32 {
        // At most 31 days.
        u32::try_from(self.days.len()).unwrap_or(u32::MAX)
    }

    /// Always false for a built month; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Looks up a day by its 1-based number.
    pub fn day(&self, day: u32) -> Option<&Day> {
        self.days.get(usize::try_from(day.checked_sub(1)?).ok()?)
    }

    fn day_mut(&mut self, day: u32) -> Option<&mut Day> {
        self.days.get_mut(usize::try_from(day.checked_sub(1)?).ok()?)
    }
}

/// A year with its twelve months.
#[derive(Debug, Clone)]
pub struct Year {
    number: i32,
    months: Vec<Month>,
}

impl Year {
    /// Builds the full month and day skeleton for `number`.
    ///
    /// Every table is reserved up front; if any reservation fails, everything
    /// built so far is dropped and `AllocationFailure` is returned.
    fn build(number: i32) -> CalendarResult<Self> {
        let mut months = Vec::new();
        months
            .try_reserve_exact(MONTHS_PER_YEAR as usize)
            .map_err(|_| CalendarError::AllocationFailure)?;

        for month in 1..=MONTHS_PER_YEAR {
            let len = days_in_month(number, month).ok_or(CalendarError::InvalidMonth { month })?;
            let name = month_name(month).ok_or(CalendarError::InvalidMonth { month })?;

            let mut days = Vec::new();
            days.try_reserve_exact(len as usize)
                .map_err(|_| CalendarError::AllocationFailure)?;
            days.extend((1..=len).map(|day| Day {
                number: day,
                weekday: day_of_week(number, month, day),
                tasks: Vec::new(),
            }));

            months.push(Month {
                number: month,
                name,
                days,
            });
        }

        Ok(Self { number, months })
    }

    /// The year number.
    pub const fn number(&self) -> i32 {
        self.number
    }

    /// All twelve months, January first.
    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// Looks up a month by its 1-based number.
    pub fn month(&self, month: u32) -> Option<&Month> {
        self.months.get(usize::try_from(month.checked_sub(1)?).ok()?)
    }

    fn month_mut(&mut self, month: u32) -> Option<&mut Month> {
        self.months
            .get_mut(usize::try_from(month.checked_sub(1)?).ok()?)
    }

    /// Every task of the year: months 1..=12, days ascending, tasks in list order.
    pub fn entries(&self) -> impl Iterator<Item = (&Month, &Day, &Task)> + '_ {
        self.months.iter().flat_map(|month| {
            month
                .days
                .iter()
                .flat_map(move |day| day.tasks.iter().map(move |task| (month, day, task)))
        })
    }

    /// Total number of tasks in the year.
    pub fn task_count(&self) -> usize {
        self.entries().count()
    }
}

// =============================================================================
// Month Grid
// =============================================================================

/// What a renderer needs to draw one month, without touching the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub name: &'static str,
    pub days_in_month: u32,
    pub first_weekday: Weekday,
    /// Indexed by day number minus one.
    pub has_tasks: Vec<bool>,
}

impl MonthGrid {
    /// Whether `day` (1-based) has tasks; false for days outside the month.
    pub fn day_has_tasks(&self, day: u32) -> bool {
        day.checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| self.has_tasks.get(i).copied())
            .unwrap_or(false)
    }
}

// =============================================================================
// Store
// =============================================================================

/// The whole calendar: at most one [`Year`] per year number.
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    years: BTreeMap<i32, Year>,
}

impl Calendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the year, building it first if it is not present yet.
    pub fn find_or_add_year(&mut self, year: i32) -> CalendarResult<&mut Year> {
        match self.years.entry(year) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let built = Year::build(year)?;
                debug!("created calendar year {year}");
                Ok(entry.insert(built))
            }
        }
    }

    /// Looks up a year without creating it.
    pub fn year(&self, year: i32) -> Option<&Year> {
        self.years.get(&year)
    }

    /// Whether the year has been built.
    pub fn contains_year(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }

    /// All years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = &Year> + '_ {
        self.years.values()
    }

    /// Number of years in the store.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Whether no year has been built yet.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Read-only day lookup. Never creates state; `None` when the year is
    /// absent or the month/day is out of range for that year.
    pub fn day(&self, year: i32, month: u32, day: u32) -> Option<&Day> {
        self.years.get(&year)?.month(month)?.day(day)
    }

    pub(crate) fn day_mut(&mut self, year: i32, month: u32, day: u32) -> Option<&mut Day> {
        self.years.get_mut(&year)?.month_mut(month)?.day_mut(day)
    }

    /// Grid metadata for one month. Builds the year if needed.
    pub fn month_grid(&mut self, year: i32, month: u32) -> CalendarResult<MonthGrid> {
        let node = self
            .find_or_add_year(year)?
            .month(month)
            .ok_or(CalendarError::InvalidMonth { month })?;

        let first_weekday = node
            .days
            .first()
            .map_or_else(|| day_of_week(year, month, 1), Day::weekday);

        Ok(MonthGrid {
            year,
            month,
            name: node.name,
            days_in_month: node.len(),
            first_weekday,
            has_tasks: node.days.iter().map(Day::has_tasks).collect(),
        })
    }
}
