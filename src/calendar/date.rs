//! # Date Arithmetic
//!
//! Leap years, month lengths and weekdays for the proleptic Gregorian calendar.
//! Self-contained: nothing here depends on a calendar library or the system clock.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

use crate::constants::MONTH_NAMES;

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays in index order (Sunday = 0).
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Index in 0..=6 with Sunday = 0.
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Full English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// The weekday after this one.
    pub const fn succ(self) -> Self {
        Self::ALL[(self as usize + 1) % 7]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true for Gregorian leap years.
pub const fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` when `month` is not in 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Display name of `month`, or `None` when it is not in 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(index).copied()
}

/// Weekday of a date.
///
/// Uses the month-offset congruence (Sakamoto's method) with floored division,
/// so consecutive dates always land on consecutive weekdays, across year
/// boundaries and for years before 1 as well.
///
/// `month` must be in 1..=12; callers validate it with [`days_in_month`] first.
pub fn day_of_week(year: i32, month: u32, day: u32) -> Weekday {
    const MONTH_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    let offset = MONTH_OFFSETS[(month as usize).saturating_sub(1) % 12];
    let y = i64::from(year) - i64::from(month < 3);
    let n = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + offset + i64::from(day);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // rem_euclid(7) is 0..7
    let index = n.rem_euclid(7) as usize;
    Weekday::ALL[index]
}
