//! Shared primitive types used across the availability engine.

use chrono::{Datelike, NaiveDate};

/// A stable, unique identifier for a worker record.
pub type WorkerId = String;

/// A region/state tag used for board grouping and filtering.
pub type Region = String;

/// Day of week in the 0 = Sunday … 6 = Saturday convention used by
/// schedule rows.
pub type DayOfWeek = u8;

pub const DAYS_PER_WEEK: usize = 7;

/// Resolve the schedule day-of-week slot for a calendar date.
pub fn day_of_week(date: NaiveDate) -> DayOfWeek {
    date.weekday().num_days_from_sunday() as DayOfWeek
}
