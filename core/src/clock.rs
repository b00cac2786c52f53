//! Reference clock: the injected "today" and the board rotation timer.
//!
//! RULE: Nothing in the engine reads wall-clock time.
//! Every window is derived from a ReferenceClock the caller builds.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

/// A contiguous run of calendar days, `start` inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start:       NaiveDate,
    pub length_days: u32,
}

impl DateWindow {
    pub fn new(start: NaiveDate, length_days: u32) -> Self {
        Self { start, length_days }
    }

    /// Last date in the window. Equal to `start` for empty windows.
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(i64::from(self.length_days.saturating_sub(1)))
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.length_days).map(move |offset| self.start + Duration::days(i64::from(offset)))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceClock {
    pub today:          NaiveDate,
    pub week_starts_on: WeekStart,
}

impl ReferenceClock {
    pub fn new(today: NaiveDate, week_starts_on: WeekStart) -> Self {
        Self { today, week_starts_on }
    }

    /// The seven days of the week containing `today`.
    pub fn week_window(&self) -> DateWindow {
        let back = match self.week_starts_on {
            WeekStart::Monday => self.today.weekday().num_days_from_monday(),
            WeekStart::Sunday => self.today.weekday().num_days_from_sunday(),
        };
        DateWindow::new(self.today - Duration::days(i64::from(back)), 7)
    }

    /// Every day of the calendar month containing `today`.
    pub fn month_window(&self) -> DateWindow {
        let first = self.today.with_day(1).unwrap_or(self.today);
        let next_month = if first.month() == 12 {
            NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
        };
        let length = next_month
            .map(|next| (next - first).num_days() as u32)
            .unwrap_or(31);
        DateWindow::new(first, length)
    }

    /// `days` days starting today.
    pub fn rolling_window(&self, days: u32) -> DateWindow {
        DateWindow::new(self.today, days)
    }
}

/// The TV board page timer. The board shows one page at a time and
/// auto-advances every `interval_secs`; the host drives the timer and
/// calls `advance()` on each expiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardRotation {
    pub page_count:    u32,
    pub current_page:  u32,
    pub interval_secs: u64,
    pub paused:        bool,
}

impl BoardRotation {
    pub fn new(page_count: u32, interval_secs: u64) -> Self {
        Self {
            page_count: page_count.max(1),
            current_page: 0,
            interval_secs,
            paused: false,
        }
    }

    /// Move to the next page, wrapping to the first. Returns the page
    /// now showing. A paused rotation stays put.
    pub fn advance(&mut self) -> u32 {
        if !self.paused {
            // A deserialized rotation may carry page_count 0; stay on page 0.
            self.current_page = self
                .current_page
                .saturating_add(1)
                .checked_rem(self.page_count)
                .unwrap_or(0);
        }
        self.current_page
    }

    pub fn pause(&mut self)  { self.paused = true;  }
    pub fn resume(&mut self) { self.paused = false; }

    pub fn set_interval(&mut self, interval_secs: u64) {
        self.interval_secs = interval_secs;
    }
}
