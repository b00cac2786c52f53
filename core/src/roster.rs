//! Plain roster records consumed by the engine.
//!
//! These arrive from the surrounding application as an immutable
//! snapshot per computation call. Nothing here is persisted by the engine.

use crate::types::{DayOfWeek, Region, WorkerId};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employment {
    pub employment_type: String, // "full_time" | "part_time" | "casual"
    pub start_date:      Option<NaiveDate>,
    #[serde(default)]
    pub end_date:        Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Worker {
    pub id: WorkerId,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub is_subcontractor: bool,
    #[serde(default)]
    pub employment: Option<Employment>,
    /// Overrides the default capability (internal staff have detailed
    /// schedules, subcontractors do not).
    #[serde(default)]
    pub detailed_schedule: Option<bool>,
}

impl Worker {
    pub fn new(id: impl Into<WorkerId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: Some(display_name.into()),
            region: None,
            is_subcontractor: false,
            employment: None,
            detailed_schedule: None,
        }
    }

    pub fn subcontractor(id: impl Into<WorkerId>, display_name: impl Into<String>) -> Self {
        Self {
            is_subcontractor: true,
            ..Self::new(id, display_name)
        }
    }

    pub fn with_region(mut self, region: impl Into<Region>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Whether per-day schedule data exists for this worker. Workers
    /// without it skip day classification and count as available.
    pub fn has_detailed_schedule(&self) -> bool {
        self.detailed_schedule.unwrap_or(!self.is_subcontractor)
    }

    /// Sort key for alphabetical ordering; a missing name sorts as "".
    pub fn sort_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("")
    }
}

/// A recurring weekly on-duty window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleBlock {
    pub worker_id:   WorkerId,
    pub day_of_week: DayOfWeek,
    pub start_time:  NaiveTime,
    pub end_time:    NaiveTime,
    pub is_active:   bool,
}

impl ScheduleBlock {
    /// Scheduled hours for the block; zero for an inverted window.
    pub fn duration_hours(&self) -> f64 {
        let minutes = (self.end_time - self.start_time).num_minutes();
        if minutes <= 0 {
            0.0
        } else {
            minutes as f64 / 60.0
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UnavailabilityKind {
    #[default]
    Leave,
    Seasonal,
}

/// A date-bounded exception. Without start/end times it blocks every
/// date in `[start_date, end_date]` for the full day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnavailabilityRange {
    pub worker_id:  WorkerId,
    pub start_date: NaiveDate,
    pub end_date:   NaiveDate,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time:   Option<NaiveTime>,
    #[serde(default)]
    pub reason:     Option<String>,
    #[serde(default)]
    pub kind:       UnavailabilityKind,
}

impl UnavailabilityRange {
    pub fn full_days(
        worker_id: impl Into<WorkerId>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: Option<&str>,
    ) -> Self {
        Self {
            worker_id: worker_id.into(),
            start_date,
            end_date,
            start_time: None,
            end_time: None,
            reason: reason.map(str::to_string),
            kind: UnavailabilityKind::Leave,
        }
    }

    pub fn seasonal(mut self) -> Self {
        self.kind = UnavailabilityKind::Seasonal;
        self
    }

    pub fn between(mut self, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }

    /// Calendar-day granularity, inclusive on both ends.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The partial-day window, when both ends are present.
    pub fn time_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        self.start_time.zip(self.end_time)
    }

    /// The reason text, if present and not blank.
    pub fn reason_text(&self) -> Option<&str> {
        self.reason.as_deref().map(str::trim).filter(|r| !r.is_empty())
    }
}

/// Total hours assigned to a worker on one date, derived upstream from
/// appointment assignments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignedHours {
    pub worker_id: WorkerId,
    pub date:      NaiveDate,
    pub hours:     f64,
}
