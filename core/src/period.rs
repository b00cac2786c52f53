//! Period aggregator: rolls day verdicts into one status per worker.
//!
//! Status rules, in order:
//!   - no scheduled days                  → Unavailable, "No schedule set"
//!   - every scheduled day hit            → Unavailable, first reason
//!   - some scheduled days hit            → Partial, "Available a/s days (reason)"
//!   - otherwise                          → Available
//!
//! Workers without detailed schedule data (subcontractors by default)
//! are Available with no per-day detail.

use crate::{
    day_classifier::{resolve_day, DayVerdict, WorkerDayVerdict},
    roster::{ScheduleBlock, UnavailabilityKind, UnavailabilityRange, Worker},
    schedule_index::ScheduleIndex,
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const NO_SCHEDULE_REASON: &str = "No schedule set";
pub const UNAVAILABLE_ALL_WEEK_REASON: &str = "Unavailable all week";
pub const UNAVAILABLE_ALL_PERIOD_REASON: &str = "Unavailable all period";

/// Worker-level status. Declaration order is ranking order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    Available,
    Partial,
    Unavailable,
}

impl AvailabilityStatus {
    /// Rank for comparisons (lower sorts first).
    pub fn rank(self) -> u8 {
        match self {
            Self::Available   => 0,
            Self::Partial     => 1,
            Self::Unavailable => 2,
        }
    }

    pub fn compare(self, other: Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Available   => "available",
            Self::Partial     => "partial",
            Self::Unavailable => "unavailable",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkerPeriodSummary {
    pub worker:           Worker,
    pub status:           AvailabilityStatus,
    pub reason:           Option<String>,
    pub scheduled_days:   u32,
    pub available_days:   u32,
    pub unavailable_days: u32,
    /// Kind behind the first unavailable day, if any.
    pub cause:            Option<UnavailabilityKind>,
    pub days:             Vec<WorkerDayVerdict>,
}

impl WorkerPeriodSummary {
    fn without_detail(worker: &Worker) -> Self {
        Self {
            worker: worker.clone(),
            status: AvailabilityStatus::Available,
            reason: None,
            scheduled_days: 0,
            available_days: 0,
            unavailable_days: 0,
            cause: None,
            days: Vec::new(),
        }
    }
}

pub fn summarize_period(
    worker: &Worker,
    period_start: NaiveDate,
    period_length_days: u32,
    schedules: &[ScheduleBlock],
    unavailability: &[UnavailabilityRange],
) -> WorkerPeriodSummary {
    if !worker.has_detailed_schedule() {
        return WorkerPeriodSummary::without_detail(worker);
    }

    let index = ScheduleIndex::build(schedules.iter().filter(|b| b.worker_id == worker.id));
    let days: Vec<WorkerDayVerdict> = (0..period_length_days)
        .map(|offset| period_start + Duration::days(i64::from(offset)))
        .map(|date| resolve_day(worker, date, &index, unavailability))
        .collect();

    let scheduled_days = days.iter().filter(|d| d.is_scheduled).count() as u32;
    let available_days = count_verdict(&days, DayVerdict::Available);
    let unavailable_days = count_verdict(&days, DayVerdict::NotAvailable);

    let first_hit = days.iter().find(|d| d.verdict == DayVerdict::NotAvailable);
    let first_reason = days
        .iter()
        .filter(|d| d.verdict == DayVerdict::NotAvailable)
        .find_map(|d| d.reason.clone());
    let cause = days
        .iter()
        .filter(|d| d.verdict == DayVerdict::NotAvailable && d.reason.is_some())
        .find_map(|d| d.cause)
        .or_else(|| first_hit.and_then(|d| d.cause));

    let (status, reason) = if scheduled_days == 0 {
        (AvailabilityStatus::Unavailable, Some(NO_SCHEDULE_REASON.to_string()))
    } else if unavailable_days == scheduled_days {
        let fallback = if period_length_days == 7 {
            UNAVAILABLE_ALL_WEEK_REASON
        } else {
            UNAVAILABLE_ALL_PERIOD_REASON
        };
        (
            AvailabilityStatus::Unavailable,
            Some(first_reason.unwrap_or_else(|| fallback.to_string())),
        )
    } else if unavailable_days > 0 {
        let mut text = format!("Available {available_days}/{scheduled_days} days");
        if let Some(reason) = &first_reason {
            text.push_str(&format!(" ({reason})"));
        }
        (AvailabilityStatus::Partial, Some(text))
    } else {
        (AvailabilityStatus::Available, None)
    };

    log::debug!(
        "worker={} period {}+{}d: {} ({available_days}/{scheduled_days} available)",
        worker.id, period_start, period_length_days, status.label()
    );

    WorkerPeriodSummary {
        worker: worker.clone(),
        status,
        reason,
        scheduled_days,
        available_days,
        unavailable_days,
        cause,
        days,
    }
}

fn count_verdict(days: &[WorkerDayVerdict], verdict: DayVerdict) -> u32 {
    days.iter().filter(|d| d.verdict == verdict).count() as u32
}
