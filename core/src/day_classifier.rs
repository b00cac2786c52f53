//! Day classifier: one verdict per (worker, date).

use crate::{
    roster::{UnavailabilityKind, UnavailabilityRange, Worker},
    schedule_index::ScheduleIndex,
    unavailability::resolve_unavailability,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DayVerdict {
    Available,
    NotAvailable,
    NotScheduled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkerDayVerdict {
    pub date:         NaiveDate,
    pub verdict:      DayVerdict,
    pub is_scheduled: bool,
    pub is_available: bool,
    pub reason:       Option<String>,
    /// Kind of unavailability behind a NotAvailable verdict.
    pub cause:        Option<UnavailabilityKind>,
}

impl WorkerDayVerdict {
    fn not_scheduled(date: NaiveDate) -> Self {
        Self {
            date,
            verdict: DayVerdict::NotScheduled,
            is_scheduled: false,
            is_available: false,
            reason: None,
            cause: None,
        }
    }
}

/// Classify a single day. Unavailability is only consulted on days the
/// worker is scheduled, so `is_available` always implies `is_scheduled`.
pub fn resolve_day(
    worker: &Worker,
    date: NaiveDate,
    index: &ScheduleIndex,
    ranges: &[UnavailabilityRange],
) -> WorkerDayVerdict {
    if !index.is_scheduled(date) {
        return WorkerDayVerdict::not_scheduled(date);
    }

    let hit = resolve_unavailability(date, ranges.iter().filter(|r| r.worker_id == worker.id));
    if hit.is_unavailable {
        WorkerDayVerdict {
            date,
            verdict: DayVerdict::NotAvailable,
            is_scheduled: true,
            is_available: false,
            reason: hit.reason,
            cause: hit.kind,
        }
    } else {
        WorkerDayVerdict {
            date,
            verdict: DayVerdict::Available,
            is_scheduled: true,
            is_available: true,
            reason: None,
            cause: None,
        }
    }
}
