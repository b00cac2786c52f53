//! Roster snapshot: the consistent set of records the caller supplies
//! for one computation. Serialized as JSON by the runner and demo tools.

use crate::{
    clock::DateWindow,
    error::{BoardError, BoardResult},
    period::{summarize_period, WorkerPeriodSummary},
    roster::{AssignedHours, ScheduleBlock, UnavailabilityRange, Worker},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RosterSnapshot {
    pub workers: Vec<Worker>,
    #[serde(default)]
    pub schedules: Vec<ScheduleBlock>,
    #[serde(default)]
    pub unavailability: Vec<UnavailabilityRange>,
    #[serde(default)]
    pub seasonal: Vec<UnavailabilityRange>,
    #[serde(default)]
    pub assigned_hours: Vec<AssignedHours>,
}

impl RosterSnapshot {
    pub fn from_json(json: &str) -> BoardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &str) -> BoardResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Reject reversed ranges and rows pointing at workers not in the
    /// snapshot.
    pub fn validate(&self) -> BoardResult<()> {
        let known: HashSet<&str> = self.workers.iter().map(|w| w.id.as_str()).collect();
        let check_worker = |worker_id: &str| {
            if known.contains(worker_id) {
                Ok(())
            } else {
                Err(BoardError::UnknownWorker { worker_id: worker_id.to_string() })
            }
        };

        for block in &self.schedules {
            check_worker(&block.worker_id)?;
        }
        for range in self.unavailability.iter().chain(&self.seasonal) {
            check_worker(&range.worker_id)?;
            if range.end_date < range.start_date {
                return Err(BoardError::InvalidRange {
                    worker_id: range.worker_id.clone(),
                    start:     range.start_date,
                    end:       range.end_date,
                });
            }
        }
        for hours in &self.assigned_hours {
            check_worker(&hours.worker_id)?;
        }
        Ok(())
    }

    /// Internal workers (with detailed schedules) and the rest, in
    /// snapshot order.
    pub fn partition_workers(&self) -> (Vec<&Worker>, Vec<&Worker>) {
        self.workers.iter().partition(|w| w.has_detailed_schedule())
    }

    /// Group rows by worker in one pass. Build once per computation and
    /// look rows up from it; the snapshot's own vectors are unordered.
    pub fn index(&self) -> RosterIndex<'_> {
        RosterIndex::build(self)
    }

    /// Period summaries for every worker over `window`, split into
    /// (detailed-schedule workers, the rest).
    pub fn summarize(&self, window: DateWindow) -> (Vec<WorkerPeriodSummary>, Vec<WorkerPeriodSummary>) {
        self.summarize_indexed(&self.index(), window)
    }

    /// As `summarize`, reusing an index built from this snapshot.
    pub fn summarize_indexed(
        &self,
        index: &RosterIndex<'_>,
        window: DateWindow,
    ) -> (Vec<WorkerPeriodSummary>, Vec<WorkerPeriodSummary>) {
        let summarize = |worker: &&Worker| {
            summarize_period(
                worker,
                window.start,
                window.length_days,
                index.schedules_for(&worker.id),
                index.unavailability_for(&worker.id),
            )
        };
        let (internal, external) = self.partition_workers();
        (
            internal.iter().map(summarize).collect(),
            external.iter().map(summarize).collect(),
        )
    }
}

/// Per-worker lookup tables over one snapshot.
#[derive(Debug, Default)]
pub struct RosterIndex<'a> {
    schedules:      HashMap<&'a str, Vec<ScheduleBlock>>,
    unavailability: HashMap<&'a str, Vec<UnavailabilityRange>>,
    hours:          HashMap<(&'a str, NaiveDate), f64>,
}

impl<'a> RosterIndex<'a> {
    pub fn build(snapshot: &'a RosterSnapshot) -> Self {
        let mut index = Self::default();
        for block in &snapshot.schedules {
            index
                .schedules
                .entry(block.worker_id.as_str())
                .or_default()
                .push(block.clone());
        }
        // Leave before seasonal keeps the first-reason rule stable.
        for range in snapshot.unavailability.iter().chain(&snapshot.seasonal) {
            index
                .unavailability
                .entry(range.worker_id.as_str())
                .or_default()
                .push(range.clone());
        }
        for row in &snapshot.assigned_hours {
            *index.hours.entry((row.worker_id.as_str(), row.date)).or_default() += row.hours;
        }
        log::debug!(
            "indexed roster: {} schedule owners, {} unavailability owners, {} worker-days booked",
            index.schedules.len(),
            index.unavailability.len(),
            index.hours.len()
        );
        index
    }

    pub fn schedules_for(&self, worker_id: &str) -> &[ScheduleBlock] {
        self.schedules.get(worker_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Leave ranges followed by seasonal ranges for one worker.
    pub fn unavailability_for(&self, worker_id: &str) -> &[UnavailabilityRange] {
        self.unavailability.get(worker_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sum of assigned hours for a worker on a date.
    pub fn assigned_hours_on(&self, worker_id: &str, date: NaiveDate) -> f64 {
        self.hours.get(&(worker_id, date)).copied().unwrap_or(0.0)
    }
}
