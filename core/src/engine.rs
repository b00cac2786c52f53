//! The availability engine: wires the pipeline over one roster snapshot.
//!
//! PIPELINE (leaves first, data flows strictly downstream):
//!   1. Schedule index       (per worker, active blocks by day of week)
//!   2. Unavailability       (leave ∪ seasonal ranges hit a date?)
//!   3. Day classifier       (one verdict per worker per date)
//!   4. Period aggregator    (week / month / rolling window status)
//!   5. Load colorizer       (assigned-hours intensity, board only)
//!   6. Ranker / grouper     (sorted list, region groups, leave bucket)
//!
//! RULES:
//!   - Every entry point takes the reference date from a ReferenceClock.
//!   - Nothing here mutates the snapshot; each call recomputes in full.

use crate::{
    board::{build_board, Board},
    clock::{DateWindow, ReferenceClock},
    config::BoardConfig,
    error::BoardResult,
    period::WorkerPeriodSummary,
    ranking::{rank_workers, RankFilters},
    snapshot::RosterSnapshot,
};
use chrono::NaiveDate;

pub struct AvailabilityEngine {
    pub config: BoardConfig,
    snapshot:   RosterSnapshot,
}

impl AvailabilityEngine {
    pub fn new(config: BoardConfig, snapshot: RosterSnapshot) -> BoardResult<Self> {
        config.validate()?;
        if let Err(e) = snapshot.validate() {
            log::warn!("roster snapshot has data-quality issues: {e}");
        }
        Ok(Self { config, snapshot })
    }

    /// Engine over a snapshot with BoardConfig::default_test().
    pub fn build_test(snapshot: RosterSnapshot) -> BoardResult<Self> {
        Self::new(BoardConfig::default_test(), snapshot)
    }

    pub fn snapshot(&self) -> &RosterSnapshot {
        &self.snapshot
    }

    pub fn clock(&self, today: NaiveDate) -> ReferenceClock {
        ReferenceClock::new(today, self.config.week_starts_on)
    }

    /// Summaries for every worker over `window`, split into
    /// (detailed-schedule workers, the rest).
    pub fn summaries_for(
        &self,
        window: DateWindow,
    ) -> (Vec<WorkerPeriodSummary>, Vec<WorkerPeriodSummary>) {
        let (internal, external) = self.snapshot.summarize(window);
        log::debug!(
            "summarized {} + {} workers over {}+{}d",
            internal.len(),
            external.len(),
            window.start,
            window.length_days
        );
        (internal, external)
    }

    pub fn week_summaries(&self, today: NaiveDate) -> (Vec<WorkerPeriodSummary>, Vec<WorkerPeriodSummary>) {
        self.summaries_for(self.clock(today).week_window())
    }

    pub fn month_summaries(&self, today: NaiveDate) -> (Vec<WorkerPeriodSummary>, Vec<WorkerPeriodSummary>) {
        self.summaries_for(self.clock(today).month_window())
    }

    /// The worker list used when assigning new work: this week's
    /// statuses, ranked.
    pub fn ranked_for_week(&self, today: NaiveDate, filters: &RankFilters) -> Vec<WorkerPeriodSummary> {
        let (internal, external) = self.week_summaries(today);
        rank_workers(&internal, &external, filters)
    }

    pub fn ranked_for_month(&self, today: NaiveDate, filters: &RankFilters) -> Vec<WorkerPeriodSummary> {
        let (internal, external) = self.month_summaries(today);
        rank_workers(&internal, &external, filters)
    }

    pub fn board(&self, today: NaiveDate, filters: &RankFilters) -> BoardResult<Board> {
        build_board(&self.snapshot, &self.clock(today), &self.config, filters)
    }
}
