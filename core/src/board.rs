//! Read-only status board: a rolling window (60 days by default) split
//! into pages (30 days each) that the display rotates through on a timer.
//!
//! Each page is summarized independently: a worker on leave for the
//! first month and back for the second shows as unavailable on page 0
//! and available on page 1.

use crate::{
    clock::{BoardRotation, DateWindow, ReferenceClock},
    config::BoardConfig,
    day_classifier::DayVerdict,
    error::BoardResult,
    load::{assigned_hours_ratio, color_for_ratio, Gradient, GradientPosition},
    period::{AvailabilityStatus, WorkerPeriodSummary},
    ranking::{group_by_region, rank_workers, split_extended_leave, RankFilters},
    schedule_index::ScheduleIndex,
    snapshot::{RosterIndex, RosterSnapshot},
    types::{Region, WorkerId},
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayCell {
    pub date:           NaiveDate,
    /// None for workers without detailed schedule data.
    pub verdict:        Option<DayVerdict>,
    pub assigned_hours: f64,
    pub capacity_hours: f64,
    pub ratio:          f64,
    pub gradient:       GradientPosition,
    pub color:          String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardRow {
    pub worker_id:        WorkerId,
    pub display_name:     String,
    pub is_subcontractor: bool,
    pub status:           AvailabilityStatus,
    pub reason:           Option<String>,
    pub cells:            Vec<DayCell>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardGroup {
    pub region: Region,
    pub rows:   Vec<BoardRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardPage {
    pub index:          u32,
    pub window:         DateWindow,
    pub groups:         Vec<BoardGroup>,
    pub extended_leave: Vec<BoardRow>,
}

impl BoardPage {
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum::<usize>() + self.extended_leave.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Board {
    pub generated_for: NaiveDate,
    pub window:        DateWindow,
    pub pages:         Vec<BoardPage>,
    pub rotation:      BoardRotation,
}

impl Board {
    pub fn current_page(&self) -> Option<&BoardPage> {
        self.pages.get(self.rotation.current_page as usize)
    }
}

/// Split `window` into consecutive pages of `page_days`; the last page
/// may be shorter.
pub fn page_windows(window: DateWindow, page_days: u32) -> Vec<DateWindow> {
    let page_days = page_days.max(1);
    (0..window.length_days)
        .step_by(page_days as usize)
        .map(|offset| {
            let length = page_days.min(window.length_days - offset);
            DateWindow::new(window.start + Duration::days(i64::from(offset)), length)
        })
        .collect()
}

pub fn build_board(
    snapshot: &RosterSnapshot,
    clock: &ReferenceClock,
    config: &BoardConfig,
    filters: &RankFilters,
) -> BoardResult<Board> {
    config.validate()?;
    let gradient = Gradient::from_config(&config.gradient)?;
    let window = clock.rolling_window(config.board_window_days);
    let roster = snapshot.index();

    let pages: Vec<BoardPage> = page_windows(window, config.board_page_days)
        .into_iter()
        .enumerate()
        .map(|(index, page_window)| {
            build_page(snapshot, &roster, config, &gradient, filters, index as u32, page_window)
        })
        .collect();

    log::info!(
        "board for {}: {} pages over {} days, {} workers",
        clock.today,
        pages.len(),
        window.length_days,
        snapshot.workers.len()
    );

    let rotation = BoardRotation::new(config.board_page_count(), config.rotation_interval_secs);
    Ok(Board { generated_for: clock.today, window, pages, rotation })
}

fn build_page(
    snapshot: &RosterSnapshot,
    roster: &RosterIndex<'_>,
    config: &BoardConfig,
    gradient: &Gradient,
    filters: &RankFilters,
    index: u32,
    window: DateWindow,
) -> BoardPage {
    let (internal, external) = snapshot.summarize_indexed(roster, window);
    let ranked = rank_workers(&internal, &external, filters);
    let (active, on_leave) = split_extended_leave(&ranked);

    let to_row = |summary: &WorkerPeriodSummary| build_row(roster, config, gradient, window, summary);
    let groups = group_by_region(&active, &config.unassigned_region_label)
        .into_iter()
        .map(|group| BoardGroup {
            region: group.region,
            rows:   group.workers.iter().map(to_row).collect(),
        })
        .collect();
    let extended_leave = on_leave.iter().map(to_row).collect();

    BoardPage { index, window, groups, extended_leave }
}

fn build_row(
    roster: &RosterIndex<'_>,
    config: &BoardConfig,
    gradient: &Gradient,
    window: DateWindow,
    summary: &WorkerPeriodSummary,
) -> BoardRow {
    let worker = &summary.worker;
    let detailed = worker.has_detailed_schedule();
    let index = ScheduleIndex::build(roster.schedules_for(&worker.id));

    let cells = window
        .dates()
        .enumerate()
        .map(|(i, date)| {
            let capacity_hours = if detailed {
                index.capacity_hours(date, config.standard_daily_hours)
            } else {
                config.standard_daily_hours
            };
            let assigned_hours = roster.assigned_hours_on(&worker.id, date);
            let ratio = assigned_hours_ratio(assigned_hours, capacity_hours);
            let position = color_for_ratio(ratio);
            DayCell {
                date,
                verdict: summary.days.get(i).map(|d| d.verdict),
                assigned_hours,
                capacity_hours,
                ratio,
                gradient: position,
                color: gradient.color_at(position).to_hex(),
            }
        })
        .collect();

    BoardRow {
        worker_id:        worker.id.clone(),
        display_name:     worker.sort_name().to_string(),
        is_subcontractor: worker.is_subcontractor,
        status:           summary.status,
        reason:           summary.reason.clone(),
        cells,
    }
}
