//! Status board tests: pagination, per-page status, cells and rotation.

use chrono::{Duration, NaiveDate, NaiveTime};
use crewboard_core::{
    board::{build_board, page_windows},
    clock::{BoardRotation, DateWindow, ReferenceClock, WeekStart},
    config::BoardConfig,
    day_classifier::DayVerdict,
    engine::AvailabilityEngine,
    period::AvailabilityStatus,
    ranking::RankFilters,
    roster::{AssignedHours, ScheduleBlock, UnavailabilityRange, Worker},
    snapshot::RosterSnapshot,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn today() -> NaiveDate {
    date(2026, 10, 19)
}

fn weekday_blocks(worker_id: &str) -> Vec<ScheduleBlock> {
    (1..=5)
        .map(|day| ScheduleBlock {
            worker_id:   worker_id.into(),
            day_of_week: day,
            start_time:  NaiveTime::from_hms_opt(8, 0, 0).expect("time"),
            end_time:    NaiveTime::from_hms_opt(16, 0, 0).expect("time"),
            is_active:   true,
        })
        .collect()
}

fn roster() -> RosterSnapshot {
    let mut snapshot = RosterSnapshot {
        workers: vec![
            Worker::new("w-1", "Alex").with_region("NSW"),
            Worker::new("w-2", "Blair").with_region("VIC"),
            Worker::new("w-3", "Casey").with_region("NSW"),
            Worker::subcontractor("s-1", "Metro Solar Co").with_region("NSW"),
        ],
        ..Default::default()
    };
    for id in ["w-1", "w-2", "w-3"] {
        snapshot.schedules.extend(weekday_blocks(id));
    }
    // Blair is on leave for the whole first page, back for the second.
    snapshot.unavailability.push(UnavailabilityRange::full_days(
        "w-2",
        today(),
        today() + Duration::days(29),
        Some("Long service leave"),
    ));
    snapshot.assigned_hours.push(AssignedHours { worker_id: "w-1".into(), date: today(), hours: 4.0 });
    snapshot.assigned_hours.push(AssignedHours { worker_id: "w-1".into(), date: today(), hours: 4.0 });
    snapshot
}

#[test]
fn sixty_day_window_splits_into_two_pages() {
    let pages = page_windows(DateWindow::new(today(), 60), 30);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0], DateWindow::new(today(), 30));
    assert_eq!(pages[1].start, today() + Duration::days(30));
    assert_eq!(pages[1].end(), today() + Duration::days(59));

    let uneven = page_windows(DateWindow::new(today(), 45), 30);
    assert_eq!(uneven.len(), 2);
    assert_eq!(uneven[1].length_days, 15, "trailing page is short");
}

#[test]
fn board_pages_are_summarized_independently() {
    let snapshot = roster();
    let clock = ReferenceClock::new(today(), WeekStart::Monday);
    let board = build_board(&snapshot, &clock, &BoardConfig::default_test(), &RankFilters::default())
        .expect("board");

    assert_eq!(board.pages.len(), 2);
    assert_eq!(board.rotation.page_count, 2);

    let first = &board.pages[0];
    assert_eq!(first.extended_leave.len(), 1);
    assert_eq!(first.extended_leave[0].worker_id, "w-2");
    assert_eq!(first.extended_leave[0].reason.as_deref(), Some("Long service leave"));
    assert!(
        first.groups.iter().all(|g| g.region != "VIC"),
        "Blair is only in the leave bucket on page 0"
    );

    let second = &board.pages[1];
    assert!(second.extended_leave.is_empty());
    let vic = second.groups.iter().find(|g| g.region == "VIC").expect("VIC group on page 1");
    assert_eq!(vic.rows[0].status, AvailabilityStatus::Available);
}

#[test]
fn board_rows_carry_load_cells() {
    let snapshot = roster();
    let clock = ReferenceClock::new(today(), WeekStart::Monday);
    let config = BoardConfig::default_test();
    let board = build_board(&snapshot, &clock, &config, &RankFilters::default()).expect("board");

    let nsw = board.pages[0].groups.iter().find(|g| g.region == "NSW").expect("NSW group");
    let order: Vec<&str> = nsw.rows.iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(order, vec!["Alex", "Casey", "Metro Solar Co"]);

    let alex = &nsw.rows[0];
    assert_eq!(alex.cells.len(), 30);
    let monday = &alex.cells[0];
    assert_eq!(monday.verdict, Some(DayVerdict::Available));
    assert_eq!(monday.assigned_hours, 8.0, "hours on the same day are summed");
    assert_eq!(monday.capacity_hours, 8.0);
    assert_eq!(monday.ratio, 1.0);
    assert_eq!(monday.color, config.gradient.booked);

    let saturday = &alex.cells[5];
    assert_eq!(saturday.verdict, Some(DayVerdict::NotScheduled));
    assert_eq!(saturday.ratio, 0.0);
    assert_eq!(saturday.color, config.gradient.available);

    let metro = &nsw.rows[2];
    assert!(metro.is_subcontractor);
    assert!(metro.cells.iter().all(|c| c.verdict.is_none()));
}

#[test]
fn board_respects_state_filter() {
    let snapshot = roster();
    let clock = ReferenceClock::new(today(), WeekStart::Monday);
    let board = build_board(&snapshot, &clock, &BoardConfig::default_test(), &RankFilters::with_states(["VIC"]))
        .expect("board");

    assert_eq!(board.pages[0].row_count(), 1);
    assert_eq!(board.pages[1].row_count(), 1);
}

#[test]
fn invalid_board_config_is_rejected() {
    let snapshot = roster();
    let clock = ReferenceClock::new(today(), WeekStart::Monday);

    let mut zero_page = BoardConfig::default_test();
    zero_page.board_page_days = 0;
    assert!(build_board(&snapshot, &clock, &zero_page, &RankFilters::default()).is_err());

    let mut oversized = BoardConfig::default_test();
    oversized.board_page_days = 90;
    assert!(oversized.validate().is_err());

    let mut bad_colour = BoardConfig::default_test();
    bad_colour.gradient.booked = "red".into();
    assert!(bad_colour.validate().is_err());
}

#[test]
fn rotation_wraps_and_pauses() {
    let mut rotation = BoardRotation::new(2, 30);
    assert_eq!(rotation.current_page, 0);
    assert_eq!(rotation.advance(), 1);
    assert_eq!(rotation.advance(), 0, "wraps to the first page");

    rotation.pause();
    assert_eq!(rotation.advance(), 0, "paused rotation stays put");
    rotation.resume();
    assert_eq!(rotation.advance(), 1);

    rotation.set_interval(15);
    assert_eq!(rotation.interval_secs, 15);
}

#[test]
fn rotation_with_no_pages_stays_on_first_page() {
    let mut rotation: BoardRotation = serde_json::from_str(
        r#"{ "page_count": 0, "current_page": 0, "interval_secs": 30, "paused": false }"#,
    )
    .expect("rotation json");

    assert_eq!(rotation.advance(), 0);
    assert_eq!(rotation.advance(), 0);
}

#[test]
fn rotation_is_sized_from_config_page_count() {
    let snapshot = roster();
    let clock = ReferenceClock::new(today(), WeekStart::Monday);
    let mut config = BoardConfig::default_test();
    config.board_window_days = 45;

    let board = build_board(&snapshot, &clock, &config, &RankFilters::default()).expect("board");

    assert_eq!(config.board_page_count(), 2);
    assert_eq!(board.rotation.page_count, config.board_page_count());
    assert_eq!(board.pages.len() as u32, board.rotation.page_count);
}

#[test]
fn engine_board_matches_direct_build() {
    let engine = AvailabilityEngine::build_test(roster()).expect("engine");
    let via_engine = engine.board(today(), &RankFilters::default()).expect("engine board");
    let clock = ReferenceClock::new(today(), WeekStart::Monday);
    let direct = build_board(engine.snapshot(), &clock, &engine.config, &RankFilters::default())
        .expect("direct board");

    assert_eq!(via_engine, direct);
    assert_eq!(via_engine.current_page().map(|p| p.index), Some(0));
}
