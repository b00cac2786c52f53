//! board-runner: headless availability views over a roster snapshot.
//!
//! Usage:
//!   board-runner --today 2026-10-19 --snapshot roster.json --view week
//!   board-runner --today 2026-10-19 --seed 12345 --view board --states NSW,VIC
//!   board-runner --seed 12345 --view month --ids w-1,w-2 --json

use anyhow::{Context, Result};
use chrono::NaiveDate;
use crewboard_core::{
    board::{Board, BoardRow},
    config::BoardConfig,
    demo::generate_roster,
    engine::AvailabilityEngine,
    period::WorkerPeriodSummary,
    ranking::RankFilters,
    snapshot::RosterSnapshot,
};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Week,
    Month,
    Board,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let workers = parse_arg(&args, "--workers", 24usize);
    let subcontractors = parse_arg(&args, "--subcontractors", 6usize);
    let json = args.iter().any(|a| a == "--json");
    let today = match flag_value(&args, "--today") {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("--today expects YYYY-MM-DD, got '{raw}'"))?,
        None => chrono::Local::now().date_naive(),
    };
    let view = match flag_value(&args, "--view").unwrap_or("week") {
        "week" => View::Week,
        "month" => View::Month,
        "board" => View::Board,
        other => anyhow::bail!("unknown --view '{other}' (expected week, month or board)"),
    };
    let data_dir = flag_value(&args, "--data-dir").unwrap_or("./data");
    let filters = RankFilters {
        states: split_list(flag_value(&args, "--states")),
        worker_ids: split_list(flag_value(&args, "--ids")),
    };

    let config = if std::path::Path::new(&format!("{data_dir}/board.json")).exists() {
        BoardConfig::load(data_dir)?
    } else {
        log::warn!("no board.json under {data_dir}, using built-in defaults");
        BoardConfig::default_test()
    };

    let snapshot = match flag_value(&args, "--snapshot") {
        Some(path) => RosterSnapshot::load(path).with_context(|| format!("loading snapshot {path}"))?,
        None => generate_roster(seed, today, workers, subcontractors),
    };

    if !json {
        println!("Crew availability: board-runner");
        println!("  today:     {today}");
        println!("  view:      {view:?}");
        println!("  workers:   {}", snapshot.workers.len());
        println!("  data_dir:  {data_dir}");
        println!();
    }

    let engine = AvailabilityEngine::new(config, snapshot)?;
    match view {
        View::Week | View::Month => {
            let ranked = if view == View::Week {
                engine.ranked_for_week(today, &filters)
            } else {
                engine.ranked_for_month(today, &filters)
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                print_ranked(&ranked);
            }
        }
        View::Board => {
            let board = engine.board(today, &filters)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&board)?);
            } else {
                print_board(&board);
            }
        }
    }

    Ok(())
}

fn print_ranked(ranked: &[WorkerPeriodSummary]) {
    println!("=== RANKED WORKERS ===");
    for (i, summary) in ranked.iter().enumerate() {
        let kind = if summary.worker.is_subcontractor { " (sub)" } else { "" };
        println!(
            "  {:>3}. {:<32} {:<12} {}",
            i + 1,
            format!("{}{kind}", summary.worker.sort_name()),
            summary.status.label(),
            summary.reason.as_deref().unwrap_or("")
        );
    }
}

fn print_board(board: &Board) {
    for page in &board.pages {
        println!(
            "=== PAGE {} of {}: {} to {} ===",
            page.index + 1,
            board.pages.len(),
            page.window.start,
            page.window.end()
        );
        for group in &page.groups {
            println!("  [{}]", group.region);
            for row in &group.rows {
                print_row(row);
            }
        }
        if !page.extended_leave.is_empty() {
            println!("  [On extended leave]");
            for row in &page.extended_leave {
                print_row(row);
            }
        }
        println!();
    }
    println!("rotation: every {}s", board.rotation.interval_secs);
}

fn print_row(row: &BoardRow) {
    let booked = row.cells.iter().filter(|c| c.ratio >= 1.0).count();
    println!(
        "    {:<32} {:<12} booked {:>2}/{:<2} {}",
        row.display_name,
        row.status.label(),
        booked,
        row.cells.len(),
        row.reason.as_deref().unwrap_or("")
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
