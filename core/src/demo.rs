//! Seeded synthetic rosters for the board runner and tests.

use crate::{
    name_generator::NameGenerator,
    rng::{DemoRng, DemoSlot, RngBank},
    roster::{AssignedHours, Employment, ScheduleBlock, UnavailabilityRange, Worker},
    snapshot::RosterSnapshot,
    types::day_of_week,
};
use chrono::{Duration, NaiveDate, NaiveTime};

/// Days of assigned-hours data generated from `today`.
pub const WORKLOAD_HORIZON_DAYS: u32 = 60;

const LEAVE_REASONS: &[&str] = &[
    "Annual leave",
    "Sick leave",
    "Long service leave",
    "Parental leave",
    "Public holiday",
    "Training",
    "",
];

const SEASONAL_REASONS: &[&str] = &["Harvest season", "School holidays", "Winter shutdown"];

fn worker_id(rng: &mut DemoRng) -> String {
    uuid::Builder::from_random_bytes(rng.next_bytes16())
        .into_uuid()
        .hyphenated()
        .to_string()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Build a reproducible roster of `worker_count` internal workers and
/// `subcontractor_count` subcontractors around `today`.
pub fn generate_roster(
    seed: u64,
    today: NaiveDate,
    worker_count: usize,
    subcontractor_count: usize,
) -> RosterSnapshot {
    let bank = RngBank::new(seed);
    let mut worker_rng = bank.for_slot(DemoSlot::Workers);
    let mut schedule_rng = bank.for_slot(DemoSlot::Schedules);
    let mut leave_rng = bank.for_slot(DemoSlot::Leave);
    let mut seasonal_rng = bank.for_slot(DemoSlot::Seasonal);
    let mut workload_rng = bank.for_slot(DemoSlot::Workload);
    let mut sub_rng = bank.for_slot(DemoSlot::Subcontractors);

    let mut snapshot = RosterSnapshot::default();

    for _ in 0..worker_count {
        let full_time = worker_rng.chance(0.75);
        let mut worker = Worker::new(worker_id(&mut worker_rng), NameGenerator::generate_full_name(&mut worker_rng))
            .with_region(NameGenerator::generate_region(&mut worker_rng));
        worker.employment = Some(Employment {
            employment_type: if full_time { "full_time" } else { "part_time" }.into(),
            start_date: Some(today - Duration::days(worker_rng.range_inclusive(30, 3650) as i64)),
            end_date: None,
        });

        snapshot.schedules.extend(demo_schedule(&mut schedule_rng, &worker.id, full_time));
        if leave_rng.chance(0.35) {
            snapshot.unavailability.push(demo_range(&mut leave_rng, &worker.id, today, LEAVE_REASONS, 1, 21));
        }
        if seasonal_rng.chance(0.10) {
            snapshot
                .seasonal
                .push(demo_range(&mut seasonal_rng, &worker.id, today, SEASONAL_REASONS, 7, 28).seasonal());
        }
        snapshot.workers.push(worker);
    }

    for _ in 0..subcontractor_count {
        let worker = Worker::subcontractor(worker_id(&mut sub_rng), NameGenerator::generate_subcontractor_name(&mut sub_rng))
            .with_region(NameGenerator::generate_region(&mut sub_rng));
        snapshot.workers.push(worker);
    }

    for worker in &snapshot.workers {
        let schedule: Vec<u8> = snapshot
            .schedules
            .iter()
            .filter(|b| b.worker_id == worker.id && b.is_active)
            .map(|b| b.day_of_week)
            .collect();
        for offset in 0..WORKLOAD_HORIZON_DAYS {
            let date = today + Duration::days(i64::from(offset));
            let works_today = if worker.has_detailed_schedule() {
                schedule.contains(&day_of_week(date))
            } else {
                (1..=5).contains(&day_of_week(date))
            };
            if works_today && workload_rng.chance(0.7) {
                let hours = (workload_rng.next_f64() * 10.0 * 2.0).round() / 2.0;
                if hours > 0.0 {
                    snapshot.assigned_hours.push(AssignedHours {
                        worker_id: worker.id.clone(),
                        date,
                        hours,
                    });
                }
            }
        }
    }

    log::info!(
        "demo roster seed={seed}: {} workers, {} schedule rows, {} leave, {} seasonal",
        snapshot.workers.len(),
        snapshot.schedules.len(),
        snapshot.unavailability.len(),
        snapshot.seasonal.len()
    );
    snapshot
}

fn demo_schedule(rng: &mut DemoRng, worker_id: &str, full_time: bool) -> Vec<ScheduleBlock> {
    // A few workers have not set a schedule yet.
    if rng.chance(0.05) {
        return Vec::new();
    }
    let weekdays: Vec<u8> = if full_time {
        (1..=5).collect()
    } else {
        (1..=5).filter(|_| rng.chance(0.6)).collect()
    };
    let start = time(rng.range_inclusive(6, 9), 0);
    let end = time(rng.range_inclusive(14, 17), 30);
    weekdays
        .into_iter()
        .map(|day| ScheduleBlock {
            worker_id:   worker_id.to_string(),
            day_of_week: day,
            start_time:  start,
            end_time:    end,
            is_active:   true,
        })
        .collect()
}

fn demo_range(
    rng: &mut DemoRng,
    worker_id: &str,
    today: NaiveDate,
    reasons: &[&str],
    min_days: u32,
    max_days: u32,
) -> UnavailabilityRange {
    let start = today + Duration::days(i64::from(rng.range_inclusive(0, WORKLOAD_HORIZON_DAYS)) - 7);
    let end = start + Duration::days(i64::from(rng.range_inclusive(min_days, max_days) - 1));
    let reason = rng.pick(reasons).copied().filter(|r| !r.is_empty());
    UnavailabilityRange::full_days(worker_id, start, end, reason)
}
