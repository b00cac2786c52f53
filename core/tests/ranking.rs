//! Ranker/grouper tests: ordering, filters, region groups, leave bucket.

use crewboard_core::{
    period::{AvailabilityStatus, WorkerPeriodSummary},
    ranking::{compare_names, group_by_region, rank_workers, split_extended_leave, RankFilters},
    roster::{UnavailabilityKind, Worker},
};

fn summary(worker: Worker, status: AvailabilityStatus) -> WorkerPeriodSummary {
    WorkerPeriodSummary {
        worker,
        status,
        reason: None,
        scheduled_days: 5,
        available_days: 0,
        unavailable_days: 0,
        cause: None,
        days: Vec::new(),
    }
}

fn internal(id: &str, name: &str, status: AvailabilityStatus) -> WorkerPeriodSummary {
    summary(Worker::new(id, name), status)
}

fn sub(id: &str, name: &str) -> WorkerPeriodSummary {
    summary(Worker::subcontractor(id, name), AvailabilityStatus::Available)
}

fn names(list: &[WorkerPeriodSummary]) -> Vec<&str> {
    list.iter().map(|s| s.worker.sort_name()).collect()
}

/// Scenario E: alphabetical within a band, subcontractors last.
#[test]
fn partial_band_sorted_by_name_then_subcontractors() {
    let workers = vec![
        internal("w-1", "Zara", AvailabilityStatus::Partial),
        internal("w-2", "Adam", AvailabilityStatus::Partial),
    ];
    let subs = vec![sub("s-1", "Bob")];

    let ranked = rank_workers(&workers, &subs, &RankFilters::default());

    assert_eq!(names(&ranked), vec!["Adam", "Zara", "Bob"]);
}

#[test]
fn bands_are_ordered_by_status() {
    let workers = vec![
        internal("w-1", "Carol", AvailabilityStatus::Unavailable),
        internal("w-2", "alice", AvailabilityStatus::Partial),
        internal("w-3", "Bruce", AvailabilityStatus::Available),
        internal("w-4", "Aaron", AvailabilityStatus::Unavailable),
        internal("w-5", "Beth", AvailabilityStatus::Partial),
        internal("w-6", "Zed", AvailabilityStatus::Available),
    ];

    let ranked = rank_workers(&workers, &[], &RankFilters::default());

    assert_eq!(names(&ranked), vec!["Bruce", "Zed", "alice", "Beth", "Aaron", "Carol"]);
    for pair in ranked.windows(2) {
        assert!(
            pair[0].status.rank() <= pair[1].status.rank(),
            "{} ({:?}) ranked before {} ({:?})",
            pair[0].worker.sort_name(), pair[0].status,
            pair[1].worker.sort_name(), pair[1].status
        );
    }
}

#[test]
fn subcontractors_always_count_as_available_and_sort_by_name() {
    let mut odd = sub("s-2", "Acme Fencing");
    odd.status = AvailabilityStatus::Unavailable;
    let subs = vec![sub("s-1", "Zenith Roofing"), odd];

    let ranked = rank_workers(&[internal("w-1", "Yusuf", AvailabilityStatus::Unavailable)], &subs, &RankFilters::default());

    assert_eq!(names(&ranked), vec!["Yusuf", "Acme Fencing", "Zenith Roofing"]);
    assert!(ranked[1..].iter().all(|s| s.status == AvailabilityStatus::Available));
}

#[test]
fn accented_names_sort_with_their_base_letters() {
    let workers = vec![
        internal("w-1", "Zara", AvailabilityStatus::Available),
        internal("w-2", "Émile", AvailabilityStatus::Available),
        internal("w-3", "Oscar", AvailabilityStatus::Available),
    ];
    let subs = vec![sub("s-1", "Östlund Glazing"), sub("s-2", "Acme Fencing")];

    let ranked = rank_workers(&workers, &subs, &RankFilters::default());

    assert_eq!(names(&ranked), vec!["Émile", "Oscar", "Zara", "Acme Fencing", "Östlund Glazing"]);
}

#[test]
fn name_order_is_total_when_names_fold_together() {
    use std::cmp::Ordering;
    assert_eq!(compare_names("Rene", "René"), Ordering::Less, "lowercase breaks the fold tie");
    assert_eq!(compare_names("Renee", "renee"), Ordering::Less, "raw text breaks the last tie");
    assert_eq!(compare_names("Chloé", "Chloé"), Ordering::Equal);
    assert_eq!(compare_names("ébène", "Ezra"), Ordering::Less);
}

#[test]
fn missing_names_sort_as_empty() {
    let mut nameless = internal("w-9", "", AvailabilityStatus::Available);
    nameless.worker.display_name = None;
    let workers = vec![internal("w-1", "Ann", AvailabilityStatus::Available), nameless];

    let ranked = rank_workers(&workers, &[], &RankFilters::default());

    assert_eq!(ranked[0].worker.id, "w-9");
    assert_eq!(ranked[1].worker.id, "w-1");
}

#[test]
fn filters_by_state_and_worker_id() {
    let workers = vec![
        summary(Worker::new("w-1", "Ann").with_region("NSW"), AvailabilityStatus::Available),
        summary(Worker::new("w-2", "Ben").with_region("VIC"), AvailabilityStatus::Available),
        summary(Worker::new("w-3", "Cal"), AvailabilityStatus::Available),
    ];
    let subs = vec![summary(Worker::subcontractor("s-1", "Dan Electrical").with_region("nsw"), AvailabilityStatus::Available)];

    let by_state = rank_workers(&workers, &subs, &RankFilters::with_states(["NSW"]));
    assert_eq!(names(&by_state), vec!["Ann", "Dan Electrical"]);

    let by_id = RankFilters { states: Vec::new(), worker_ids: vec!["w-2".into(), "w-3".into()] };
    assert_eq!(names(&rank_workers(&workers, &subs, &by_id)), vec!["Ben", "Cal"]);

    let none = rank_workers(&workers, &subs, &RankFilters::default());
    assert_eq!(none.len(), 4, "empty filters pass everything through");
}

#[test]
fn ranking_does_not_mutate_inputs() {
    let workers = vec![
        internal("w-1", "Zara", AvailabilityStatus::Unavailable),
        internal("w-2", "Adam", AvailabilityStatus::Available),
    ];
    let before = workers.clone();

    let _ = rank_workers(&workers, &[], &RankFilters::default());

    assert_eq!(workers, before);
}

#[test]
fn groups_preserve_ranked_order() {
    let workers = vec![
        summary(Worker::new("w-1", "Zoe").with_region("VIC"), AvailabilityStatus::Available),
        summary(Worker::new("w-2", "Amy").with_region("VIC"), AvailabilityStatus::Partial),
        summary(Worker::new("w-3", "Max").with_region("NSW"), AvailabilityStatus::Unavailable),
        summary(Worker::new("w-4", "Kim"), AvailabilityStatus::Available),
    ];
    let subs = vec![summary(Worker::subcontractor("s-1", "Abe Solar").with_region("VIC"), AvailabilityStatus::Available)];
    let ranked = rank_workers(&workers, &subs, &RankFilters::default());

    let groups = group_by_region(&ranked, "Unassigned");

    let keys: Vec<&str> = groups.iter().map(|g| g.region.as_str()).collect();
    assert_eq!(keys, vec!["NSW", "Unassigned", "VIC"]);
    let vic = groups.iter().find(|g| g.region == "VIC").expect("VIC group");
    assert_eq!(names(&vic.workers), vec!["Zoe", "Amy", "Abe Solar"]);
}

#[test]
fn extended_leave_bucket_only_takes_leave_caused_unavailability() {
    let mut on_leave = internal("w-1", "Lea", AvailabilityStatus::Unavailable);
    on_leave.cause = Some(UnavailabilityKind::Leave);
    on_leave.reason = Some("Long service leave".into());

    let mut seasonal = internal("w-2", "Sam", AvailabilityStatus::Unavailable);
    seasonal.cause = Some(UnavailabilityKind::Seasonal);

    let mut unscheduled = internal("w-3", "Una", AvailabilityStatus::Unavailable);
    unscheduled.scheduled_days = 0;
    unscheduled.reason = Some("No schedule set".into());

    let ranked = rank_workers(
        &[on_leave, seasonal, unscheduled, internal("w-4", "Ava", AvailabilityStatus::Available)],
        &[],
        &RankFilters::default(),
    );
    let (active, leave) = split_extended_leave(&ranked);

    assert_eq!(names(&leave), vec!["Lea"]);
    assert_eq!(names(&active), vec!["Ava", "Sam", "Una"]);
}
