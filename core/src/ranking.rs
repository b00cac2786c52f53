//! Ranker/grouper: orders workers for scheduling lists and the board.
//!
//! Internal workers sort by status (available, partial, unavailable) and
//! then by name. Subcontractors follow, sorted by name only. Nothing
//! here mutates its inputs; every call returns new vectors.

use crate::{
    period::{AvailabilityStatus, WorkerPeriodSummary},
    roster::UnavailabilityKind,
    types::{Region, WorkerId},
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Region/state and worker-id selections. An empty selection passes
/// everything through.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RankFilters {
    #[serde(default)]
    pub states:     Vec<Region>,
    #[serde(default)]
    pub worker_ids: Vec<WorkerId>,
}

impl RankFilters {
    pub fn with_states<S: Into<Region>>(states: impl IntoIterator<Item = S>) -> Self {
        Self {
            states: states.into_iter().map(Into::into).collect(),
            worker_ids: Vec::new(),
        }
    }

    pub fn matches(&self, summary: &WorkerPeriodSummary) -> bool {
        let worker = &summary.worker;
        let state_ok = self.states.is_empty()
            || worker
                .region
                .as_ref()
                .is_some_and(|r| self.states.iter().any(|s| s.eq_ignore_ascii_case(r)));
        let id_ok = self.worker_ids.is_empty() || self.worker_ids.contains(&worker.id);
        state_ok && id_ok
    }
}

/// Lowercased base letters: canonical decomposition with the combining
/// marks dropped, so "Émile" collates as "emile".
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Alphabetical name order ignoring case and accents. Names that fold
/// to the same key fall back to lowercase then raw text so the order
/// stays total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

fn compare_internal(a: &WorkerPeriodSummary, b: &WorkerPeriodSummary) -> Ordering {
    a.status
        .compare(b.status)
        .then_with(|| compare_names(a.worker.sort_name(), b.worker.sort_name()))
}

pub fn rank_workers(
    worker_summaries: &[WorkerPeriodSummary],
    subcontractor_summaries: &[WorkerPeriodSummary],
    filters: &RankFilters,
) -> Vec<WorkerPeriodSummary> {
    let mut internal: Vec<WorkerPeriodSummary> = worker_summaries
        .iter()
        .filter(|s| filters.matches(s))
        .cloned()
        .collect();
    internal.sort_by(compare_internal);

    let mut subcontractors: Vec<WorkerPeriodSummary> = subcontractor_summaries
        .iter()
        .filter(|s| filters.matches(s))
        .cloned()
        .map(|mut s| {
            s.status = AvailabilityStatus::Available;
            s
        })
        .collect();
    subcontractors.sort_by(|a, b| compare_names(a.worker.sort_name(), b.worker.sort_name()));

    log::debug!(
        "ranked {} internal + {} subcontractors (of {} + {})",
        internal.len(),
        subcontractors.len(),
        worker_summaries.len(),
        subcontractor_summaries.len()
    );

    internal.extend(subcontractors);
    internal
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionGroup {
    pub region:  Region,
    pub workers: Vec<WorkerPeriodSummary>,
}

/// Group an already-ranked list by region. Groups come out in region
/// name order; each group keeps the ranked order of its members.
pub fn group_by_region(ranked: &[WorkerPeriodSummary], unassigned_label: &str) -> Vec<RegionGroup> {
    let mut groups: BTreeMap<Region, Vec<WorkerPeriodSummary>> = BTreeMap::new();
    for summary in ranked {
        let key = summary
            .worker
            .region
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(unassigned_label)
            .to_string();
        groups.entry(key).or_default().push(summary.clone());
    }
    groups
        .into_iter()
        .map(|(region, workers)| RegionGroup { region, workers })
        .collect()
}

/// Unavailable because of leave (not for lack of a schedule or a
/// seasonal block).
pub fn is_on_extended_leave(summary: &WorkerPeriodSummary) -> bool {
    summary.status == AvailabilityStatus::Unavailable
        && summary.scheduled_days > 0
        && summary.cause == Some(UnavailabilityKind::Leave)
}

/// Split a ranked list into (active, on extended leave), keeping order.
pub fn split_extended_leave(
    ranked: &[WorkerPeriodSummary],
) -> (Vec<WorkerPeriodSummary>, Vec<WorkerPeriodSummary>) {
    let (on_leave, active): (Vec<_>, Vec<_>) =
        ranked.iter().cloned().partition(is_on_extended_leave);
    (active, on_leave)
}
