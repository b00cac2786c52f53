//! Unavailability resolver: does any leave or seasonal range hit a date?
//!
//! Overlapping ranges form a union: any hit marks the date unavailable.
//! The first non-empty reason in input order is surfaced. A partial-day
//! time window is carried on the hit but never demotes the day below
//! fully unavailable.

use crate::roster::{UnavailabilityKind, UnavailabilityRange};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UnavailabilityHit {
    pub is_unavailable: bool,
    pub reason:         Option<String>,
    /// Kind of the range that supplied the reason, or of the first hit
    /// when no range has a reason.
    pub kind:           Option<UnavailabilityKind>,
    /// Time window of the first hit, when it is a partial-day range.
    pub time_window:    Option<(NaiveTime, NaiveTime)>,
}

impl UnavailabilityHit {
    pub fn clear() -> Self {
        Self::default()
    }
}

pub fn resolve_unavailability<'a>(
    date: NaiveDate,
    ranges: impl IntoIterator<Item = &'a UnavailabilityRange>,
) -> UnavailabilityHit {
    let mut hit = UnavailabilityHit::clear();

    for range in ranges.into_iter().filter(|r| r.covers(date)) {
        if !hit.is_unavailable {
            hit.is_unavailable = true;
            hit.kind = Some(range.kind);
            hit.time_window = range.time_window();
        }
        if let Some(reason) = range.reason_text() {
            hit.reason = Some(reason.to_string());
            hit.kind = Some(range.kind);
            break;
        }
    }

    hit
}
