//! Seven-slot lookup of a worker's active weekly schedule blocks.

use crate::{
    roster::ScheduleBlock,
    types::{day_of_week, DAYS_PER_WEEK},
};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleIndex {
    slots: [Option<ScheduleBlock>; DAYS_PER_WEEK],
}

impl ScheduleIndex {
    /// Index the active blocks. Inactive rows and out-of-range days are
    /// ignored. When a day has several active blocks the first one is
    /// kept; the rest are redundant.
    pub fn build<'a>(blocks: impl IntoIterator<Item = &'a ScheduleBlock>) -> Self {
        let mut slots: [Option<ScheduleBlock>; DAYS_PER_WEEK] = Default::default();
        for block in blocks.into_iter().filter(|b| b.is_active) {
            let Some(slot) = slots.get_mut(usize::from(block.day_of_week)) else {
                log::warn!(
                    "worker={} schedule block has day_of_week {} outside 0..=6, ignored",
                    block.worker_id, block.day_of_week
                );
                continue;
            };
            if let Some(existing) = slot.as_ref() {
                log::debug!(
                    "worker={} duplicate active block for day {}, keeping {}-{}",
                    existing.worker_id, block.day_of_week, existing.start_time, existing.end_time
                );
                continue;
            }
            *slot = Some(block.clone());
        }
        Self { slots }
    }

    pub fn block_for(&self, date: NaiveDate) -> Option<&ScheduleBlock> {
        self.slots[usize::from(day_of_week(date))].as_ref()
    }

    pub fn is_scheduled(&self, date: NaiveDate) -> bool {
        self.block_for(date).is_some()
    }

    /// Hours of capacity on `date`: the block's duration, or
    /// `fallback_hours` when the block has no positive duration.
    /// Zero when not scheduled.
    pub fn capacity_hours(&self, date: NaiveDate, fallback_hours: f64) -> f64 {
        match self.block_for(date) {
            None => 0.0,
            Some(block) => {
                let hours = block.duration_hours();
                if hours > 0.0 { hours } else { fallback_hours }
            }
        }
    }

    pub fn scheduled_day_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}
