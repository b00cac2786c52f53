//! Worker availability engine for field-service scheduling.
//!
//! Turns plain roster records (workers, weekly schedule blocks, leave and
//! seasonal ranges, assigned hours) into per-day verdicts, per-period
//! statuses, ranked scheduling lists and a paginated status board.

pub mod board;
pub mod clock;
pub mod config;
pub mod day_classifier;
pub mod demo;
pub mod engine;
pub mod error;
pub mod load;
pub mod name_generator;
pub mod period;
pub mod ranking;
pub mod rng;
pub mod roster;
pub mod schedule_index;
pub mod snapshot;
pub mod types;
pub mod unavailability;

pub use day_classifier::resolve_day;
pub use load::color_for_ratio;
pub use period::summarize_period;
pub use ranking::rank_workers;
