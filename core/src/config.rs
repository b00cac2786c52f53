//! Board configuration, loaded from `<data_dir>/board.json`.

use crate::{
    clock::WeekStart,
    error::{BoardError, BoardResult},
    load::Gradient,
};
use serde::{Deserialize, Serialize};

/// Hex colour stops for the assigned-hours gradient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradientConfig {
    /// 0% booked.
    pub available: String,
    /// 50% booked; shares the seasonal/partial colour.
    pub partial:   String,
    /// 100% booked; shares the leave colour.
    pub booked:    String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardConfig {
    /// Capacity used when a scheduled day has no usable block duration.
    pub standard_daily_hours: f64,
    #[serde(default)]
    pub week_starts_on: WeekStart,
    pub board_window_days: u32,
    pub board_page_days: u32,
    pub rotation_interval_secs: u64,
    pub gradient: GradientConfig,
    #[serde(default = "default_unassigned_label")]
    pub unassigned_region_label: String,
}

fn default_unassigned_label() -> String {
    "Unassigned".into()
}

impl BoardConfig {
    /// Load from the data/ directory.
    /// In tests, use BoardConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/board.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: BoardConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self {
            standard_daily_hours:   8.0,
            week_starts_on:         WeekStart::Monday,
            board_window_days:      60,
            board_page_days:        30,
            rotation_interval_secs: 30,
            gradient: GradientConfig {
                available: "#22c55e".into(),
                partial:   "#f59e0b".into(),
                booked:    "#ef4444".into(),
            },
            unassigned_region_label: default_unassigned_label(),
        }
    }

    pub fn validate(&self) -> BoardResult<()> {
        if self.board_page_days == 0 || self.board_window_days == 0 {
            return Err(BoardError::InvalidConfig {
                reason: "board window and page length must be at least one day".into(),
            });
        }
        if self.board_page_days > self.board_window_days {
            return Err(BoardError::InvalidConfig {
                reason: format!(
                    "page of {} days does not fit a {}-day window",
                    self.board_page_days, self.board_window_days
                ),
            });
        }
        if self.standard_daily_hours.is_nan() || self.standard_daily_hours <= 0.0 {
            return Err(BoardError::InvalidConfig {
                reason: format!("standard_daily_hours must be positive, got {}", self.standard_daily_hours),
            });
        }
        Gradient::from_config(&self.gradient)?;
        Ok(())
    }

    /// Number of pages the board window splits into. A trailing short
    /// page counts as a page.
    pub fn board_page_count(&self) -> u32 {
        self.board_window_days.div_ceil(self.board_page_days.max(1))
    }
}
