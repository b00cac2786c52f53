//! Load colorizer: maps assigned-hours intensity onto a three-stop
//! gradient. Independent of availability status: an available day can
//! still render hot when heavily booked.

use crate::{
    config::GradientConfig,
    error::{BoardError, BoardResult},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GradientSegment {
    /// Between the available (0%) and partial (50%) stops.
    Lower,
    /// Between the partial (50%) and booked (100%) stops.
    Upper,
}

/// Where a ratio lands on the gradient. `local` is the interpolation
/// factor within `segment`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GradientPosition {
    pub position: f64,
    pub segment:  GradientSegment,
    pub local:    f64,
}

/// Assigned hours over capacity, clamped to [0, 1]. Hours booked on a
/// day with no capacity count as fully booked.
pub fn assigned_hours_ratio(assigned_hours: f64, capacity_hours: f64) -> f64 {
    if !assigned_hours.is_finite() || assigned_hours <= 0.0 {
        return 0.0;
    }
    if capacity_hours.is_nan() || capacity_hours <= 0.0 {
        return 1.0;
    }
    (assigned_hours / capacity_hours).clamp(0.0, 1.0)
}

pub fn color_for_ratio(assigned_hours_ratio: f64) -> GradientPosition {
    let position = if assigned_hours_ratio.is_nan() {
        0.0
    } else {
        assigned_hours_ratio.clamp(0.0, 1.0)
    };
    if position <= 0.5 {
        GradientPosition { position, segment: GradientSegment::Lower, local: position * 2.0 }
    } else {
        GradientPosition { position, segment: GradientSegment::Upper, local: (position - 0.5) * 2.0 }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rrggbb` (leading `#` optional).
    pub fn parse_hex(value: &str) -> BoardResult<Self> {
        let hex = value.trim().trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };
        match (hex.len(), channel(0), channel(2), channel(4)) {
            (6, Some(r), Some(g), Some(b)) => Ok(Self { r, g, b }),
            _ => Err(BoardError::InvalidConfig {
                reason: format!("'{value}' is not a #rrggbb colour"),
            }),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn lerp(self, to: Self, t: f64) -> Self {
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Self {
            r: mix(self.r, to.r),
            g: mix(self.g, to.g),
            b: mix(self.b, to.b),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Gradient {
    pub available: Rgb,
    pub partial:   Rgb,
    pub booked:    Rgb,
}

impl Gradient {
    pub fn from_config(config: &GradientConfig) -> BoardResult<Self> {
        Ok(Self {
            available: Rgb::parse_hex(&config.available)?,
            partial:   Rgb::parse_hex(&config.partial)?,
            booked:    Rgb::parse_hex(&config.booked)?,
        })
    }

    pub fn color_at(&self, position: GradientPosition) -> Rgb {
        match position.segment {
            GradientSegment::Lower => self.available.lerp(self.partial, position.local),
            GradientSegment::Upper => self.partial.lerp(self.booked, position.local),
        }
    }

    pub fn color_for_ratio(&self, ratio: f64) -> Rgb {
        self.color_at(color_for_ratio(ratio))
    }
}
