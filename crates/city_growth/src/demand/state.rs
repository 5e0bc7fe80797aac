use serde::{Deserialize, Serialize};

pub const DEMAND_MIN: f32 = -100.0;
pub const DEMAND_MAX: f32 = 100.0;

/// Coarse label for a demand level, for UI and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DemandStatus {
    VeryHigh,
    High,
    Moderate,
    #[default]
    Balanced,
    Low,
    VeryLow,
    Oversupplied,
}

impl DemandStatus {
    /// Thresholds at 75 / 50 / 25 / -25 / -50 / -75. Upper thresholds are
    /// inclusive, lower thresholds exclusive, so exactly 25 is Moderate and
    /// exactly -25 is Low.
    pub fn from_level(level: f32) -> Self {
        if level >= 75.0 {
            Self::VeryHigh
        } else if level >= 50.0 {
            Self::High
        } else if level >= 25.0 {
            Self::Moderate
        } else if level > -25.0 {
            Self::Balanced
        } else if level > -50.0 {
            Self::Low
        } else if level > -75.0 {
            Self::VeryLow
        } else {
            Self::Oversupplied
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Balanced => "Balanced",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
            Self::Oversupplied => "Oversupplied",
        }
    }
}

/// Smoothed growth pressure for one RCI category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandState {
    pub level: f32,
    /// Change in `level` during the last update.
    pub trend: f32,
    pub status: DemandStatus,
}

impl DemandState {
    pub fn new(level: f32) -> Self {
        let level = level.clamp(DEMAND_MIN, DEMAND_MAX);
        Self {
            level,
            trend: 0.0,
            status: DemandStatus::from_level(level),
        }
    }

    #[inline]
    pub fn can_grow(&self) -> bool {
        self.level > 0.0
    }

    /// Move `level` a fraction `rate` of the way toward `target`.
    pub(crate) fn approach(&mut self, target: f32, rate: f32) {
        let t = rate.clamp(0.0, 1.0);
        self.set_level(self.level + (target - self.level) * t);
    }

    /// Add `delta` to `level`.
    pub(crate) fn accumulate(&mut self, delta: f32) {
        self.set_level(self.level + delta);
    }

    fn set_level(&mut self, next: f32) {
        let next = next.clamp(DEMAND_MIN, DEMAND_MAX);
        self.trend = next - self.level;
        self.level = next;
    }

    pub(crate) fn refresh_status(&mut self) -> bool {
        let status = DemandStatus::from_level(self.level);
        let changed = status != self.status;
        self.status = status;
        changed
    }
}
