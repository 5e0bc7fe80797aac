use std::fmt;

use crate::grid::{RciCategory, ZoneKind};

/// Why a zoning kind did not grow this tick. Expected and non-fatal: the
/// attempt is simply retried next day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecheckFailure {
    /// No complete square of this kind is zoned and unbuilt.
    NoSection,
    /// Residential growth needs at least one open job.
    NoAvailableJobs,
    DemandTooLow(RciCategory),
    /// Commercial and industrial growth need residents, existing or new.
    NoResidentialSupport,
    InsufficientPower,
    InsufficientWater,
    /// The treasury cannot cover this archetype's construction cost.
    InsufficientFunds,
    /// A utility shortage found for an earlier kind stopped the whole tick.
    HaltedByUtilityShortage,
}

impl PrecheckFailure {
    /// Shortages the player should be told about.
    pub fn is_utility_shortage(self) -> bool {
        matches!(
            self,
            PrecheckFailure::InsufficientPower | PrecheckFailure::InsufficientWater
        )
    }
}

impl fmt::Display for PrecheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecheckFailure::NoSection => write!(f, "no zoned section available"),
            PrecheckFailure::NoAvailableJobs => write!(f, "no jobs available for new residents"),
            PrecheckFailure::DemandTooLow(c) => write!(f, "{} demand too low", c.name()),
            PrecheckFailure::NoResidentialSupport => {
                write!(f, "no residents to support commerce or industry")
            }
            PrecheckFailure::InsufficientPower => write!(f, "not enough power"),
            PrecheckFailure::InsufficientWater => write!(f, "not enough water"),
            PrecheckFailure::InsufficientFunds => write!(f, "not enough money to build"),
            PrecheckFailure::HaltedByUtilityShortage => {
                write!(f, "growth halted by a utility shortage")
            }
        }
    }
}

impl std::error::Error for PrecheckFailure {}

/// One building grown from a zoned section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub kind: ZoneKind,
    /// Footprint cells, pivot first.
    pub cells: Vec<(usize, usize)>,
    pub pivot: (usize, usize),
    pub footprint: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthAttempt {
    pub kind: ZoneKind,
    pub outcome: Result<Placement, PrecheckFailure>,
}

/// Result of one growth tick: one attempt per zoning kind, in growth order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrowthReport {
    pub day: u32,
    pub attempts: Vec<GrowthAttempt>,
    /// Categories whose demand status label changed this tick.
    pub status_changes: Vec<RciCategory>,
}

impl GrowthReport {
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.attempts.iter().filter_map(|a| a.outcome.as_ref().ok())
    }

    pub fn placed_count(&self) -> usize {
        self.placements().count()
    }

    pub fn outcome(&self, kind: ZoneKind) -> Option<&Result<Placement, PrecheckFailure>> {
        self.attempts
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| &a.outcome)
    }

    /// The failure for `kind`, if it did not grow.
    pub fn failure(&self, kind: ZoneKind) -> Option<PrecheckFailure> {
        self.outcome(kind).and_then(|o| o.as_ref().err().copied())
    }

    /// The shortage that halted this tick, if any.
    pub fn utility_shortage(&self) -> Option<PrecheckFailure> {
        self.attempts
            .iter()
            .filter_map(|a| a.outcome.as_ref().err().copied())
            .find(|f| f.is_utility_shortage())
    }

    pub fn funds_shortage(&self) -> Option<PrecheckFailure> {
        self.attempts
            .iter()
            .filter_map(|a| a.outcome.as_ref().err().copied())
            .find(|&f| f == PrecheckFailure::InsufficientFunds)
    }
}
