//! Building activity bookkeeping.
//!
//! Growth deltas are never read from "previous count" fields hidden inside the
//! models. Instead the tracker holds the census taken at the start of the last
//! tick and hands out an explicit [`BuildingActivitySnapshot`] diffing it
//! against the current census.

use bevy::prelude::*;

use crate::grid::{CategoryCounts, RciCategory};

/// Immutable counts taken at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CityCensus {
    pub population: u32,
    pub buildings: CategoryCounts,
}

/// What changed since the previous tick, plus the zoning backlog right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildingActivitySnapshot {
    pub new_buildings: CategoryCounts,
    pub new_population: u32,
    pub total_buildings: CategoryCounts,
    pub zoned_unbuilt: CategoryCounts,
}

impl BuildingActivitySnapshot {
    pub fn between(
        previous: &CityCensus,
        current: &CityCensus,
        zoned_unbuilt: CategoryCounts,
    ) -> Self {
        Self {
            new_buildings: current.buildings.saturating_delta(&previous.buildings),
            new_population: current.population.saturating_sub(previous.population),
            total_buildings: current.buildings,
            zoned_unbuilt,
        }
    }
}

#[derive(Resource, Debug, Default, Clone)]
pub struct BuildingActivityTracker {
    last_census: CityCensus,
    snapshot: BuildingActivitySnapshot,
    completed_this_tick: CategoryCounts,
}

impl BuildingActivityTracker {
    /// Diff `current` against the census from the previous tick and make it
    /// the new baseline.
    pub fn begin_tick(
        &mut self,
        current: CityCensus,
        zoned_unbuilt: CategoryCounts,
    ) -> BuildingActivitySnapshot {
        self.snapshot =
            BuildingActivitySnapshot::between(&self.last_census, &current, zoned_unbuilt);
        self.last_census = current;
        self.snapshot
    }

    pub fn record_completion(&mut self, category: RciCategory) {
        self.completed_this_tick.add(category, 1);
    }

    /// New buildings of `category` visible to this tick's growth checks: the
    /// previous tick's completions plus any completed earlier in this tick.
    pub fn new_buildings(&self, category: RciCategory) -> u32 {
        self.snapshot.new_buildings.get(category) + self.completed_this_tick.get(category)
    }

    /// Buildings of `category` existing now, including this tick's completions.
    pub fn total_buildings(&self, category: RciCategory) -> u32 {
        self.snapshot.total_buildings.get(category) + self.completed_this_tick.get(category)
    }

    /// Clear the in-tick counters once every category has had its attempt.
    pub fn end_tick(&mut self) {
        self.completed_this_tick = CategoryCounts::default();
    }

    pub fn snapshot(&self) -> &BuildingActivitySnapshot {
        &self.snapshot
    }

    /// Forget all history ("new game").
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
