//! Query and simulation-tick methods for `TestCity`.

use bevy::ecs::event::Events;
use bevy::prelude::*;

use crate::demand::DemandModel;
use crate::economy::CityBudget;
use crate::employment::EmploymentModel;
use crate::grid::{RciCategory, ZoneGrid, ZoneKind};
use crate::growth::{BuildingPlaced, GrowthNotice, GrowthReport, LastGrowthReport};
use crate::new_game::NewGameRequested;
use crate::stats::CityStats;
use crate::time_of_day::GameClock;

use super::TestCity;

impl TestCity {
    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Run N fixed-update ticks by directly executing the `FixedUpdate`
    /// schedule. This bypasses Bevy's time system entirely, which avoids
    /// `MinimalPlugins` not advancing virtual time between updates.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Run exactly enough ticks for `n` growth days.
    pub fn tick_days(&mut self, n: u32) {
        let per_day = self.clock().ticks_per_day;
        self.tick(per_day * n);
    }

    pub fn new_game(&mut self) {
        self.app.world_mut().send_event(NewGameRequested);
        self.tick(1);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn grid(&self) -> &ZoneGrid {
        self.resource::<ZoneGrid>()
    }

    pub fn demand(&self) -> &DemandModel {
        self.resource::<DemandModel>()
    }

    pub fn employment(&self) -> &EmploymentModel {
        self.resource::<EmploymentModel>()
    }

    pub fn stats(&self) -> &CityStats {
        self.resource::<CityStats>()
    }

    pub fn budget(&self) -> &CityBudget {
        self.resource::<CityBudget>()
    }

    pub fn clock(&self) -> &GameClock {
        self.resource::<GameClock>()
    }

    pub fn last_report(&self) -> &GrowthReport {
        &self.resource::<LastGrowthReport>().0
    }

    /// Every `BuildingPlaced` event sent since the harness was built.
    pub fn placed_events(&self) -> Vec<BuildingPlaced> {
        self.resource::<Events<BuildingPlaced>>()
            .iter_current_update_events()
            .cloned()
            .collect()
    }

    pub fn notices(&self) -> Vec<GrowthNotice> {
        self.resource::<Events<GrowthNotice>>()
            .iter_current_update_events()
            .cloned()
            .collect()
    }

    /// Grown buildings of `category`, counted by pivot.
    pub fn building_count(&self, category: RciCategory) -> u32 {
        self.grid().building_counts().get(category)
    }

    pub fn zoned_cell_count(&self, kind: ZoneKind) -> usize {
        self.grid().zoned_positions(kind).len()
    }
}
