//! Builder methods for zoning, buildings and utilities.

use crate::archetypes::ArchetypeTable;
use crate::collaborators::CityStatsSink;
use crate::demand::{DemandModel, DemandState};
use crate::economy::CityBudget;
use crate::grid::{RciCategory, ZoneGrid, ZoneKind, ZoneType};
use crate::stats::CityStats;
use crate::zoning::ZoneRequest;

use super::TestCity;

impl TestCity {
    /// Set the city treasury to the given amount.
    pub fn with_budget(mut self, treasury: f64) -> Self {
        self.app.world_mut().resource_mut::<CityBudget>().treasury = treasury;
        self
    }

    /// Zone one cell for free, bypassing the funds check.
    pub fn with_zone(self, x: usize, y: usize, kind: ZoneKind) -> Self {
        self.with_zone_rect(x, y, x, y, kind)
    }

    /// Zone a rectangular area (inclusive) row by row, for free.
    pub fn with_zone_rect(
        mut self,
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
        kind: ZoneKind,
    ) -> Self {
        {
            let mut grid = self.app.world_mut().resource_mut::<ZoneGrid>();
            for y in y0..=y1 {
                for x in x0..=x1 {
                    grid.set_zone(x, y, ZoneType::Zoned(kind))
                        .expect("zone rect inside the grid");
                }
            }
        }
        self
    }

    /// Place a grown building of `kind` with its pivot at (x, y) and register
    /// it with the city stats, as if it had grown on an earlier day.
    pub fn with_building(mut self, x: usize, y: usize, kind: ZoneKind, footprint: u8) -> Self {
        let side = footprint as usize;
        let cells: Vec<(usize, usize)> = (0..side)
            .flat_map(|dy| (0..side).map(move |dx| (x + dx, y + dy)))
            .collect();
        let world = self.app.world_mut();
        world
            .resource_mut::<ZoneGrid>()
            .mark_built(&cells, kind, footprint);
        let attributes = *world.resource::<ArchetypeTable>().get(kind);
        world
            .resource_mut::<CityStats>()
            .register_building_placement(kind, &attributes);
        self
    }

    pub fn with_power(mut self, output: f32) -> Self {
        self.app.world_mut().resource_mut::<CityStats>().power_output = output;
        self
    }

    pub fn with_water(mut self, output: f32) -> Self {
        self.app.world_mut().resource_mut::<CityStats>().water_output = output;
        self
    }

    /// Override one demand level.
    pub fn with_demand(mut self, category: RciCategory, level: f32) -> Self {
        let state = DemandState::new(level);
        {
            let mut demand = self.app.world_mut().resource_mut::<DemandModel>();
            match category {
                RciCategory::Residential => demand.residential = state,
                RciCategory::Commercial => demand.commercial = state,
                RciCategory::Industrial => demand.industrial = state,
            }
        }
        self
    }

    /// Queue a zoning request; it is applied on the next tick.
    pub fn request(&mut self, request: ZoneRequest) {
        self.app.world_mut().send_event(request);
    }
}
