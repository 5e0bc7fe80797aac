use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::archetypes::ZoneAttributes;
use crate::collaborators::{CityStatsSink, UtilityGrid};
use crate::game_params::UtilityParams;
use crate::grid::{CategoryCounts, ZoneKind};

/// Running totals fed by building placements and demolitions.
#[derive(Resource, Default, Debug, Clone, Serialize, Deserialize)]
pub struct CityStats {
    pub population: u32,
    pub jobs: u32,
    /// Sum of the happiness contributions of every standing building.
    pub happiness: f32,
    pub power_output: f32,
    pub power_consumption: f32,
    pub water_output: f32,
    pub water_consumption: f32,
    pub buildings: CategoryCounts,
}

impl CityStats {
    pub fn new(utilities: &UtilityParams) -> Self {
        Self {
            power_output: utilities.power_output,
            water_output: utilities.water_output,
            ..Default::default()
        }
    }

    /// Average happiness per building, 0 for an empty city.
    pub fn average_happiness(&self) -> f32 {
        match self.buildings.total() {
            0 => 0.0,
            n => self.happiness / n as f32,
        }
    }

    pub fn power_surplus(&self) -> f32 {
        self.power_output - self.power_consumption
    }

    pub fn water_surplus(&self) -> f32 {
        self.water_output - self.water_consumption
    }
}

impl CityStatsSink for CityStats {
    fn register_building_placement(&mut self, kind: ZoneKind, attributes: &ZoneAttributes) {
        self.population += attributes.population;
        self.jobs += attributes.jobs;
        self.happiness += attributes.happiness;
        self.power_consumption += attributes.power_consumption;
        self.water_consumption += attributes.water_consumption;
        self.buildings.add(kind.category, 1);
    }

    fn unregister_building(&mut self, kind: ZoneKind, attributes: &ZoneAttributes) {
        self.population = self.population.saturating_sub(attributes.population);
        self.jobs = self.jobs.saturating_sub(attributes.jobs);
        self.happiness -= attributes.happiness;
        self.power_consumption = (self.power_consumption - attributes.power_consumption).max(0.0);
        self.water_consumption = (self.water_consumption - attributes.water_consumption).max(0.0);
        let slot = &mut self.buildings.0[kind.category.index()];
        *slot = slot.saturating_sub(1);
    }

    fn population(&self) -> u32 {
        self.population
    }
}

impl UtilityGrid for CityStats {
    fn power_available(&self) -> bool {
        self.power_output > self.power_consumption
    }

    fn water_available(&self) -> bool {
        self.water_output > self.water_consumption
    }
}
