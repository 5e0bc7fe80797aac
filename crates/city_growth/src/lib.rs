use bevy::prelude::*;

pub mod activity;
pub mod archetypes;
pub mod collaborators;
pub mod config;
pub mod demand;
pub mod economy;
pub mod employment;
pub mod error;
pub mod game_params;
pub mod grid;
pub mod growth;
pub mod new_game;
pub mod sections;
pub mod sim_rng;
pub mod simulation_sets;
pub mod stats;
pub mod time_of_day;
pub mod zoning;


pub use simulation_sets::SimulationSet;

use activity::BuildingActivityTracker;
use archetypes::ArchetypeTable;
use demand::DemandModel;
use economy::CityBudget;
use employment::EmploymentModel;
use error::ConfigError;
use game_params::GameParams;
use grid::ZoneGrid;
use growth::{BuildingPlaced, GrowthNotice, LastGrowthReport};
use new_game::NewGameRequested;
use sections::ZoneSections;
use sim_rng::SimRng;
use stats::CityStats;
use time_of_day::GameClock;
use zoning::ZoneRequest;

/// Registers the growth engine: resources built from validated
/// [`GameParams`], the zoning and growth events, and the FixedUpdate systems.
///
/// Construction validates everything up front, so an app never starts with a
/// half-configured city.
pub struct GrowthSimulationPlugin {
    params: GameParams,
    archetypes: ArchetypeTable,
    grid: ZoneGrid,
}

impl GrowthSimulationPlugin {
    pub fn new(params: GameParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let archetypes = ArchetypeTable::from_entries(&params.archetypes)?;
        let grid = ZoneGrid::new(params.grid.width, params.grid.height)?;
        Ok(Self {
            params,
            archetypes,
            grid,
        })
    }

    pub fn params(&self) -> &GameParams {
        &self.params
    }
}

impl Plugin for GrowthSimulationPlugin {
    fn build(&self, app: &mut App) {
        let params = &self.params;
        app.insert_resource(self.grid.clone())
            .insert_resource(self.archetypes.clone())
            .insert_resource(EmploymentModel::new(&params.employment))
            .insert_resource(DemandModel::new(&params.demand))
            .insert_resource(CityStats::new(&params.utilities))
            .insert_resource(CityBudget::new(&params.economy))
            .insert_resource(GameClock::new(params.clock.ticks_per_day))
            .insert_resource(SimRng::from_seed_u64(params.seed))
            .insert_resource(params.clone())
            .init_resource::<ZoneSections>()
            .init_resource::<BuildingActivityTracker>()
            .init_resource::<LastGrowthReport>()
            .add_event::<ZoneRequest>()
            .add_event::<NewGameRequested>()
            .add_event::<BuildingPlaced>()
            .add_event::<GrowthNotice>();

        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::PreSim,
                SimulationSet::Simulation,
                SimulationSet::PostSim,
            )
                .chain(),
        )
        .add_systems(Update, time_of_day::sync_fixed_timestep)
        .add_systems(
            FixedUpdate,
            (
                new_game::apply_new_game,
                time_of_day::tick_game_clock,
                zoning::apply_zone_requests,
            )
                .chain()
                .in_set(SimulationSet::PreSim),
        )
        .add_systems(
            FixedUpdate,
            growth::run_growth_day
                .run_if(time_of_day::day_started)
                .in_set(SimulationSet::Simulation),
        )
        .add_systems(
            FixedUpdate,
            growth::log_growth_day
                .run_if(time_of_day::day_started)
                .in_set(SimulationSet::PostSim),
        );
    }
}
