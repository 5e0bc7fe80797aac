use bevy::prelude::*;

use crate::activity::BuildingActivityTracker;
use crate::archetypes::ArchetypeTable;
use crate::demand::DemandModel;
use crate::economy::CityBudget;
use crate::employment::EmploymentModel;
use crate::game_params::GameParams;
use crate::grid::ZoneGrid;
use crate::sections::ZoneSections;
use crate::sim_rng::SimRng;
use crate::stats::CityStats;
use crate::time_of_day::GameClock;

use super::outcome::{GrowthReport, Placement, PrecheckFailure};
use super::scheduler::GrowthScheduler;

/// A zoned section became a building. Renderers listen for this to
/// materialize the footprint.
#[derive(Event, Debug, Clone)]
pub struct BuildingPlaced {
    pub day: u32,
    pub placement: Placement,
}

/// User-facing notice that growth stalled for a reason the player can fix.
#[derive(Event, Debug, Clone)]
pub struct GrowthNotice {
    pub day: u32,
    pub reason: PrecheckFailure,
}

/// Report of the most recent growth day.
#[derive(Resource, Debug, Default, Clone)]
pub struct LastGrowthReport(pub GrowthReport);

#[allow(clippy::too_many_arguments)]
pub fn run_growth_day(
    clock: Res<GameClock>,
    params: Res<GameParams>,
    archetypes: Res<ArchetypeTable>,
    mut grid: ResMut<ZoneGrid>,
    mut sections: ResMut<ZoneSections>,
    mut employment: ResMut<EmploymentModel>,
    mut demand: ResMut<DemandModel>,
    mut tracker: ResMut<BuildingActivityTracker>,
    mut stats: ResMut<CityStats>,
    mut budget: ResMut<CityBudget>,
    mut rng: ResMut<SimRng>,
    mut last: ResMut<LastGrowthReport>,
    mut placed: EventWriter<BuildingPlaced>,
    mut notices: EventWriter<GrowthNotice>,
) {
    let report = GrowthScheduler {
        grid: &mut grid,
        sections: &mut sections,
        employment: &mut employment,
        demand: &mut demand,
        tracker: &mut tracker,
        archetypes: &archetypes,
        params: &params,
        stats: &mut *stats,
        funds: &mut *budget,
        rng: &mut rng.0,
    }
    .tick(clock.day);

    for placement in report.placements() {
        placed.send(BuildingPlaced {
            day: report.day,
            placement: placement.clone(),
        });
    }
    if let Some(reason) = report.utility_shortage() {
        warn!("Day {}: {reason}, no buildings will grow", report.day);
        notices.send(GrowthNotice {
            day: report.day,
            reason,
        });
    } else if let Some(reason) = report.funds_shortage() {
        info!("Day {}: {reason}", report.day);
        notices.send(GrowthNotice {
            day: report.day,
            reason,
        });
    }

    last.0 = report;
}

/// Per-day summary at debug level.
pub fn log_growth_day(
    last: Res<LastGrowthReport>,
    demand: Res<DemandModel>,
    employment: Res<EmploymentModel>,
    stats: Res<CityStats>,
) {
    let report = &last.0;
    debug!(
        "Day {}: {} placed | pop {} | jobs open {} | unemployment {:.1}% | {}",
        report.day,
        report.placed_count(),
        stats.population,
        employment.available_jobs(),
        employment.unemployment_rate(),
        demand.summary()
    );
}
