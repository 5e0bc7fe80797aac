//! Wholesale reset of the growth state ("new game").

use bevy::prelude::*;

use crate::activity::BuildingActivityTracker;
use crate::demand::DemandModel;
use crate::economy::CityBudget;
use crate::employment::EmploymentModel;
use crate::game_params::GameParams;
use crate::grid::ZoneGrid;
use crate::growth::LastGrowthReport;
use crate::sections::ZoneSections;
use crate::sim_rng::SimRng;
use crate::stats::CityStats;
use crate::time_of_day::GameClock;

/// Request to wipe the city and start over with the current parameters.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct NewGameRequested;

#[allow(clippy::too_many_arguments)]
pub fn apply_new_game(
    mut requests: EventReader<NewGameRequested>,
    params: Res<GameParams>,
    mut grid: ResMut<ZoneGrid>,
    mut sections: ResMut<ZoneSections>,
    mut employment: ResMut<EmploymentModel>,
    mut demand: ResMut<DemandModel>,
    mut tracker: ResMut<BuildingActivityTracker>,
    mut stats: ResMut<CityStats>,
    mut budget: ResMut<CityBudget>,
    mut clock: ResMut<GameClock>,
    mut rng: ResMut<SimRng>,
    mut last: ResMut<LastGrowthReport>,
) {
    if requests.read().count() == 0 {
        return;
    }
    grid.reset();
    *sections = ZoneSections::default();
    *employment = EmploymentModel::new(&params.employment);
    *demand = DemandModel::new(&params.demand);
    tracker.reset();
    *stats = CityStats::new(&params.utilities);
    *budget = CityBudget::new(&params.economy);
    let (speed, paused) = (clock.speed, clock.paused);
    *clock = GameClock {
        speed,
        paused,
        ..GameClock::new(params.clock.ticks_per_day)
    };
    rng.reseed(params.seed);
    *last = LastGrowthReport::default();
    info!("New game started on a {}x{} grid", grid.width(), grid.height());
}
