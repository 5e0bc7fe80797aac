use bevy::log::{debug, info};
use rand::Rng;

use crate::activity::{BuildingActivityTracker, CityCensus};
use crate::archetypes::ArchetypeTable;
use crate::collaborators::{CityStatsSink, Funds, UtilityGrid};
use crate::demand::DemandModel;
use crate::employment::EmploymentModel;
use crate::game_params::GameParams;
use crate::grid::{RciCategory, ZoneGrid, ZoneKind, ZoneType};
use crate::sections::{pick_section, ZoneSections};

use super::outcome::{GrowthAttempt, GrowthReport, Placement, PrecheckFailure};

/// Runs one simulated day of growth against borrowed city state.
///
/// The scheduler owns nothing; the caller (an ECS system or a test) lends it
/// every model for the duration of [`GrowthScheduler::tick`], which runs the
/// whole employment → demand → sections → placement sequence to completion.
pub struct GrowthScheduler<'a, S, F: ?Sized, R: ?Sized> {
    pub grid: &'a mut ZoneGrid,
    pub sections: &'a mut ZoneSections,
    pub employment: &'a mut EmploymentModel,
    pub demand: &'a mut DemandModel,
    pub tracker: &'a mut BuildingActivityTracker,
    pub archetypes: &'a ArchetypeTable,
    pub params: &'a GameParams,
    pub stats: &'a mut S,
    /// Pays the construction cost of each grown building.
    pub funds: &'a mut F,
    pub rng: &'a mut R,
}

impl<S, F, R> GrowthScheduler<'_, S, F, R>
where
    S: CityStatsSink + UtilityGrid,
    F: Funds + ?Sized,
    R: Rng + ?Sized,
{
    pub fn tick(&mut self, day: u32) -> GrowthReport {
        let census = CityCensus {
            population: self.stats.population(),
            buildings: self.grid.building_counts(),
        };
        let snapshot = self.tracker.begin_tick(census, self.grid.zoned_counts());

        self.employment.update(
            census.population,
            &snapshot,
            self.archetypes,
            &self.params.employment,
        );
        let status_changes = self
            .demand
            .update(self.employment, &snapshot, &self.params.demand);
        for &category in &status_changes {
            info!(
                "{} demand is now {}",
                category.name(),
                self.demand.state(category).status.label()
            );
        }

        self.sections.recompute(self.grid);

        let mut attempts = Vec::with_capacity(ZoneKind::ALL.len());
        let mut halted = false;
        for kind in ZoneKind::ALL {
            let outcome = if halted {
                Err(PrecheckFailure::HaltedByUtilityShortage)
            } else {
                let outcome = self.try_grow(kind);
                if outcome.as_ref().is_err_and(|f| f.is_utility_shortage()) {
                    halted = true;
                }
                outcome
            };
            attempts.push(GrowthAttempt { kind, outcome });
        }
        self.tracker.end_tick();

        GrowthReport {
            day,
            attempts,
            status_changes,
        }
    }

    fn try_grow(&mut self, kind: ZoneKind) -> Result<Placement, PrecheckFailure> {
        if !self.sections.has_any(kind) {
            return Err(PrecheckFailure::NoSection);
        }
        self.check_category(kind.category)?;
        self.check_utilities()?;
        let attributes = *self.archetypes.get(kind);
        if !self.funds.can_afford(attributes.construction_cost) {
            return Err(PrecheckFailure::InsufficientFunds);
        }

        let section = pick_section(self.sections.get(kind), &mut *self.rng)
            .ok_or(PrecheckFailure::NoSection)?;
        for &(x, y) in &section.cells {
            let zone = self.grid.get_zone(x, y);
            assert_eq!(
                zone,
                ZoneType::Zoned(kind),
                "section of {} contains ({x}, {y}) which is {zone:?}",
                kind.label(),
            );
        }

        let footprint = section.footprint();
        let placement = Placement {
            kind,
            pivot: section.anchor(),
            cells: section.cells.clone(),
            footprint,
        };
        self.grid.mark_built(&placement.cells, kind, footprint);
        self.funds.spend(attributes.construction_cost);
        self.stats.register_building_placement(kind, &attributes);
        self.tracker.record_completion(kind.category);
        debug!(
            "placed {} {}x{} at {:?}",
            kind.label(),
            footprint,
            footprint,
            placement.pivot
        );
        Ok(placement)
    }

    fn check_category(&self, category: RciCategory) -> Result<(), PrecheckFailure> {
        match category {
            RciCategory::Residential => {
                if self.employment.available_jobs() == 0 {
                    return Err(PrecheckFailure::NoAvailableJobs);
                }
            }
            RciCategory::Commercial | RciCategory::Industrial => {
                let residents = self.tracker.total_buildings(RciCategory::Residential) > 0
                    || self.tracker.new_buildings(RciCategory::Residential) > 0;
                if !residents {
                    return Err(PrecheckFailure::NoResidentialSupport);
                }
            }
        }
        if !self.demand.can_grow(category) {
            return Err(PrecheckFailure::DemandTooLow(category));
        }
        Ok(())
    }

    fn check_utilities(&self) -> Result<(), PrecheckFailure> {
        if !self.stats.power_available() {
            return Err(PrecheckFailure::InsufficientPower);
        }
        if !self.stats.water_available() {
            return Err(PrecheckFailure::InsufficientWater);
        }
        Ok(())
    }
}
