use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::activity::BuildingActivitySnapshot;
use crate::employment::EmploymentModel;
use crate::game_params::DemandParams;
use crate::grid::{RciCategory, ZoneType};

use super::state::DemandState;

/// RCI demand levels, updated once per simulated day after employment.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct DemandModel {
    pub residential: DemandState,
    pub commercial: DemandState,
    pub industrial: DemandState,
}

impl Default for DemandModel {
    fn default() -> Self {
        Self::new(&DemandParams::default())
    }
}

impl DemandModel {
    pub fn new(params: &DemandParams) -> Self {
        Self {
            residential: DemandState::new(params.starting_residential),
            commercial: DemandState::new(params.starting_commercial),
            industrial: DemandState::new(params.starting_industrial),
        }
    }

    pub fn state(&self, category: RciCategory) -> &DemandState {
        match category {
            RciCategory::Residential => &self.residential,
            RciCategory::Commercial => &self.commercial,
            RciCategory::Industrial => &self.industrial,
        }
    }

    fn state_mut(&mut self, category: RciCategory) -> &mut DemandState {
        match category {
            RciCategory::Residential => &mut self.residential,
            RciCategory::Commercial => &mut self.commercial,
            RciCategory::Industrial => &mut self.industrial,
        }
    }

    #[inline]
    pub fn can_grow(&self, category: RciCategory) -> bool {
        self.state(category).can_grow()
    }

    /// Whether painting `zone` is currently backed by demand. Residential
    /// zoning is always allowed (jobs gate buildings, not zoning); commercial
    /// and industrial follow their demand level; everything else is always
    /// allowed.
    pub fn can_zone_type_grow(&self, zone: ZoneType) -> bool {
        match zone.zoning_kind() {
            Some(kind) if kind.category != RciCategory::Residential => self.can_grow(kind.category),
            _ => true,
        }
    }

    /// Advance all three levels by one tick. Residential goes first; the other
    /// two read this tick's residential activity. Returns the categories whose
    /// status label changed.
    pub fn update(
        &mut self,
        employment: &EmploymentModel,
        activity: &BuildingActivitySnapshot,
        params: &DemandParams,
    ) -> Vec<RciCategory> {
        let rate = params.sensitivity * params.tick_dt;
        self.update_residential(employment, activity, params, rate);
        self.update_commercial(activity, params, rate);
        self.update_industrial(activity, params, rate);

        RciCategory::ALL
            .into_iter()
            .filter(|&c| self.state_mut(c).refresh_status())
            .collect()
    }

    fn update_residential(
        &mut self,
        employment: &EmploymentModel,
        activity: &BuildingActivitySnapshot,
        params: &DemandParams,
        rate: f32,
    ) {
        let available = employment.available_jobs();
        let target = if available == 0 {
            params.no_jobs_target
        } else {
            let mut target = params.starting_residential;
            if activity.zoned_unbuilt.get(RciCategory::Industrial) > 0
                && activity.zoned_unbuilt.get(RciCategory::Residential) > 0
            {
                target += params.mixed_zoning_boost;
            }
            if available > params.plentiful_jobs_threshold {
                target += params.plentiful_jobs_boost;
            }
            target
        };
        self.residential.approach(target, rate);
    }

    fn update_commercial(
        &mut self,
        activity: &BuildingActivitySnapshot,
        params: &DemandParams,
        rate: f32,
    ) {
        let mut delta = 0.0;
        if activity.zoned_unbuilt.get(RciCategory::Residential) > 0 {
            delta += params.commercial_zoning_pull;
        }
        delta += params.commercial_per_new_residential
            * activity.new_buildings.get(RciCategory::Residential) as f32;
        if delta == 0.0 {
            delta = -self.commercial.level * params.decay_rate;
        }
        self.commercial.accumulate(delta * rate);
    }

    fn update_industrial(
        &mut self,
        activity: &BuildingActivitySnapshot,
        params: &DemandParams,
        rate: f32,
    ) {
        let mut target = params.starting_industrial
            + params.industrial_per_new_residential
                * activity.new_buildings.get(RciCategory::Residential) as f32;
        if activity.total_buildings.get(RciCategory::Industrial)
            < params.early_industry_building_limit
        {
            target = target.max(params.early_industry_floor);
        }
        self.industrial.approach(target, rate);
    }

    /// One-line summary, e.g. `R 12.0 (Balanced) | C 4.0 (Balanced) | I 25.0 (Moderate)`.
    pub fn summary(&self) -> String {
        let part = |c: RciCategory| {
            let s = self.state(c);
            format!("{} {:.1} ({})", &c.name()[..1], s.level, s.status.label())
        };
        format!(
            "{} | {} | {}",
            part(RciCategory::Residential),
            part(RciCategory::Commercial),
            part(RciCategory::Industrial)
        )
    }
}
