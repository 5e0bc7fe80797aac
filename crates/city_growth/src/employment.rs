//! Job supply and consumption.
//!
//! Commercial and industrial buildings create jobs; newly arrived residents
//! take them. Residential buildings may declare jobs too (home businesses),
//! but those are kept apart and never count toward city-wide availability.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::activity::BuildingActivitySnapshot;
use crate::archetypes::ArchetypeTable;
use crate::game_params::EmploymentParams;
use crate::grid::RciCategory;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMarket {
    pub total_jobs_created: u32,
    pub jobs_taken: u32,
    /// `max(0, total_jobs_created - jobs_taken)`, refreshed every update.
    pub available_jobs: u32,
    /// Reporting share of employed citizens working in this market.
    pub employed: u32,
}

impl JobMarket {
    fn refresh(&mut self) {
        self.available_jobs = self.total_jobs_created.saturating_sub(self.jobs_taken);
    }
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct EmploymentModel {
    pub commercial: JobMarket,
    pub industrial: JobMarket,
    /// Jobs declared by residential archetypes; excluded from availability.
    pub residential_jobs: u32,
    pub working_age_population: u32,
    pub job_seekers: u32,
    pub employed: u32,
    pub unemployment_rate: f32,
}

impl Default for EmploymentModel {
    fn default() -> Self {
        Self::new(&EmploymentParams::default())
    }
}

impl EmploymentModel {
    pub fn new(params: &EmploymentParams) -> Self {
        let mut commercial = JobMarket {
            total_jobs_created: params.starting_jobs,
            ..Default::default()
        };
        commercial.refresh();
        Self {
            commercial,
            industrial: JobMarket::default(),
            residential_jobs: 0,
            working_age_population: 0,
            job_seekers: 0,
            employed: 0,
            unemployment_rate: 0.0,
        }
    }

    pub fn market(&self, category: RciCategory) -> Option<&JobMarket> {
        match category {
            RciCategory::Residential => None,
            RciCategory::Commercial => Some(&self.commercial),
            RciCategory::Industrial => Some(&self.industrial),
        }
    }

    fn market_mut(&mut self, category: RciCategory) -> Option<&mut JobMarket> {
        match category {
            RciCategory::Residential => None,
            RciCategory::Commercial => Some(&mut self.commercial),
            RciCategory::Industrial => Some(&mut self.industrial),
        }
    }

    /// Open jobs across commercial and industrial.
    pub fn available_jobs(&self) -> u32 {
        self.commercial.available_jobs + self.industrial.available_jobs
    }

    pub fn total_jobs(&self) -> u32 {
        self.commercial.total_jobs_created + self.industrial.total_jobs_created
    }

    pub fn unemployment_rate(&self) -> f32 {
        self.unemployment_rate
    }

    /// Fold one tick of city growth into the job markets.
    pub fn update(
        &mut self,
        population: u32,
        activity: &BuildingActivitySnapshot,
        archetypes: &ArchetypeTable,
        params: &EmploymentParams,
    ) {
        self.working_age_population = (population as f32 * params.working_age_ratio).round() as u32;
        self.job_seekers =
            (self.working_age_population as f32 * params.job_seeking_ratio).round() as u32;

        // Job creation from buildings completed since the last update.
        for category in RciCategory::ALL {
            let new_jobs =
                activity.new_buildings.get(category) * archetypes.representative_jobs(category);
            match self.market_mut(category) {
                Some(market) => {
                    market.total_jobs_created += new_jobs;
                    market.refresh();
                }
                None => self.residential_jobs += new_jobs,
            }
        }

        // Job consumption by new residents, split evenly across the markets
        // that still have openings.
        let open: Vec<RciCategory> = [RciCategory::Commercial, RciCategory::Industrial]
            .into_iter()
            .filter(|&c| self.market(c).is_some_and(|m| m.available_jobs > 0))
            .collect();
        if activity.new_population > 0 && !open.is_empty() {
            let share = 1.0 / open.len() as f32;
            let demand = activity.new_population as f32 * params.jobs_taken_per_new_resident;
            for category in open {
                if let Some(market) = self.market_mut(category) {
                    market.jobs_taken += (share * demand).round() as u32;
                }
            }
        }
        self.commercial.refresh();
        self.industrial.refresh();

        // Reporting: employed citizens spread by each market's share of openings.
        let available = self.available_jobs();
        self.employed = self.job_seekers.min(available);
        self.commercial.employed = if available > 0 {
            let share = self.commercial.available_jobs as f32 / available as f32;
            ((self.employed as f32 * share).round() as u32).min(self.employed)
        } else {
            0
        };
        self.industrial.employed = self.employed - self.commercial.employed;
        self.unemployment_rate = if self.job_seekers > 0 {
            100.0 * (self.job_seekers - self.employed) as f32 / self.job_seekers as f32
        } else {
            0.0
        };
    }
}
