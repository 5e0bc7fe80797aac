//! Data-driven growth parameters.
//!
//! Collects every tunable constant of the growth engine into one
//! [`GameParams`] resource. Each section falls back to its defaults, so a
//! configuration file only needs to list the values it overrides.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::archetypes::{default_entries, ArchetypeEntry};
use crate::config::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use crate::error::ConfigError;
use crate::grid::Density;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParams {
    pub width: usize,
    pub height: usize,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

// ---------------------------------------------------------------------------
// Employment
// ---------------------------------------------------------------------------

/// Tunables for the job market.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmploymentParams {
    /// Share of the population that is of working age.
    pub working_age_ratio: f32,
    /// Share of the working-age population looking for a job.
    pub job_seeking_ratio: f32,
    /// Jobs consumed per newly arrived resident.
    pub jobs_taken_per_new_resident: f32,
    /// Commercial jobs available before any job building exists, so the first
    /// residents have somewhere to work.
    pub starting_jobs: u32,
}

impl Default for EmploymentParams {
    fn default() -> Self {
        Self {
            working_age_ratio: 0.7,
            job_seeking_ratio: 0.9,
            jobs_taken_per_new_resident: 0.8,
            starting_jobs: 20,
        }
    }
}

// ---------------------------------------------------------------------------
// Demand
// ---------------------------------------------------------------------------

/// Tunables for the RCI demand curves. Levels live in [-100, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandParams {
    /// Interpolation / accumulation rate per simulated day.
    pub sensitivity: f32,
    /// Fraction of commercial demand that bleeds away per day without
    /// residential activity.
    pub decay_rate: f32,
    /// Simulated days per growth tick.
    pub tick_dt: f32,
    pub starting_residential: f32,
    pub starting_commercial: f32,
    pub starting_industrial: f32,
    /// Residential level pulled toward this while no jobs are available.
    pub no_jobs_target: f32,
    /// Residential boost when both industrial and residential zoning wait for
    /// buildings.
    pub mixed_zoning_boost: f32,
    /// Residential boost when more than `plentiful_jobs_threshold` jobs are open.
    pub plentiful_jobs_boost: f32,
    pub plentiful_jobs_threshold: u32,
    /// Commercial pull while residential zoning waits for buildings.
    pub commercial_zoning_pull: f32,
    /// Commercial pull per new residential building.
    pub commercial_per_new_residential: f32,
    /// Industrial target boost per new residential building.
    pub industrial_per_new_residential: f32,
    /// Industrial target floor while the city has few factories.
    pub early_industry_floor: f32,
    pub early_industry_building_limit: u32,
}

impl Default for DemandParams {
    fn default() -> Self {
        Self {
            sensitivity: 0.1,
            decay_rate: 0.1,
            tick_dt: 1.0,
            starting_residential: 10.0,
            starting_commercial: 0.0,
            starting_industrial: 10.0,
            no_jobs_target: -30.0,
            mixed_zoning_boost: 15.0,
            plentiful_jobs_boost: 10.0,
            plentiful_jobs_threshold: 10,
            commercial_zoning_pull: 10.0,
            commercial_per_new_residential: 12.0,
            industrial_per_new_residential: 10.0,
            early_industry_floor: 25.0,
            early_industry_building_limit: 5,
        }
    }
}

// ---------------------------------------------------------------------------
// Zoning, utilities, economy, clock
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoningParams {
    /// Cost of painting one cell, by density tier.
    pub cost_light: f64,
    pub cost_medium: f64,
    pub cost_heavy: f64,
}

impl Default for ZoningParams {
    fn default() -> Self {
        Self {
            cost_light: 10.0,
            cost_medium: 20.0,
            cost_heavy: 35.0,
        }
    }
}

impl ZoningParams {
    pub fn cost_per_cell(&self, density: Density) -> f64 {
        match density {
            Density::Light => self.cost_light,
            Density::Medium => self.cost_medium,
            Density::Heavy => self.cost_heavy,
        }
    }
}

/// City-wide utility output available before any consumer exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilityParams {
    pub power_output: f32,
    pub water_output: f32,
}

impl Default for UtilityParams {
    fn default() -> Self {
        Self {
            power_output: 500.0,
            water_output: 500.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyParams {
    pub starting_treasury: f64,
}

impl Default for EconomyParams {
    fn default() -> Self {
        Self {
            starting_treasury: 20_000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockParams {
    /// FixedUpdate ticks per simulated day at 1x speed.
    pub ticks_per_day: u32,
}

impl Default for ClockParams {
    fn default() -> Self {
        Self { ticks_per_day: 10 }
    }
}

// ---------------------------------------------------------------------------
// GameParams resource
// ---------------------------------------------------------------------------

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameParams {
    pub seed: u64,
    pub grid: GridParams,
    pub employment: EmploymentParams,
    pub demand: DemandParams,
    pub zoning: ZoningParams,
    pub utilities: UtilityParams,
    pub economy: EconomyParams,
    pub clock: ClockParams,
    pub archetypes: Vec<ArchetypeEntry>,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            seed: 42,
            grid: GridParams::default(),
            employment: EmploymentParams::default(),
            demand: DemandParams::default(),
            zoning: ZoningParams::default(),
            utilities: UtilityParams::default(),
            economy: EconomyParams::default(),
            clock: ClockParams::default(),
            archetypes: default_entries(),
        }
    }
}

fn check_ratio(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value: value as f64,
        })
    }
}

impl GameParams {
    /// Parse a JSON configuration and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let params: GameParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Range checks for the scalar tunables. Grid size and archetype coverage
    /// are checked where those structures are built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ratio("employment.working_age_ratio", self.employment.working_age_ratio)?;
        check_ratio("employment.job_seeking_ratio", self.employment.job_seeking_ratio)?;
        check_ratio("demand.sensitivity", self.demand.sensitivity)?;
        check_ratio("demand.decay_rate", self.demand.decay_rate)?;
        if self.employment.jobs_taken_per_new_resident < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "employment.jobs_taken_per_new_resident",
                value: self.employment.jobs_taken_per_new_resident as f64,
            });
        }
        if self.demand.tick_dt <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "demand.tick_dt",
                value: self.demand.tick_dt as f64,
            });
        }
        if self.clock.ticks_per_day == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "clock.ticks_per_day",
                value: 0.0,
            });
        }
        Ok(())
    }
}
