//! Building archetype attributes.
//!
//! Every zoning kind grows into exactly one archetype (Light zoning -> Light
//! building, and so on). Attributes are supplied by configuration and packed
//! into an array indexed by [`ZoneKind::index`] once at startup.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::{Density, RciCategory, ZoneKind};

/// Fixed per-archetype numbers reported to city bookkeeping when a building
/// of that archetype is placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneAttributes {
    pub construction_cost: f64,
    pub population: u32,
    pub jobs: u32,
    pub happiness: f32,
    pub power_consumption: f32,
    pub water_consumption: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeEntry {
    pub kind: ZoneKind,
    pub attributes: ZoneAttributes,
}

/// Attribute table for all nine archetypes.
#[derive(Resource, Debug, Clone)]
pub struct ArchetypeTable {
    attributes: [ZoneAttributes; 9],
}

impl ArchetypeTable {
    /// Build the table, requiring exactly one entry per archetype.
    pub fn from_entries(entries: &[ArchetypeEntry]) -> Result<Self, ConfigError> {
        let mut slots: [Option<ZoneAttributes>; 9] = [None; 9];
        for entry in entries {
            let slot = &mut slots[entry.kind.index()];
            if slot.is_some() {
                return Err(ConfigError::DuplicateArchetype(entry.kind));
            }
            *slot = Some(entry.attributes);
        }

        let mut attributes = [EMPTY; 9];
        for kind in ZoneKind::ALL {
            attributes[kind.index()] =
                slots[kind.index()].ok_or(ConfigError::MissingArchetype(kind))?;
        }
        Ok(Self { attributes })
    }

    #[inline]
    pub fn get(&self, kind: ZoneKind) -> &ZoneAttributes {
        &self.attributes[kind.index()]
    }

    /// Jobs a single new building of `category` is assumed to create. The
    /// Light archetype stands in for the whole category.
    pub fn representative_jobs(&self, category: RciCategory) -> u32 {
        self.get(ZoneKind::new(category, Density::Light)).jobs
    }
}

const EMPTY: ZoneAttributes = ZoneAttributes {
    construction_cost: 0.0,
    population: 0,
    jobs: 0,
    happiness: 0.0,
    power_consumption: 0.0,
    water_consumption: 0.0,
};

impl Default for ArchetypeTable {
    fn default() -> Self {
        // default_entries() covers every kind exactly once.
        Self::from_entries(&default_entries()).unwrap_or(Self {
            attributes: [EMPTY; 9],
        })
    }
}

fn entry(
    kind: ZoneKind,
    cost: f64,
    population: u32,
    jobs: u32,
    happiness: f32,
    power: f32,
    water: f32,
) -> ArchetypeEntry {
    ArchetypeEntry {
        kind,
        attributes: ZoneAttributes {
            construction_cost: cost,
            population,
            jobs,
            happiness,
            power_consumption: power,
            water_consumption: water,
        },
    }
}

/// Stock archetype attributes.
pub fn default_entries() -> Vec<ArchetypeEntry> {
    use ZoneKind as K;
    vec![
        // Residential: houses, townhouses, apartment blocks
        entry(K::RESIDENTIAL_LIGHT, 100.0, 10, 0, 1.0, 1.0, 1.0),
        entry(K::RESIDENTIAL_MEDIUM, 250.0, 30, 0, 0.5, 3.0, 3.0),
        entry(K::RESIDENTIAL_HEAVY, 500.0, 80, 0, 0.0, 8.0, 8.0),
        // Commercial: corner shops, strip malls, department stores
        entry(K::COMMERCIAL_LIGHT, 150.0, 0, 8, 0.5, 2.0, 1.0),
        entry(K::COMMERCIAL_MEDIUM, 350.0, 0, 20, 0.5, 5.0, 3.0),
        entry(K::COMMERCIAL_HEAVY, 700.0, 0, 50, 0.0, 12.0, 6.0),
        // Industrial: workshops, factories, plants
        entry(K::INDUSTRIAL_LIGHT, 200.0, 0, 12, -0.5, 4.0, 3.0),
        entry(K::INDUSTRIAL_MEDIUM, 450.0, 0, 30, -1.0, 10.0, 6.0),
        entry(K::INDUSTRIAL_HEAVY, 900.0, 0, 70, -2.0, 25.0, 15.0),
    ]
}
