//! Narrow interfaces to the rest of the city. The growth engine only talks
//! to money, utilities and statistics through these traits, so tests can
//! substitute their own ledgers.

use crate::archetypes::ZoneAttributes;
use crate::grid::ZoneKind;

/// Money balance that pays for zoning and for grown buildings.
pub trait Funds {
    fn can_afford(&self, cost: f64) -> bool;
    fn spend(&mut self, cost: f64);
}

/// City-wide power and water balance.
pub trait UtilityGrid {
    /// Output strictly exceeds consumption.
    fn power_available(&self) -> bool;
    fn water_available(&self) -> bool;
}

/// Receives the population, happiness and utility deltas of grown buildings.
pub trait CityStatsSink {
    fn register_building_placement(&mut self, kind: ZoneKind, attributes: &ZoneAttributes);
    fn unregister_building(&mut self, kind: ZoneKind, attributes: &ZoneAttributes);
    fn population(&self) -> u32;
}
