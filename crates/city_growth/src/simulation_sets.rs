//! Deterministic ordering of the growth systems via `SystemSet` phases.
//!
//! ```text
//! PreSim  →  Simulation  →  PostSim
//! ```
//!
//! * **PreSim** – game clock and queued zoning requests.
//! * **Simulation** – the growth day (employment, demand, sections,
//!   placements). Runs only when the clock starts a new day.
//! * **PostSim** – reporting. Reads simulation state, never mutates it.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
///
/// Configured as a chain by [`crate::GrowthSimulationPlugin`].
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    PreSim,
    Simulation,
    PostSim,
}
