//! The per-day growth orchestrator and its ECS wiring.

mod outcome;
mod scheduler;
mod systems;

pub use outcome::{GrowthAttempt, GrowthReport, Placement, PrecheckFailure};
pub use scheduler::GrowthScheduler;
pub use systems::{log_growth_day, run_growth_day, BuildingPlaced, GrowthNotice, LastGrowthReport};
