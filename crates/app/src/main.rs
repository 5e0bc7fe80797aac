//! Headless growth runner: lays out a starter town, runs the growth engine
//! for a number of simulated days and logs what happened.
//!
//! ```text
//! growth-runner [--config params.json] [--days N]
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;

use city_growth::economy::CityBudget;
use city_growth::game_params::GameParams;
use city_growth::grid::{RciCategory, ZoneKind, ZoneType};
use city_growth::growth::LastGrowthReport;
use city_growth::stats::CityStats;
use city_growth::time_of_day::GameClock;
use city_growth::zoning::ZoneRequest;
use city_growth::GrowthSimulationPlugin;

#[derive(Debug, Parser)]
#[command(about = "Run the city growth engine headless for a number of days")]
struct RunnerArgs {
    /// Path to a GameParams JSON file (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of simulated days to run
    #[arg(long, default_value_t = 60)]
    days: u32,
}

fn load_params(path: Option<&Path>) -> Result<GameParams, String> {
    let Some(path) = path else {
        return Ok(GameParams::default());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    GameParams::from_json_str(&json).map_err(|e| format!("{}: {e}", path.display()))
}

/// Queue a residential core flanked by commercial and industrial strips
/// around the grid center, clipped to the grid.
fn starter_layout(width: usize, height: usize) -> Vec<ZoneRequest> {
    let cx = width / 2;
    let cy = height / 2;
    let clip = |x: usize, y: usize| (x.min(width - 1), y.min(height - 1));
    let rect = |x0: usize, y0: usize, x1: usize, y1: usize, kind: ZoneKind| {
        ZoneRequest::PaintRect {
            from: clip(x0, y0),
            to: clip(x1, y1),
            zone: ZoneType::Zoned(kind),
        }
    };
    vec![
        rect(
            cx.saturating_sub(6),
            cy.saturating_sub(6),
            cx + 5,
            cy + 5,
            ZoneKind::RESIDENTIAL_LIGHT,
        ),
        rect(
            cx + 7,
            cy.saturating_sub(6),
            cx + 10,
            cy + 5,
            ZoneKind::COMMERCIAL_LIGHT,
        ),
        rect(
            cx.saturating_sub(6),
            cy + 7,
            cx + 5,
            cy + 10,
            ZoneKind::INDUSTRIAL_LIGHT,
        ),
        rect(
            cx.saturating_sub(12),
            cy.saturating_sub(6),
            cx.saturating_sub(8),
            cy + 5,
            ZoneKind::RESIDENTIAL_MEDIUM,
        ),
    ]
}

fn main() -> ExitCode {
    let args = RunnerArgs::parse();
    let plugin = match load_params(args.config.as_deref())
        .and_then(|params| GrowthSimulationPlugin::new(params).map_err(|e| e.to_string()))
    {
        Ok(plugin) => plugin,
        Err(e) => {
            eprintln!("growth-runner: invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    let (width, height) = (plugin.params().grid.width, plugin.params().grid.height);

    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(LogPlugin::default());
    app.add_plugins(plugin);
    app.update();

    for request in starter_layout(width, height) {
        app.world_mut().send_event(request);
    }

    // Drive FixedUpdate directly so the run is not tied to wall-clock time.
    let ticks_per_day = app.world().resource::<GameClock>().ticks_per_day;
    for _ in 0..args.days {
        for _ in 0..ticks_per_day {
            app.world_mut().run_schedule(FixedUpdate);
        }
        let report = &app.world().resource::<LastGrowthReport>().0;
        let stats = app.world().resource::<CityStats>();
        let clock = app.world().resource::<GameClock>();
        info!(
            "{}: {} new buildings, population {}",
            clock.formatted(),
            report.placed_count(),
            stats.population
        );
    }

    let stats = app.world().resource::<CityStats>();
    let budget = app.world().resource::<CityBudget>();
    info!(
        "Finished {} days: {} residential, {} commercial, {} industrial buildings",
        args.days,
        stats.buildings.get(RciCategory::Residential),
        stats.buildings.get(RciCategory::Commercial),
        stats.buildings.get(RciCategory::Industrial),
    );
    info!(
        "Population {}, happiness {:.2}, power {:.0}/{:.0}, water {:.0}/{:.0}, treasury ${:.0}",
        stats.population,
        stats.average_happiness(),
        stats.power_consumption,
        stats.power_output,
        stats.water_consumption,
        stats.water_output,
        budget.treasury,
    );
    ExitCode::SUCCESS
}
