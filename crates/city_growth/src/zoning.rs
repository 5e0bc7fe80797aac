//! Player zoning actions: painting zones, clearing them and bulldozing grown
//! buildings. Growth never calls these; they are the only way zoning enters
//! the grid.

use std::fmt;

use bevy::prelude::*;

use crate::archetypes::ArchetypeTable;
use crate::collaborators::{CityStatsSink, Funds};
use crate::demand::DemandModel;
use crate::economy::CityBudget;
use crate::game_params::{GameParams, ZoningParams};
use crate::grid::{Demolition, ZoneGrid, ZoneKind, ZoneType};
use crate::stats::CityStats;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoningError {
    OutOfBounds { x: usize, y: usize },
    /// Zoning may only be painted on grass.
    CellOccupied { x: usize, y: usize, zone: ZoneType },
    InsufficientFunds { cost: f64 },
    /// Only the nine RCI zoning types can be painted.
    NotZoneable(ZoneType),
}

impl fmt::Display for ZoningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoningError::OutOfBounds { x, y } => write!(f, "cell ({x}, {y}) is outside the grid"),
            ZoningError::CellOccupied { x, y, zone } => {
                write!(f, "cell ({x}, {y}) is occupied by {zone:?}")
            }
            ZoningError::InsufficientFunds { cost } => {
                write!(f, "insufficient funds (need ${cost:.0})")
            }
            ZoningError::NotZoneable(zone) => write!(f, "{zone:?} cannot be painted as zoning"),
        }
    }
}

impl std::error::Error for ZoningError {}

fn zoning_kind(zone: ZoneType) -> Result<ZoneKind, ZoningError> {
    zone.zoning_kind().ok_or(ZoningError::NotZoneable(zone))
}

/// Paint one grass cell with `zone`, charging the per-cell zoning cost.
pub fn place_zone<F: Funds + ?Sized>(
    grid: &mut ZoneGrid,
    funds: &mut F,
    costs: &ZoningParams,
    x: usize,
    y: usize,
    zone: ZoneType,
) -> Result<(), ZoningError> {
    let kind = zoning_kind(zone)?;
    let current = grid
        .cell(x, y)
        .ok_or(ZoningError::OutOfBounds { x, y })?
        .zone;
    if current != ZoneType::Grass {
        return Err(ZoningError::CellOccupied {
            x,
            y,
            zone: current,
        });
    }
    let cost = costs.cost_per_cell(kind.density);
    if !funds.can_afford(cost) {
        return Err(ZoningError::InsufficientFunds { cost });
    }
    grid.set_zone(x, y, zone)
        .map_err(|_| ZoningError::OutOfBounds { x, y })?;
    funds.spend(cost);
    Ok(())
}

/// Zone the grass cells of a rectangle (corners inclusive, any order).
/// Non-grass cells are skipped. The whole rectangle is charged up front; if
/// it is unaffordable nothing is painted. Returns the number of cells zoned.
pub fn place_zone_rect<F: Funds + ?Sized>(
    grid: &mut ZoneGrid,
    funds: &mut F,
    costs: &ZoningParams,
    from: (usize, usize),
    to: (usize, usize),
    zone: ZoneType,
) -> Result<u32, ZoningError> {
    let kind = zoning_kind(zone)?;
    for (x, y) in [from, to] {
        if !grid.in_bounds(x, y) {
            return Err(ZoningError::OutOfBounds { x, y });
        }
    }
    let (lx, hx) = (from.0.min(to.0), from.0.max(to.0));
    let (ly, hy) = (from.1.min(to.1), from.1.max(to.1));

    let mut targets = Vec::new();
    for y in ly..=hy {
        for x in lx..=hx {
            if grid.get_zone(x, y) == ZoneType::Grass {
                targets.push((x, y));
            }
        }
    }

    let cost = costs.cost_per_cell(kind.density) * targets.len() as f64;
    if !funds.can_afford(cost) {
        return Err(ZoningError::InsufficientFunds { cost });
    }
    for &(x, y) in &targets {
        grid.set_zone(x, y, zone)
            .map_err(|_| ZoningError::OutOfBounds { x, y })?;
    }
    funds.spend(cost);
    Ok(targets.len() as u32)
}

/// Return an unbuilt zoned cell to grass. No refund. Returns whether anything
/// was cleared; built cells are left alone (use [`demolish_building`]).
pub fn clear_zone(grid: &mut ZoneGrid, x: usize, y: usize) -> Result<bool, ZoningError> {
    let zone = grid
        .cell(x, y)
        .ok_or(ZoningError::OutOfBounds { x, y })?
        .zone;
    if zone.zoning_kind().is_none() {
        return Ok(false);
    }
    grid.set_zone(x, y, ZoneType::Grass)
        .map_err(|_| ZoningError::OutOfBounds { x, y })?;
    Ok(true)
}

/// Bulldoze the grown building covering (x, y) and take its population and
/// utility load back out of the city stats.
pub fn demolish_building<S: CityStatsSink + ?Sized>(
    grid: &mut ZoneGrid,
    stats: &mut S,
    archetypes: &ArchetypeTable,
    x: usize,
    y: usize,
) -> Option<Demolition> {
    let demolition = grid.demolish(x, y)?;
    stats.unregister_building(demolition.kind, archetypes.get(demolition.kind));
    Some(demolition)
}

// ---------------------------------------------------------------------------
// ECS
// ---------------------------------------------------------------------------

/// Queued player action against the zoning grid, applied in `PreSim`.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum ZoneRequest {
    Paint {
        x: usize,
        y: usize,
        zone: ZoneType,
    },
    PaintRect {
        from: (usize, usize),
        to: (usize, usize),
        zone: ZoneType,
    },
    Clear {
        x: usize,
        y: usize,
    },
    Demolish {
        x: usize,
        y: usize,
    },
}

pub fn apply_zone_requests(
    mut requests: EventReader<ZoneRequest>,
    params: Res<GameParams>,
    archetypes: Res<ArchetypeTable>,
    demand: Res<DemandModel>,
    mut grid: ResMut<ZoneGrid>,
    mut budget: ResMut<CityBudget>,
    mut stats: ResMut<CityStats>,
) {
    for request in requests.read() {
        let result = match *request {
            ZoneRequest::Paint { x, y, zone } => {
                place_zone(&mut grid, &mut *budget, &params.zoning, x, y, zone).map(|_| 1)
            }
            ZoneRequest::PaintRect { from, to, zone } => {
                place_zone_rect(&mut grid, &mut *budget, &params.zoning, from, to, zone)
            }
            ZoneRequest::Clear { x, y } => clear_zone(&mut grid, x, y).map(u32::from),
            ZoneRequest::Demolish { x, y } => {
                if let Some(d) = demolish_building(&mut grid, &mut *stats, &archetypes, x, y) {
                    info!("Demolished {} at {:?}", d.kind.label(), d.pivot);
                }
                Ok(0)
            }
        };

        match (result, request) {
            (Err(e), _) => warn!("Zoning request {request:?} refused: {e}"),
            (Ok(n), ZoneRequest::Paint { zone, .. } | ZoneRequest::PaintRect { zone, .. })
                if n > 0 && !demand.can_zone_type_grow(*zone) =>
            {
                info!("Zoned {n} cells of {zone:?}, but demand is too low for it to grow yet");
            }
            _ => {}
        }
    }
}
