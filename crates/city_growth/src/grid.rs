use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GridError};

// ---------------------------------------------------------------------------
// Zone kinds
// ---------------------------------------------------------------------------

/// Residential / commercial / industrial demand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RciCategory {
    Residential,
    Commercial,
    Industrial,
}

impl RciCategory {
    pub const ALL: [RciCategory; 3] = [
        RciCategory::Residential,
        RciCategory::Commercial,
        RciCategory::Industrial,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            RciCategory::Residential => "Residential",
            RciCategory::Commercial => "Commercial",
            RciCategory::Industrial => "Industrial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Density {
    Light,
    Medium,
    Heavy,
}

impl Density {
    pub const ALL: [Density; 3] = [Density::Light, Density::Medium, Density::Heavy];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One of the nine zoning categories (category x density). Doubles as the
/// building archetype a zoned section grows into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneKind {
    pub category: RciCategory,
    pub density: Density,
}

impl ZoneKind {
    pub const fn new(category: RciCategory, density: Density) -> Self {
        Self { category, density }
    }

    pub const RESIDENTIAL_LIGHT: ZoneKind = ZoneKind::new(RciCategory::Residential, Density::Light);
    pub const RESIDENTIAL_MEDIUM: ZoneKind =
        ZoneKind::new(RciCategory::Residential, Density::Medium);
    pub const RESIDENTIAL_HEAVY: ZoneKind = ZoneKind::new(RciCategory::Residential, Density::Heavy);
    pub const COMMERCIAL_LIGHT: ZoneKind = ZoneKind::new(RciCategory::Commercial, Density::Light);
    pub const COMMERCIAL_MEDIUM: ZoneKind = ZoneKind::new(RciCategory::Commercial, Density::Medium);
    pub const COMMERCIAL_HEAVY: ZoneKind = ZoneKind::new(RciCategory::Commercial, Density::Heavy);
    pub const INDUSTRIAL_LIGHT: ZoneKind = ZoneKind::new(RciCategory::Industrial, Density::Light);
    pub const INDUSTRIAL_MEDIUM: ZoneKind = ZoneKind::new(RciCategory::Industrial, Density::Medium);
    pub const INDUSTRIAL_HEAVY: ZoneKind = ZoneKind::new(RciCategory::Industrial, Density::Heavy);

    /// All nine kinds in the fixed growth order: R{L,M,H}, C{L,M,H}, I{L,M,H}.
    pub const ALL: [ZoneKind; 9] = [
        ZoneKind::RESIDENTIAL_LIGHT,
        ZoneKind::RESIDENTIAL_MEDIUM,
        ZoneKind::RESIDENTIAL_HEAVY,
        ZoneKind::COMMERCIAL_LIGHT,
        ZoneKind::COMMERCIAL_MEDIUM,
        ZoneKind::COMMERCIAL_HEAVY,
        ZoneKind::INDUSTRIAL_LIGHT,
        ZoneKind::INDUSTRIAL_MEDIUM,
        ZoneKind::INDUSTRIAL_HEAVY,
    ];

    /// Dense index in `0..9` matching the order of [`ZoneKind::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self.category.index() * 3 + self.density.index()
    }

    pub fn label(self) -> String {
        format!("{}{:?}", self.category.name(), self.density)
    }
}

/// What occupies a cell. Setting a new value always replaces the previous
/// occupant entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ZoneType {
    None,
    #[default]
    Grass,
    Road,
    Water,
    /// Non-RCI structure placed by the player (services, utilities).
    Building,
    /// Painted with an RCI zone, waiting for a building.
    Zoned(ZoneKind),
    /// Part of a grown RCI building footprint.
    Built(ZoneKind),
}

impl ZoneType {
    pub fn zoning_kind(self) -> Option<ZoneKind> {
        match self {
            ZoneType::Zoned(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn built_kind(self) -> Option<ZoneKind> {
        match self {
            ZoneType::Built(kind) => Some(kind),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Cells
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub zone: ZoneType,
    /// Anchor (minimum x, minimum y) cell of a building footprint.
    pub is_pivot: bool,
    /// Side length of the footprint this cell belongs to, 0 when not built.
    pub footprint: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            zone: ZoneType::Grass,
            is_pivot: false,
            footprint: 0,
        }
    }
}

impl Cell {
    fn with_zone(zone: ZoneType) -> Self {
        Self {
            zone,
            ..Default::default()
        }
    }
}

/// Per-category counters, indexed by [`RciCategory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts(pub [u32; 3]);

impl CategoryCounts {
    #[inline]
    pub fn get(&self, category: RciCategory) -> u32 {
        self.0[category.index()]
    }

    #[inline]
    pub fn add(&mut self, category: RciCategory, n: u32) {
        self.0[category.index()] += n;
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Per-category `self - earlier`, floored at zero (demolitions never yield
    /// negative growth).
    pub fn saturating_delta(&self, earlier: &CategoryCounts) -> CategoryCounts {
        let mut out = CategoryCounts::default();
        for c in RciCategory::ALL {
            out.0[c.index()] = self.get(c).saturating_sub(earlier.get(c));
        }
        out
    }
}

/// A demolished footprint, returned so the caller can unwind stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demolition {
    pub kind: ZoneKind,
    pub pivot: (usize, usize),
    pub footprint: u8,
}

// ---------------------------------------------------------------------------
// ZoneGrid
// ---------------------------------------------------------------------------

/// Authoritative per-cell zoning and occupancy state.
///
/// Besides the dense cell array, the grid keeps one ordered coordinate list per
/// zoning kind. Lists are in placement order; section finding depends on it.
#[derive(Resource, Debug, Clone)]
pub struct ZoneGrid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    zoned: [Vec<(usize, usize)>; 9],
}

impl ZoneGrid {
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        Ok(Self {
            cells: vec![Cell::default(); width * height],
            width,
            height,
            zoned: Default::default(),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell at (x, y), or `None` outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.in_bounds(x, y).then(|| &self.cells[self.index(x, y)])
    }

    /// Zone type at (x, y). Out-of-bounds coordinates read as [`ZoneType::None`].
    pub fn get_zone(&self, x: usize, y: usize) -> ZoneType {
        self.cell(x, y).map_or(ZoneType::None, |c| c.zone)
    }

    /// Replace whatever occupies (x, y) with `zone`, dropping all prior zoning
    /// and building data for the cell.
    pub fn set_zone(&mut self, x: usize, y: usize, zone: ZoneType) -> Result<(), GridError> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfBounds { x, y });
        }
        self.clear_tracking(x, y);
        let idx = self.index(x, y);
        self.cells[idx] = Cell::with_zone(zone);
        if let ZoneType::Zoned(kind) = zone {
            self.zoned[kind.index()].push((x, y));
        }
        Ok(())
    }

    /// Coordinates currently zoned `kind` and unbuilt, in placement order.
    pub fn zoned_positions(&self, kind: ZoneKind) -> &[(usize, usize)] {
        &self.zoned[kind.index()]
    }

    /// Drop (x, y) from the zoning list of `kind`. Returns whether it was present.
    pub fn remove_zoned(&mut self, x: usize, y: usize, kind: ZoneKind) -> bool {
        let list = &mut self.zoned[kind.index()];
        match list.iter().position(|&p| p == (x, y)) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }

    fn clear_tracking(&mut self, x: usize, y: usize) {
        if let ZoneType::Zoned(kind) = self.get_zone(x, y) {
            self.remove_zoned(x, y, kind);
        }
    }

    /// Turn every cell in `cells` into part of one `kind` building whose side is
    /// `footprint`. The first coordinate becomes the pivot.
    pub(crate) fn mark_built(&mut self, cells: &[(usize, usize)], kind: ZoneKind, footprint: u8) {
        for (i, &(x, y)) in cells.iter().enumerate() {
            self.clear_tracking(x, y);
            let idx = self.index(x, y);
            self.cells[idx] = Cell {
                zone: ZoneType::Built(kind),
                is_pivot: i == 0,
                footprint,
            };
        }
    }

    /// Locate the pivot of the footprint covering (x, y). Pivots sit at most
    /// `MAX_SECTION_SIZE - 1` cells up-left of any member.
    pub fn footprint_pivot(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        let kind = self.get_zone(x, y).built_kind()?;
        let reach = crate::config::MAX_SECTION_SIZE - 1;
        for py in y.saturating_sub(reach)..=y {
            for px in x.saturating_sub(reach)..=x {
                let Some(cell) = self.cell(px, py) else {
                    continue;
                };
                let size = cell.footprint as usize;
                if cell.is_pivot
                    && cell.zone == ZoneType::Built(kind)
                    && x < px + size
                    && y < py + size
                {
                    return Some((px, py));
                }
            }
        }
        None
    }

    /// Bulldoze the building covering (x, y), returning its footprint cells to
    /// grass.
    pub fn demolish(&mut self, x: usize, y: usize) -> Option<Demolition> {
        let (px, py) = self.footprint_pivot(x, y)?;
        let pivot = self.cells[self.index(px, py)];
        let kind = pivot.zone.built_kind()?;
        let size = pivot.footprint as usize;
        for cy in py..py + size {
            for cx in px..px + size {
                let idx = self.index(cx, cy);
                self.cells[idx] = Cell::default();
            }
        }
        Some(Demolition {
            kind,
            pivot: (px, py),
            footprint: pivot.footprint,
        })
    }

    /// Reset every cell to grass ("new game").
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
        for list in &mut self.zoned {
            list.clear();
        }
    }

    /// Number of grown buildings per category, counted by pivot cells.
    pub fn building_counts(&self) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for cell in self.cells.iter().filter(|c| c.is_pivot) {
            if let ZoneType::Built(kind) = cell.zone {
                counts.add(kind.category, 1);
            }
        }
        counts
    }

    /// Number of zoned-but-unbuilt cells per category.
    pub fn zoned_counts(&self) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for kind in ZoneKind::ALL {
            counts.add(kind.category, self.zoned[kind.index()].len() as u32);
        }
        counts
    }
}
