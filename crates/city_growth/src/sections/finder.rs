use std::collections::HashSet;

use bevy::prelude::*;

use crate::config::SECTION_SIZES;
use crate::grid::{ZoneGrid, ZoneKind};

/// A square of `size x size` same-kind zoned, unbuilt cells. The first
/// coordinate is the anchor (minimum x, minimum y) and becomes the pivot of
/// the building grown on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSection {
    pub kind: ZoneKind,
    pub cells: Vec<(usize, usize)>,
}

impl ZoneSection {
    #[inline]
    pub fn anchor(&self) -> (usize, usize) {
        self.cells[0]
    }

    /// Side length, derived from the cell count.
    pub fn footprint(&self) -> u8 {
        let n = self.cells.len();
        let mut side = 0;
        while (side + 1) * (side + 1) <= n {
            side += 1;
        }
        side as u8
    }
}

/// Sections of one zoning kind, one list per footprint size (index 0 = 1x1).
pub type SectionsBySize = [Vec<ZoneSection>; 3];

/// Per-tick section cache, one entry per zoning kind.
#[derive(Resource, Debug, Default, Clone)]
pub struct ZoneSections {
    by_kind: [SectionsBySize; 9],
}

impl ZoneSections {
    /// Recompute every kind from the current grid.
    pub fn recompute(&mut self, grid: &ZoneGrid) {
        for kind in ZoneKind::ALL {
            self.by_kind[kind.index()] = find_sections(grid, kind);
        }
    }

    pub fn get(&self, kind: ZoneKind) -> &SectionsBySize {
        &self.by_kind[kind.index()]
    }

    /// True when any size produced at least one section for `kind`.
    pub fn has_any(&self, kind: ZoneKind) -> bool {
        self.get(kind).iter().any(|list| !list.is_empty())
    }
}

/// Partition the zoned, unbuilt cells of `kind` into squares of each size.
///
/// Each size runs an independent pass over the full zoned list. Within a pass
/// the list is walked from the most recently zoned cell backwards; each cell
/// not yet claimed anchors a candidate square growing toward +x/+y, which is
/// kept only if all `size * size` cells are still unclaimed.
pub fn find_sections(grid: &ZoneGrid, kind: ZoneKind) -> SectionsBySize {
    let zoned = grid.zoned_positions(kind);
    let mut out: SectionsBySize = Default::default();

    for (slot, &size) in SECTION_SIZES.iter().enumerate() {
        let mut available: HashSet<(usize, usize)> = zoned.iter().copied().collect();

        for &(ax, ay) in zoned.iter().rev() {
            if !available.contains(&(ax, ay)) {
                continue;
            }

            let mut members = Vec::with_capacity(size * size);
            for dy in 0..size {
                for dx in 0..size {
                    let p = (ax + dx, ay + dy);
                    if available.contains(&p) {
                        members.push(p);
                    }
                }
            }
            if members.len() != size * size {
                continue;
            }

            for p in &members {
                available.remove(p);
            }
            out[slot].push(ZoneSection {
                kind,
                cells: members,
            });
        }
    }

    out
}
