//! Assertion helpers for `TestCity` integration tests.

use crate::grid::{ZoneKind, ZoneType};

use super::TestCity;

impl TestCity {
    pub fn assert_zone(&self, x: usize, y: usize, expected: ZoneType) {
        let zone = self.grid().get_zone(x, y);
        assert_eq!(
            zone,
            expected,
            "Expected {expected:?} at ({x}, {y}), found {zone:?}",
        );
    }

    pub fn assert_built(&self, x: usize, y: usize, kind: ZoneKind) {
        self.assert_zone(x, y, ZoneType::Built(kind));
    }

    pub fn assert_no_buildings(&self) {
        let total = self.grid().building_counts().total();
        assert_eq!(total, 0, "Expected no grown buildings, found {total}");
    }

    /// Assert treasury is above a given amount.
    pub fn assert_budget_above(&self, amount: f64) {
        let treasury = self.budget().treasury;
        assert!(
            treasury > amount,
            "Expected treasury > {amount}, got {treasury}"
        );
    }

    /// Every built cell is covered by exactly one pivot footprint of its own
    /// kind, and every footprint lies fully inside the grid.
    pub fn assert_footprints_consistent(&self) {
        let grid = self.grid();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let Some(cell) = grid.cell(x, y) else {
                    continue;
                };
                let ZoneType::Built(kind) = cell.zone else {
                    continue;
                };
                let pivot = grid.footprint_pivot(x, y);
                assert!(pivot.is_some(), "Built cell ({x}, {y}) has no pivot");
                if cell.is_pivot {
                    assert_eq!(pivot, Some((x, y)));
                    let side = cell.footprint as usize;
                    for cy in y..y + side {
                        for cx in x..x + side {
                            assert_eq!(
                                grid.get_zone(cx, cy),
                                ZoneType::Built(kind),
                                "Footprint of ({x}, {y}) broken at ({cx}, {cy})"
                            );
                        }
                    }
                }
            }
        }
    }
}
