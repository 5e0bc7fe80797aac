//! Zoning requests flowing through the ECS into growth.

use crate::game_params::GameParams;
use crate::grid::{RciCategory, ZoneKind, ZoneType};
use crate::test_harness::TestCity;
use crate::zoning::ZoneRequest;

const RL: ZoneType = ZoneType::Zoned(ZoneKind::RESIDENTIAL_LIGHT);

#[test]
fn test_paint_request_charges_and_grows() {
    let mut city = TestCity::new();
    let before = city.budget().treasury;
    city.request(ZoneRequest::PaintRect {
        from: (0, 0),
        to: (2, 2),
        zone: RL,
    });
    city.tick(1);

    assert_eq!(city.zoned_cell_count(ZoneKind::RESIDENTIAL_LIGHT), 9);
    let cost = city.resource::<GameParams>().zoning.cost_light * 9.0;
    assert_eq!(city.budget().treasury, before - cost);

    city.tick_days(1);
    assert_eq!(city.building_count(RciCategory::Residential), 1);
}

#[test]
fn test_unaffordable_request_is_refused() {
    let mut city = TestCity::new().with_budget(15.0);
    city.request(ZoneRequest::PaintRect {
        from: (0, 0),
        to: (1, 1),
        zone: RL,
    });
    city.tick(1);
    assert_eq!(city.zoned_cell_count(ZoneKind::RESIDENTIAL_LIGHT), 0);
    assert_eq!(city.budget().treasury, 15.0);

    city.request(ZoneRequest::Paint { x: 0, y: 0, zone: RL });
    city.tick(1);
    assert_eq!(city.zoned_cell_count(ZoneKind::RESIDENTIAL_LIGHT), 1);
    assert_eq!(city.budget().treasury, 5.0);
}

#[test]
fn test_commercial_zoning_paintable_with_low_demand() {
    let mut city = TestCity::new().with_demand(RciCategory::Commercial, -50.0);
    assert!(!city
        .demand()
        .can_zone_type_grow(ZoneType::Zoned(ZoneKind::COMMERCIAL_LIGHT)));
    city.request(ZoneRequest::Paint {
        x: 3,
        y: 3,
        zone: ZoneType::Zoned(ZoneKind::COMMERCIAL_LIGHT),
    });
    city.tick(1);
    city.assert_zone(3, 3, ZoneType::Zoned(ZoneKind::COMMERCIAL_LIGHT));
}

#[test]
fn test_cannot_zone_over_buildings() {
    let mut city = TestCity::new().with_building(0, 0, ZoneKind::INDUSTRIAL_LIGHT, 1);
    city.request(ZoneRequest::Paint { x: 0, y: 0, zone: RL });
    city.tick(1);
    city.assert_built(0, 0, ZoneKind::INDUSTRIAL_LIGHT);
}

#[test]
fn test_clear_request_unzones() {
    let mut city = TestCity::new().with_zone_rect(0, 0, 2, 0, ZoneKind::RESIDENTIAL_LIGHT);
    city.request(ZoneRequest::Clear { x: 1, y: 0 });
    city.tick(1);
    city.assert_zone(1, 0, ZoneType::Grass);
    assert_eq!(
        city.grid().zoned_positions(ZoneKind::RESIDENTIAL_LIGHT),
        &[(0, 0), (2, 0)]
    );
}

#[test]
fn test_rezoning_replaces_previous_occupant() {
    let mut city = TestCity::new().with_zone(4, 4, ZoneKind::COMMERCIAL_HEAVY);
    city.request(ZoneRequest::Clear { x: 4, y: 4 });
    city.request(ZoneRequest::Paint { x: 4, y: 4, zone: RL });
    city.tick(1);
    city.assert_zone(4, 4, RL);
    assert_eq!(city.zoned_cell_count(ZoneKind::COMMERCIAL_HEAVY), 0);
    let cell = city.grid().cell(4, 4).unwrap();
    assert!(!cell.is_pivot);
    assert_eq!(cell.footprint, 0);
}
