//! Clock control, demolition and new-game reset.

use crate::grid::{RciCategory, ZoneKind, ZoneType};
use crate::test_harness::TestCity;
use crate::time_of_day::GameClock;
use crate::zoning::ZoneRequest;

#[test]
fn test_paused_clock_stops_growth() {
    let mut city = TestCity::new().with_zone_rect(0, 0, 3, 3, ZoneKind::RESIDENTIAL_LIGHT);
    city.world_mut().resource_mut::<GameClock>().paused = true;
    city.tick(100);
    assert_eq!(city.clock().day, 1);
    city.assert_no_buildings();

    city.world_mut().resource_mut::<GameClock>().paused = false;
    city.tick_days(1);
    assert_eq!(city.clock().day, 2);
    assert_eq!(city.building_count(RciCategory::Residential), 1);
}

#[test]
fn test_zero_speed_acts_as_pause() {
    let mut city = TestCity::new();
    city.world_mut().resource_mut::<GameClock>().speed = 0.0;
    city.tick(50);
    assert_eq!(city.clock().day, 1);
}

#[test]
fn test_demolish_request_clears_footprint_and_stats() {
    let mut city = TestCity::new().with_building(4, 4, ZoneKind::RESIDENTIAL_MEDIUM, 2);
    assert_eq!(city.stats().population, 30);

    city.request(ZoneRequest::Demolish { x: 5, y: 5 });
    city.tick(1);

    for (x, y) in [(4, 4), (5, 4), (4, 5), (5, 5)] {
        city.assert_zone(x, y, ZoneType::Grass);
    }
    assert_eq!(city.stats().population, 0);
    assert_eq!(city.stats().power_consumption, 0.0);
}

#[test]
fn test_new_game_resets_everything() {
    let mut city = TestCity::new().with_zone_rect(0, 0, 5, 5, ZoneKind::RESIDENTIAL_LIGHT);
    city.request(ZoneRequest::PaintRect {
        from: (10, 10),
        to: (11, 11),
        zone: ZoneType::Zoned(ZoneKind::INDUSTRIAL_LIGHT),
    });
    city.tick_days(4);
    assert!(city.grid().building_counts().total() > 0);
    let starting_treasury = city.resource::<crate::game_params::GameParams>()
        .economy
        .starting_treasury;
    assert!(city.budget().treasury < starting_treasury);

    city.new_game();

    city.assert_no_buildings();
    assert_eq!(city.zoned_cell_count(ZoneKind::RESIDENTIAL_LIGHT), 0);
    assert_eq!(city.stats().population, 0);
    assert_eq!(city.budget().treasury, starting_treasury);
    assert_eq!(city.clock().day, 1);
    assert_eq!(city.demand().residential.level, 10.0);
    assert_eq!(city.employment().available_jobs(), 20);
    assert!(city.last_report().attempts.is_empty());
}
