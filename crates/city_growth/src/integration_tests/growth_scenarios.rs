//! End-to-end growth scenarios: job gate, residential support, early
//! industry, commercial pull and utility shortages.

use crate::demand::DemandStatus;
use crate::economy::CityBudget;
use crate::game_params::GameParams;
use crate::grid::{RciCategory, ZoneKind, ZoneType};
use crate::growth::PrecheckFailure;
use crate::test_harness::{TestCity, TEST_GRID_SIZE};

fn small_params() -> GameParams {
    let mut params = GameParams::default();
    params.grid.width = TEST_GRID_SIZE;
    params.grid.height = TEST_GRID_SIZE;
    params
}

#[test]
fn test_residential_block_waits_for_jobs() {
    let mut params = small_params();
    params.employment.starting_jobs = 0;
    let mut city = TestCity::with_params(params).with_zone_rect(
        4,
        4,
        6,
        6,
        ZoneKind::RESIDENTIAL_LIGHT,
    );
    city.tick_days(1);

    assert_eq!(city.employment().available_jobs(), 0);
    assert!(city.demand().can_grow(RciCategory::Residential));
    assert_eq!(
        city.last_report().failure(ZoneKind::RESIDENTIAL_LIGHT),
        Some(PrecheckFailure::NoAvailableJobs)
    );
    city.assert_no_buildings();
    assert_eq!(city.zoned_cell_count(ZoneKind::RESIDENTIAL_LIGHT), 9);
}

#[test]
fn test_commerce_needs_residents() {
    let mut city = TestCity::new().with_demand(RciCategory::Commercial, 60.0);
    for i in 0..10 {
        city = city.with_zone(i * 3, 0, ZoneKind::COMMERCIAL_LIGHT);
    }
    city.tick_days(5);

    city.assert_no_buildings();
    assert_eq!(
        city.last_report().failure(ZoneKind::COMMERCIAL_LIGHT),
        Some(PrecheckFailure::NoResidentialSupport)
    );
    assert_eq!(city.zoned_cell_count(ZoneKind::COMMERCIAL_LIGHT), 10);
}

#[test]
fn test_first_factory_grows_under_early_floor() {
    let mut city = TestCity::new()
        .with_building(20, 20, ZoneKind::RESIDENTIAL_LIGHT, 1)
        .with_zone(0, 0, ZoneKind::INDUSTRIAL_LIGHT);
    assert_eq!(city.demand().industrial.level, 10.0);
    city.tick_days(1);

    // Target floored at 25: level moves 10% of the way there.
    assert!((city.demand().industrial.level - 11.5).abs() < 1e-4);
    city.assert_built(0, 0, ZoneKind::INDUSTRIAL_LIGHT);
    assert!(city.grid().cell(0, 0).unwrap().is_pivot);
    assert_eq!(city.building_count(RciCategory::Industrial), 1);
}

#[test]
fn test_twelve_new_houses_pull_commerce_additively() {
    let mut city = TestCity::new();
    for i in 0..12 {
        city = city.with_building(i * 2, 10, ZoneKind::RESIDENTIAL_LIGHT, 1);
    }
    let before = city.demand().commercial.level;
    city.tick_days(1);

    let params = city.resource::<GameParams>().demand.clone();
    let expected = 12.0 * 12.0 * params.sensitivity * params.tick_dt;
    let gained = city.demand().commercial.level - before;
    assert!(
        (gained - expected).abs() < 1e-4,
        "gained {gained}, expected {expected}",
    );
    assert_eq!(city.demand().commercial.status, DemandStatus::Balanced);
}

#[test]
fn test_power_shortage_halts_growth_and_notifies() {
    let mut city = TestCity::new()
        .with_power(0.0)
        .with_zone_rect(0, 0, 2, 2, ZoneKind::RESIDENTIAL_LIGHT);
    city.tick_days(1);

    city.assert_no_buildings();
    assert_eq!(
        city.last_report().failure(ZoneKind::RESIDENTIAL_LIGHT),
        Some(PrecheckFailure::InsufficientPower)
    );
    assert_eq!(
        city.last_report().failure(ZoneKind::INDUSTRIAL_HEAVY),
        Some(PrecheckFailure::HaltedByUtilityShortage)
    );
    let notices = city.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].reason, PrecheckFailure::InsufficientPower);
}

#[test]
fn test_empty_treasury_stops_growth_until_funded() {
    let mut city = TestCity::new()
        .with_zone_rect(0, 0, 5, 5, ZoneKind::RESIDENTIAL_LIGHT)
        .with_budget(0.0);
    city.tick_days(3);

    city.assert_no_buildings();
    assert_eq!(city.budget().treasury, 0.0);
    assert_eq!(
        city.last_report().failure(ZoneKind::RESIDENTIAL_LIGHT),
        Some(PrecheckFailure::InsufficientFunds)
    );
    let notices = city.notices();
    assert_eq!(notices.len(), 3);
    assert!(notices
        .iter()
        .all(|n| n.reason == PrecheckFailure::InsufficientFunds));

    city.world_mut().resource_mut::<CityBudget>().treasury = 1_000.0;
    city.tick_days(1);
    assert_eq!(city.building_count(RciCategory::Residential), 1);
    let cost = city
        .resource::<GameParams>()
        .archetypes
        .iter()
        .find(|e| e.kind == ZoneKind::RESIDENTIAL_LIGHT)
        .map(|e| e.attributes.construction_cost)
        .unwrap();
    assert_eq!(city.budget().treasury, 1_000.0 - cost);
}

#[test]
fn test_growth_resumes_once_water_returns() {
    let mut city = TestCity::new()
        .with_water(0.0)
        .with_zone_rect(0, 0, 2, 2, ZoneKind::RESIDENTIAL_LIGHT);
    city.tick_days(2);
    city.assert_no_buildings();

    city = city.with_water(500.0);
    city.tick_days(1);
    assert_eq!(city.building_count(RciCategory::Residential), 1);
}

#[test]
fn test_placed_events_match_grid() {
    let mut city = TestCity::new()
        .with_zone_rect(0, 0, 5, 5, ZoneKind::RESIDENTIAL_LIGHT)
        .with_zone_rect(10, 0, 13, 3, ZoneKind::COMMERCIAL_LIGHT);
    city.tick_days(3);

    let events = city.placed_events();
    assert!(!events.is_empty());
    for event in &events {
        let p = &event.placement;
        assert_eq!(p.cells.len(), (p.footprint as usize).pow(2));
        for &(x, y) in &p.cells {
            city.assert_zone(x, y, ZoneType::Built(p.kind));
        }
    }
    let grown = city.grid().building_counts().total() as usize;
    assert_eq!(events.len(), grown);
}

#[test]
fn test_mixed_city_grows_every_category() {
    let mut city = TestCity::new()
        .with_zone_rect(0, 0, 9, 9, ZoneKind::RESIDENTIAL_LIGHT)
        .with_zone_rect(12, 0, 17, 5, ZoneKind::COMMERCIAL_LIGHT)
        .with_zone_rect(0, 12, 5, 17, ZoneKind::INDUSTRIAL_LIGHT);
    city.tick_days(30);

    assert!(city.building_count(RciCategory::Residential) > 0);
    assert!(city.building_count(RciCategory::Commercial) > 0);
    assert!(city.building_count(RciCategory::Industrial) > 0);
    city.assert_footprints_consistent();

    let employment = city.employment();
    for market in [employment.commercial, employment.industrial] {
        assert_eq!(
            market.available_jobs,
            market.total_jobs_created.saturating_sub(market.jobs_taken)
        );
    }
    for category in RciCategory::ALL {
        let level = city.demand().state(category).level;
        assert!((-100.0..=100.0).contains(&level));
    }
    assert_eq!(
        city.stats().population,
        city.building_count(RciCategory::Residential) * 10
    );
}

#[test]
fn test_same_seed_same_placements() {
    let run = || {
        let mut city = TestCity::new()
            .with_zone_rect(0, 0, 9, 9, ZoneKind::RESIDENTIAL_LIGHT)
            .with_zone_rect(12, 0, 17, 5, ZoneKind::COMMERCIAL_MEDIUM)
            .with_zone_rect(0, 12, 5, 17, ZoneKind::INDUSTRIAL_LIGHT);
        city.tick_days(15);
        city.placed_events()
            .into_iter()
            .map(|e| e.placement)
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}
