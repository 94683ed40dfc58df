use greenroute::comparison::scoring::{reduction_percent, sustainability_score, ImprovementRating};
use greenroute::data::store::ComparisonStore;
use greenroute::data::hubs::parse_point;
use greenroute::{compare, distance_between, estimate, route_distance, GeoPoint, TransportMode};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn hub(name: &str) -> GeoPoint {
    parse_point(name).unwrap()
}

#[test]
fn test_delhi_to_mumbai_truck_estimate() {
    let metrics = estimate(&[hub("Delhi"), hub("Mumbai")], TransportMode::Truck);

    assert!((metrics.distance_km - 1148.1).abs() < 0.5);
    assert!((metrics.transit_time_hours - metrics.distance_km / 60.0).abs() < 1e-9);
    assert!((metrics.emissions.carbon_kg - metrics.distance_km * 0.92).abs() < 1e-9);
    assert!(metrics.risk_score >= 0.0 && metrics.risk_score <= 10.0);
}

#[test]
fn test_route_distance_matches_segment_sum() {
    let route = [hub("Ludhiana"), hub("Delhi"), hub("Lucknow"), hub("Kolkata")];
    let segments: f64 = route.windows(2).map(|w| distance_between(&w[0], &w[1])).sum();
    assert!((route_distance(&route) - segments).abs() < 1e-9);
}

#[test]
fn test_reordering_improves_scattered_route() {
    let start = hub("Delhi");
    let end = hub("Bangalore");
    let waypoints = [hub("Hyderabad"), hub("Lucknow"), hub("Nagpur")];

    let comparison = compare(&start, &waypoints, &end, TransportMode::Truck);
    assert_eq!(comparison.original.path[1].label(), "Hyderabad");
    assert_eq!(comparison.optimized.path[1].label(), "Lucknow");

    let score = sustainability_score(&comparison).unwrap();
    assert!(score.overall > 0.0);
    let expected = reduction_percent(
        comparison.original.emissions.carbon_kg,
        comparison.optimized.emissions.carbon_kg,
    )
    .unwrap();
    assert!((score.carbon - expected).abs() < 1e-9);
}

#[test]
fn test_store_shares_latest_comparison() {
    let store = Arc::new(ComparisonStore::new());
    let notified = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&notified);
    store.subscribe(move |comparison| {
        counter.fetch_add(comparison.map_or(0, |c| c.optimized.path.len()), Ordering::SeqCst);
    });

    let comparison = compare(&hub("Mumbai"), &[hub("Vadodara")], &hub("Ahmedabad"), TransportMode::Ship);
    store.replace(comparison.clone());

    assert_eq!(notified.load(Ordering::SeqCst), 3);
    assert_eq!(*store.current().unwrap(), comparison);

    store.clear();
    assert!(store.current().is_none());
    assert_eq!(notified.load(Ordering::SeqCst), 3);
}

#[test]
fn test_presorted_route_scores_zero() {
    let start = hub("Delhi");
    let waypoints = [hub("Lucknow"), hub("Nagpur"), hub("Hyderabad")];
    let comparison = compare(&start, &waypoints, &hub("Bangalore"), TransportMode::Truck);

    assert!(comparison.is_unchanged());
    let score = sustainability_score(&comparison).unwrap();
    assert_eq!(score.carbon, 0.0);
    assert_eq!(score.energy, 0.0);
    assert_eq!(score.water, 0.0);
    assert_eq!(score.overall, 0.0);
    assert_eq!(score.rating(), ImprovementRating::Low);
}
