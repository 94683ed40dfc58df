use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::estimator_config::EstimatorConfig;
use crate::config::transport_mode::TransportMode;
use crate::data::poi::GeoPoint;
use crate::estimator::distance::distance_between;
use crate::estimator::metrics::{estimate_with, RouteMetrics};
use crate::utils::logging::{self, ComparisonType, OperationCategory};

/// The route as given and the route with waypoints reordered by distance from start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteComparison {
    pub original: RouteMetrics,
    pub optimized: RouteMetrics,
}

impl RouteComparison {
    /// True when reordering left the waypoint order unchanged
    pub fn is_unchanged(&self) -> bool {
        self.original.path == self.optimized.path
    }
}

/// Compare the caller's waypoint order against the start-distance ordering.
///
/// The optimized order is a greedy single-key sort, not a shortest-path
/// search: for waypoints that are not laid out radially from the start it
/// can produce a longer route than the original.
pub fn compare(start: &GeoPoint, waypoints: &[GeoPoint], end: &GeoPoint, mode: TransportMode) -> RouteComparison {
    compare_with(start, waypoints, end, mode, &EstimatorConfig::default())
}

pub fn compare_with(
    start: &GeoPoint,
    waypoints: &[GeoPoint],
    end: &GeoPoint,
    mode: TransportMode,
    config: &EstimatorConfig,
) -> RouteComparison {
    let original_path = assemble_path(start, waypoints.iter(), end);
    let optimized_path = assemble_path(start, order_by_start_distance(start, waypoints).into_iter(), end);

    let original = estimate_with(&original_path, mode, config);
    let optimized = estimate_with(&optimized_path, mode, config);

    info!(
        "Compared {} waypoints by {}: {:.1} km original, {:.1} km optimized",
        waypoints.len(), mode, original.distance_km, optimized.distance_km
    );

    RouteComparison { original, optimized }
}

/// Waypoints sorted ascending by distance from `start`. The sort is stable, so
/// equidistant waypoints keep their input order.
pub fn order_by_start_distance<'a>(start: &GeoPoint, waypoints: &'a [GeoPoint]) -> Vec<&'a GeoPoint> {
    let _timing = logging::start_timing("order_by_start_distance",
        OperationCategory::Comparison { subcategory: ComparisonType::Reordering });

    let mut keyed: Vec<(f64, &GeoPoint)> = waypoints
        .iter()
        .map(|waypoint| (distance_between(start, waypoint), waypoint))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    debug!(
        "Reordered waypoints: {:?}",
        keyed.iter().map(|(_, w)| w.label()).collect::<Vec<_>>()
    );

    keyed.into_iter().map(|(_, waypoint)| waypoint).collect()
}

fn assemble_path<'a>(start: &'a GeoPoint, waypoints: impl Iterator<Item = &'a GeoPoint>, end: &'a GeoPoint) -> Vec<GeoPoint> {
    std::iter::once(start)
        .chain(waypoints)
        .chain(std::iter::once(end))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::scoring::{optimization_score, sustainability_score};

    fn delhi() -> GeoPoint {
        GeoPoint::new(28.6139, 77.2090, "Delhi")
    }

    fn chennai() -> GeoPoint {
        GeoPoint::new(13.0827, 80.2707, "Chennai")
    }

    fn nagpur() -> GeoPoint {
        GeoPoint::new(21.1458, 79.0882, "Nagpur")
    }

    fn lucknow() -> GeoPoint {
        GeoPoint::new(26.8467, 80.9462, "Lucknow")
    }

    fn hyderabad() -> GeoPoint {
        GeoPoint::new(17.3850, 78.4867, "Hyderabad")
    }

    fn labels(metrics: &RouteMetrics) -> Vec<&str> {
        metrics.path.iter().map(GeoPoint::label).collect()
    }

    #[test]
    fn test_original_keeps_input_order() {
        let comparison = compare(&delhi(), &[hyderabad(), nagpur(), lucknow()], &chennai(), TransportMode::Truck);
        assert_eq!(labels(&comparison.original), ["Delhi", "Hyderabad", "Nagpur", "Lucknow", "Chennai"]);
    }

    #[test]
    fn test_optimized_sorts_by_distance_from_start() {
        let comparison = compare(&delhi(), &[hyderabad(), nagpur(), lucknow()], &chennai(), TransportMode::Truck);
        assert_eq!(labels(&comparison.optimized), ["Delhi", "Lucknow", "Nagpur", "Hyderabad", "Chennai"]);
        assert!(comparison.optimized.distance_km < comparison.original.distance_km);
        assert!(!comparison.is_unchanged());
    }

    #[test]
    fn test_sorted_waypoints_are_unchanged() {
        let comparison = compare(&delhi(), &[lucknow(), nagpur(), hyderabad()], &chennai(), TransportMode::Truck);
        assert!(comparison.is_unchanged());
        assert_eq!(comparison.original, comparison.optimized);

        let score = sustainability_score(&comparison).unwrap();
        assert_eq!((score.carbon, score.energy, score.water, score.overall), (0.0, 0.0, 0.0, 0.0));
        assert_eq!(optimization_score(&comparison).unwrap(), 0.0);
    }

    #[test]
    fn test_single_waypoint_is_unchanged() {
        let comparison = compare(&delhi(), &[hyderabad()], &chennai(), TransportMode::Ship);
        assert!(comparison.is_unchanged());
    }

    #[test]
    fn test_no_waypoints() {
        let comparison = compare(&delhi(), &[], &chennai(), TransportMode::Truck);
        assert_eq!(comparison.original.path.len(), 2);
        assert!(comparison.is_unchanged());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let start = GeoPoint::new(0.0, 0.0, "start");
        let north = GeoPoint::new(1.0, 0.0, "north");
        let south = GeoPoint::new(-1.0, 0.0, "south");
        let north_first = [north.clone(), south.clone()];
        let ordered = order_by_start_distance(&start, &north_first);
        assert_eq!(ordered[0].label(), "north");

        let south_first = [south, north];
        let ordered = order_by_start_distance(&start, &south_first);
        assert_eq!(ordered[0].label(), "south");
    }

    #[test]
    fn test_heuristic_can_be_worse() {
        // Waypoints on either side of the start: sorting by start distance
        // zig-zags across it, while the given order sweeps once.
        let start = GeoPoint::new(0.0, 0.0, "start");
        let west_near = GeoPoint::new(0.0, -1.0, "west_near");
        let east_mid = GeoPoint::new(0.0, 2.0, "east_mid");
        let west_far = GeoPoint::new(0.0, -3.0, "west_far");
        let end = GeoPoint::new(0.0, 4.0, "end");

        let comparison = compare(
            &start,
            &[west_near, west_far, east_mid],
            &end,
            TransportMode::Truck,
        );
        assert_eq!(labels(&comparison.optimized), ["start", "west_near", "east_mid", "west_far", "end"]);
        assert!(comparison.optimized.distance_km > comparison.original.distance_km);
    }
}
