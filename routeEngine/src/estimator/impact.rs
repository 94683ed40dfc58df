use super::metrics::{estimate, RouteMetrics};
use crate::config::constants::{IMPACT_POINTS_PER_100_LITERS_FUEL, IMPACT_POINTS_PER_TONNE_CO2, MAX_IMPACT_SCORE};
use crate::config::transport_mode::TransportMode;
use crate::data::poi::GeoPoint;
use crate::utils::logging::{self, EstimationType, OperationCategory};

/// Environmental score out of 100 for a route; higher is cleaner.
pub fn environmental_impact(points: &[GeoPoint], mode: TransportMode) -> f64 {
    impact_from_metrics(&estimate(points, mode))
}

pub fn impact_from_metrics(metrics: &RouteMetrics) -> f64 {
    let _timing = logging::start_timing("environmental_impact",
        OperationCategory::Estimation { subcategory: EstimationType::Impact });

    let emissions_penalty = metrics.emissions.carbon_kg / 1000.0 * IMPACT_POINTS_PER_TONNE_CO2;
    let fuel_penalty = metrics.fuel_liters / 100.0 * IMPACT_POINTS_PER_100_LITERS_FUEL;

    (MAX_IMPACT_SCORE - emissions_penalty - fuel_penalty).round().clamp(0.0, MAX_IMPACT_SCORE)
}
