use serde::{Deserialize, Serialize};
use tracing::debug;

use super::distance::route_distance;
use crate::config::constants::*;
use crate::config::estimator_config::EstimatorConfig;
use crate::config::transport_mode::{ModeProfile, TransportMode};
use crate::data::poi::GeoPoint;
use crate::utils::logging::{self, EstimationType, OperationCategory};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Emissions {
    pub carbon_kg: f64,
    pub energy_kwh: f64,
    pub water_liters: f64,
}

impl Emissions {
    /// Energy and water are fixed multiples of carbon
    pub fn from_carbon(carbon_kg: f64) -> Self {
        Self {
            carbon_kg,
            energy_kwh: carbon_kg * ENERGY_KWH_PER_KG_CARBON,
            water_liters: carbon_kg * WATER_LITERS_PER_KG_CARBON,
        }
    }
}

/// Metrics for one ordered path under one transport mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    pub path: Vec<GeoPoint>,
    pub mode: TransportMode,
    pub distance_km: f64,
    pub transit_time_hours: f64,
    pub emissions: Emissions,
    pub fuel_liters: f64,
    pub cost_currency: f64,
    pub risk_score: f64,
}

impl RouteMetrics {
    pub fn transit_days(&self) -> u32 {
        hours_to_days(self.transit_time_hours)
    }
}

/// Estimate a path with the built-in mode profiles.
pub fn estimate(points: &[GeoPoint], mode: TransportMode) -> RouteMetrics {
    estimate_with_profile(points, mode, &mode.profile())
}

/// Estimate a path with a configured profile table.
pub fn estimate_with(points: &[GeoPoint], mode: TransportMode, config: &EstimatorConfig) -> RouteMetrics {
    estimate_with_profile(points, mode, config.profile_for(mode))
}

fn estimate_with_profile(points: &[GeoPoint], mode: TransportMode, profile: &ModeProfile) -> RouteMetrics {
    let _timing = logging::start_timing("estimate",
        OperationCategory::Estimation { subcategory: EstimationType::Metrics });

    let distance_km = {
        let _timing = logging::start_timing("route_distance",
            OperationCategory::Estimation { subcategory: EstimationType::Distance });
        route_distance(points)
    };

    let transit_time_hours = distance_km / profile.average_speed_kmh;
    let emissions = Emissions::from_carbon(distance_km * profile.co2_kg_per_km);
    let fuel_liters = distance_km * profile.fuel_liters_per_km;
    let cost_currency = distance_km * profile.base_cost_per_km + fuel_liters * profile.fuel_price_per_liter;

    debug!(
        "Estimated {} stops by {}: {:.1} km, {:.1} h, {:.1} kg CO2",
        points.len(), mode, distance_km, transit_time_hours, emissions.carbon_kg
    );

    RouteMetrics {
        path: points.to_vec(),
        mode,
        distance_km,
        transit_time_hours,
        emissions,
        fuel_liters,
        cost_currency,
        risk_score: distance_risk_score(distance_km),
    }
}

/// `min(round(distance / 1000 * 1.5), 10)`, NaN preserved.
pub fn distance_risk_score(distance_km: f64) -> f64 {
    let raw = (distance_km / 1000.0 * RISK_POINTS_PER_1000_KM).round();
    if raw > MAX_RISK_SCORE { MAX_RISK_SCORE } else { raw }
}

/// Whole days needed to cover a distance, rounded up.
pub fn transit_days(distance_km: f64, mode: TransportMode) -> u32 {
    hours_to_days(distance_km / mode.profile().average_speed_kmh)
}

fn hours_to_days(hours: f64) -> u32 {
    if !hours.is_finite() || hours <= 0.0 {
        return 0;
    }
    (hours / HOURS_PER_DAY).ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi() -> GeoPoint {
        GeoPoint::new(28.6139, 77.2090, "Delhi")
    }

    fn mumbai() -> GeoPoint {
        GeoPoint::new(19.0760, 72.8777, "Mumbai")
    }

    #[test]
    fn test_delhi_mumbai_by_truck() {
        let metrics = estimate(&[delhi(), mumbai()], TransportMode::Truck);

        // 1148.09 km at 60 km/h and 0.92 kg/km
        assert!((metrics.transit_time_hours - 19.135).abs() < 0.01, "{}", metrics.transit_time_hours);
        assert!((metrics.emissions.carbon_kg - 1056.25).abs() < 0.5, "{}", metrics.emissions.carbon_kg);
        assert!((metrics.fuel_liters - 401.83).abs() < 0.5);
        assert!((metrics.cost_currency - 2204.34).abs() < 1.0);
        assert_eq!(metrics.risk_score, 2.0);
        assert_eq!(metrics.transit_days(), 1);
        assert_eq!(metrics.path.len(), 2);
    }

    #[test]
    fn test_derived_emissions_are_multiples_of_carbon() {
        let metrics = estimate(&[delhi(), mumbai()], TransportMode::Ship);
        let carbon = metrics.emissions.carbon_kg;
        assert!((metrics.emissions.energy_kwh - carbon * 3.2).abs() < 1e-9);
        assert!((metrics.emissions.water_liters - carbon * 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_ship_is_slower_and_cleaner() {
        let route = [delhi(), mumbai()];
        let truck = estimate(&route, TransportMode::Truck);
        let ship = estimate(&route, TransportMode::Ship);
        assert!(ship.transit_time_hours > truck.transit_time_hours);
        assert!(ship.emissions.carbon_kg < truck.emissions.carbon_kg);
        assert_eq!(ship.distance_km, truck.distance_km);
    }

    #[test]
    fn test_single_point_route_is_zero() {
        let metrics = estimate(&[delhi()], TransportMode::Truck);
        assert_eq!(metrics.distance_km, 0.0);
        assert_eq!(metrics.cost_currency, 0.0);
        assert_eq!(metrics.risk_score, 0.0);
        assert_eq!(metrics.transit_days(), 0);
    }

    #[test]
    fn test_risk_score_is_capped() {
        assert_eq!(distance_risk_score(0.0), 0.0);
        assert_eq!(distance_risk_score(1000.0), 2.0); // 1.5 rounds up
        assert_eq!(distance_risk_score(3000.0), 5.0); // 4.5 rounds up
        assert_eq!(distance_risk_score(20_000.0), 10.0);
        assert!(distance_risk_score(f64::NAN).is_nan());
    }

    #[test]
    fn test_fields_grow_with_distance() {
        let short = estimate(&[delhi(), GeoPoint::new(27.0, 77.0, "near")], TransportMode::Truck);
        let long = estimate(&[delhi(), mumbai()], TransportMode::Truck);
        assert!(long.distance_km > short.distance_km);
        assert!(long.transit_time_hours > short.transit_time_hours);
        assert!(long.emissions.carbon_kg > short.emissions.carbon_kg);
        assert!(long.fuel_liters > short.fuel_liters);
        assert!(long.cost_currency > short.cost_currency);
        assert!(long.risk_score >= short.risk_score);
    }

    #[test]
    fn test_nan_input_propagates() {
        let metrics = estimate(&[GeoPoint::new(f64::NAN, 0.0, "bad"), delhi()], TransportMode::Truck);
        assert!(metrics.distance_km.is_nan());
        assert!(metrics.emissions.water_liters.is_nan());
        assert!(metrics.cost_currency.is_nan());
        assert!(metrics.risk_score.is_nan());
    }

    #[test]
    fn test_estimate_with_config() {
        let mut config = EstimatorConfig::default();
        config.truck.average_speed_kmh = 120.0;
        let route = [delhi(), mumbai()];
        let fast = estimate_with(&route, TransportMode::Truck, &config);
        let normal = estimate(&route, TransportMode::Truck);
        assert!((fast.transit_time_hours * 2.0 - normal.transit_time_hours).abs() < 1e-9);
        assert_eq!(fast.emissions, normal.emissions);
    }

    #[test]
    fn test_transit_days() {
        assert_eq!(transit_days(0.0, TransportMode::Truck), 0);
        assert_eq!(transit_days(1440.0, TransportMode::Truck), 1);
        assert_eq!(transit_days(1441.0, TransportMode::Truck), 2);
        assert_eq!(transit_days(1000.0, TransportMode::Ship), 2);
    }
}
