// Geodesy
pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

// Truck profile
pub const TRUCK_AVERAGE_SPEED_KMH: f64 = 60.0;
pub const TRUCK_CO2_PER_KM: f64 = 0.92;          // kg CO2/km
pub const TRUCK_FUEL_PER_KM: f64 = 0.35;         // L/km
pub const TRUCK_BASE_COST_PER_KM: f64 = 1.5;
pub const TRUCK_FUEL_PRICE_PER_LITER: f64 = 1.2;

// Ship profile
pub const SHIP_AVERAGE_SPEED_KMH: f64 = 40.0;
pub const SHIP_CO2_PER_KM: f64 = 0.04;           // kg CO2/km
pub const SHIP_FUEL_PER_KM: f64 = 0.12;          // L/km
pub const SHIP_BASE_COST_PER_KM: f64 = 0.8;
pub const SHIP_FUEL_PRICE_PER_LITER: f64 = 0.8;

// Derived emissions
pub const ENERGY_KWH_PER_KG_CARBON: f64 = 3.2;
pub const WATER_LITERS_PER_KG_CARBON: f64 = 0.8;

// Distance-based risk
pub const RISK_POINTS_PER_1000_KM: f64 = 1.5;
pub const MAX_RISK_SCORE: f64 = 10.0;

// Conditional risk assessment
pub const BASE_RISK_SCORE: f64 = 5.0;
pub const LONG_HAUL_THRESHOLD_KM: f64 = 5000.0;
pub const MEDIUM_HAUL_THRESHOLD_KM: f64 = 2000.0;
pub const LONG_HAUL_RISK: f64 = 2.0;
pub const MEDIUM_HAUL_RISK: f64 = 1.0;
pub const SEVERE_WEATHER_RISK: f64 = 3.0;
pub const MODERATE_WEATHER_RISK: f64 = 1.0;
pub const MOUNTAINOUS_TERRAIN_RISK: f64 = 2.0;
pub const HILLY_TERRAIN_RISK: f64 = 1.0;

// Environmental impact score
pub const MAX_IMPACT_SCORE: f64 = 100.0;
pub const IMPACT_POINTS_PER_TONNE_CO2: f64 = 10.0;   // per 1000 kg
pub const IMPACT_POINTS_PER_100_LITERS_FUEL: f64 = 5.0;

// Optimization score weights
pub const DISTANCE_IMPROVEMENT_WEIGHT: f64 = 0.6;
pub const EMISSIONS_IMPROVEMENT_WEIGHT: f64 = 0.4;

// Improvement rating thresholds (percent)
pub const HIGH_IMPROVEMENT_THRESHOLD: f64 = 25.0;
pub const MODERATE_IMPROVEMENT_THRESHOLD: f64 = 10.0;

pub const HOURS_PER_DAY: f64 = 24.0;

// Network analysis shipment volumes
pub const MIN_SHIPMENT_VOLUME: u32 = 500;
pub const SHIPMENT_VOLUME_SPAN: u32 = 1000;

// Carbon footprint emission factors (kg CO2e per unit)
pub const ROAD_FREIGHT_FACTOR: f64 = 0.1;       // per ton-km
pub const AIR_FREIGHT_FACTOR: f64 = 0.5;
pub const OCEAN_FREIGHT_FACTOR: f64 = 0.015;
pub const RAIL_FREIGHT_FACTOR: f64 = 0.03;
pub const ELECTRICITY_FACTOR: f64 = 0.5;        // per kWh
pub const NATURAL_GAS_FACTOR: f64 = 2.1;        // per m3
pub const FUEL_OIL_FACTOR: f64 = 2.7;           // per liter
pub const RAW_MATERIALS_FACTOR: f64 = 3.0;      // per kg
pub const PACKAGING_FACTOR: f64 = 2.0;
pub const WASTE_FACTOR: f64 = 0.5;
pub const FLOOR_SPACE_FACTOR: f64 = 0.1;        // per m2
pub const WATER_FACTOR: f64 = 0.3;              // per m3

// ESG composite weights
pub const ESG_ENVIRONMENTAL_WEIGHT: f64 = 0.4;
pub const ESG_SOCIAL_WEIGHT: f64 = 0.3;
pub const ESG_GOVERNANCE_WEIGHT: f64 = 0.3;

// Each pillar: two percentage components at 0.3 and one at 0.4
pub const ESG_MINOR_COMPONENT_WEIGHT: f64 = 0.3;
pub const ESG_MAJOR_COMPONENT_WEIGHT: f64 = 0.4;
pub const ESG_CARBON_REFERENCE_KG: f64 = 200_000.0;
pub const ESG_INCIDENT_REFERENCE: f64 = 20.0;

// Company sustainability score weights
pub const COMPANY_EMISSIONS_WEIGHT: f64 = 0.4;
pub const COMPANY_ENERGY_WEIGHT: f64 = 0.35;
pub const COMPANY_WASTE_WEIGHT: f64 = 0.25;
pub const DEFAULT_TOP_PERFORMERS: usize = 5;
