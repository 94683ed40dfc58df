// Transport mode module - contains TransportMode and the per-mode cost profile
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::constants::*;

/// Transport modes a route can be estimated under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    Truck,
    Ship,
}

/// Fixed per-kilometer figures for a transport mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeProfile {
    pub average_speed_kmh: f64,
    pub co2_kg_per_km: f64,
    pub fuel_liters_per_km: f64,
    pub base_cost_per_km: f64,
    pub fuel_price_per_liter: f64,
}

impl TransportMode {
    pub const ALL: [TransportMode; 2] = [TransportMode::Truck, TransportMode::Ship];

    /// Built-in profile for this mode
    pub fn profile(&self) -> ModeProfile {
        match self {
            TransportMode::Truck => ModeProfile {
                average_speed_kmh: TRUCK_AVERAGE_SPEED_KMH,
                co2_kg_per_km: TRUCK_CO2_PER_KM,
                fuel_liters_per_km: TRUCK_FUEL_PER_KM,
                base_cost_per_km: TRUCK_BASE_COST_PER_KM,
                fuel_price_per_liter: TRUCK_FUEL_PRICE_PER_LITER,
            },
            TransportMode::Ship => ModeProfile {
                average_speed_kmh: SHIP_AVERAGE_SPEED_KMH,
                co2_kg_per_km: SHIP_CO2_PER_KM,
                fuel_liters_per_km: SHIP_FUEL_PER_KM,
                base_cost_per_km: SHIP_BASE_COST_PER_KM,
                fuel_price_per_liter: SHIP_FUEL_PRICE_PER_LITER,
            },
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TransportMode::Truck => "Truck",
            TransportMode::Ship => "Ship",
        }
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "truck" => Ok(TransportMode::Truck),
            "ship" => Ok(TransportMode::Ship),
            _ => Err(format!("Unknown transport mode: {}", s)),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Truck => write!(f, "truck"),
            TransportMode::Ship => write!(f, "ship"),
        }
    }
}
