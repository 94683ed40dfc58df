use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use tracing::debug;

use crate::config::transport_mode::{ModeProfile, TransportMode};
use crate::error::ConfigError;

/// Per-mode profile table used by the estimator. Defaults to the built-in constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    pub truck: ModeProfile,
    pub ship: ModeProfile,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            truck: TransportMode::Truck.profile(),
            ship: TransportMode::Ship.profile(),
        }
    }
}

impl EstimatorConfig {
    pub fn profile_for(&self, mode: TransportMode) -> &ModeProfile {
        match mode {
            TransportMode::Truck => &self.truck,
            TransportMode::Ship => &self.ship,
        }
    }

    /// Speeds must be positive and every factor finite and non-negative,
    /// otherwise transit time and cost stop being monotonic in distance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for mode in TransportMode::ALL {
            let p = self.profile_for(mode);
            if !(p.average_speed_kmh.is_finite() && p.average_speed_kmh > 0.0) {
                return Err(ConfigError::InvalidProfile(format!(
                    "{}: average speed must be positive, got {}",
                    mode, p.average_speed_kmh
                )));
            }
            let factors = [
                ("co2_kg_per_km", p.co2_kg_per_km),
                ("fuel_liters_per_km", p.fuel_liters_per_km),
                ("base_cost_per_km", p.base_cost_per_km),
                ("fuel_price_per_liter", p.fuel_price_per_liter),
            ];
            for (name, value) in factors {
                if !(value.is_finite() && value >= 0.0) {
                    return Err(ConfigError::InvalidProfile(format!(
                        "{}: {} must be non-negative, got {}",
                        mode, name, value
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: EstimatorConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        debug!("Loaded estimator config from {}", path.display());
        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path.as_ref())?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
