// Conditional route risk: distance band plus weather and terrain penalties
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::distance::route_distance;
use crate::config::constants::*;
use crate::data::poi::GeoPoint;
use crate::utils::logging::{self, EstimationType, OperationCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeatherCondition {
    #[default]
    Clear,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Terrain {
    #[default]
    Flat,
    Hilly,
    Mountainous,
}

impl WeatherCondition {
    fn risk(&self) -> f64 {
        match self {
            WeatherCondition::Clear => 0.0,
            WeatherCondition::Moderate => MODERATE_WEATHER_RISK,
            WeatherCondition::Severe => SEVERE_WEATHER_RISK,
        }
    }
}

impl Terrain {
    fn risk(&self) -> f64 {
        match self {
            Terrain::Flat => 0.0,
            Terrain::Hilly => HILLY_TERRAIN_RISK,
            Terrain::Mountainous => MOUNTAINOUS_TERRAIN_RISK,
        }
    }
}

impl FromStr for WeatherCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clear" => Ok(WeatherCondition::Clear),
            "moderate" => Ok(WeatherCondition::Moderate),
            "severe" => Ok(WeatherCondition::Severe),
            _ => Err(format!("Unknown weather condition: {}", s)),
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherCondition::Clear => write!(f, "clear"),
            WeatherCondition::Moderate => write!(f, "moderate"),
            WeatherCondition::Severe => write!(f, "severe"),
        }
    }
}

impl FromStr for Terrain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(Terrain::Flat),
            "hilly" => Ok(Terrain::Hilly),
            "mountainous" => Ok(Terrain::Mountainous),
            _ => Err(format!("Unknown terrain: {}", s)),
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terrain::Flat => write!(f, "flat"),
            Terrain::Hilly => write!(f, "hilly"),
            Terrain::Mountainous => write!(f, "mountainous"),
        }
    }
}

/// Score in [5, 10]: base 5 plus distance band, weather and terrain, capped at 10.
pub fn assess_risk(points: &[GeoPoint], weather: WeatherCondition, terrain: Terrain) -> f64 {
    let _timing = logging::start_timing("assess_risk",
        OperationCategory::Estimation { subcategory: EstimationType::Risk });

    let distance = route_distance(points);
    let distance_risk = if distance > LONG_HAUL_THRESHOLD_KM {
        LONG_HAUL_RISK
    } else if distance > MEDIUM_HAUL_THRESHOLD_KM {
        MEDIUM_HAUL_RISK
    } else {
        0.0
    };

    (BASE_RISK_SCORE + distance_risk + weather.risk() + terrain.risk()).min(MAX_RISK_SCORE)
}
