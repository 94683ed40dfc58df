// Carbon footprint calculator over operational activity figures
use serde::{Deserialize, Serialize};

use crate::config::constants::*;

/// Annual activity figures. Freight in ton-km, electricity in kWh, gas and
/// water in m3, fuel oil in liters, weights in kg, floor space in m2.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FootprintInput {
    pub road_freight: f64,
    pub air_freight: f64,
    pub ocean_freight: f64,
    pub rail_freight: f64,
    pub electricity: f64,
    pub natural_gas: f64,
    pub fuel_oil: f64,
    pub raw_materials_weight: f64,
    pub packaging_weight: f64,
    pub waste_generated: f64,
    pub office_space: f64,
    pub warehouse_space: f64,
    pub manufacturing_space: f64,
    pub water_consumption: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootprintBreakdown {
    pub transportation: f64,
    pub energy: f64,
    pub materials: f64,
    pub facilities: f64,
    pub water: f64,
    pub total: f64,
    /// kg CO2e per kg of raw material
    pub intensity: f64,
}

pub fn calculate_footprint(input: &FootprintInput) -> FootprintBreakdown {
    let transportation = input.road_freight * ROAD_FREIGHT_FACTOR
        + input.air_freight * AIR_FREIGHT_FACTOR
        + input.ocean_freight * OCEAN_FREIGHT_FACTOR
        + input.rail_freight * RAIL_FREIGHT_FACTOR;

    let energy = input.electricity * ELECTRICITY_FACTOR
        + input.natural_gas * NATURAL_GAS_FACTOR
        + input.fuel_oil * FUEL_OIL_FACTOR;

    let materials = input.raw_materials_weight * RAW_MATERIALS_FACTOR
        + input.packaging_weight * PACKAGING_FACTOR
        + input.waste_generated * WASTE_FACTOR;

    let facilities = (input.office_space + input.warehouse_space + input.manufacturing_space) * FLOOR_SPACE_FACTOR;

    let water = input.water_consumption * WATER_FACTOR;

    let total = transportation + energy + materials + facilities + water;

    // No raw material figure: report the total as the intensity
    let denominator = if input.raw_materials_weight == 0.0 { 1.0 } else { input.raw_materials_weight };

    FootprintBreakdown {
        transportation,
        energy,
        materials,
        facilities,
        water,
        total,
        intensity: total / denominator,
    }
}
