// Scoring module - reduction percentages between the original and optimized routes
use serde::{Deserialize, Serialize};
use std::fmt;

use super::pipeline::RouteComparison;
use crate::config::constants::*;
use crate::error::{ComparisonError, Metric};
use crate::utils::logging::{self, ComparisonType, OperationCategory};

/// `(original - optimized) / original * 100`.
///
/// A zero or non-finite baseline has no meaningful percentage and is reported
/// as `UndefinedImprovement` rather than Infinity or NaN.
pub fn reduction_percent(original: f64, optimized: f64) -> Result<f64, ComparisonError> {
    if original == 0.0 || !original.is_finite() || !optimized.is_finite() {
        return Err(ComparisonError::UndefinedImprovement { metric: None, baseline: original });
    }
    Ok((original - optimized) / original * 100.0)
}

fn metric_reduction(metric: Metric, original: f64, optimized: f64) -> Result<f64, ComparisonError> {
    reduction_percent(original, optimized).map_err(|_| ComparisonError::UndefinedImprovement {
        metric: Some(metric),
        baseline: original,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityScore {
    pub carbon: f64,
    pub energy: f64,
    pub water: f64,
    pub overall: f64,
}

impl SustainabilityScore {
    pub fn rating(&self) -> ImprovementRating {
        ImprovementRating::from_percent(self.overall)
    }
}

/// Per-metric reductions for carbon, energy and water, and their mean.
pub fn sustainability_score(comparison: &RouteComparison) -> Result<SustainabilityScore, ComparisonError> {
    let _timing = logging::start_timing("sustainability_score",
        OperationCategory::Comparison { subcategory: ComparisonType::Scoring });

    let original = &comparison.original.emissions;
    let optimized = &comparison.optimized.emissions;

    let carbon = metric_reduction(Metric::Carbon, original.carbon_kg, optimized.carbon_kg)?;
    let energy = metric_reduction(Metric::Energy, original.energy_kwh, optimized.energy_kwh)?;
    let water = metric_reduction(Metric::Water, original.water_liters, optimized.water_liters)?;

    Ok(SustainabilityScore {
        carbon,
        energy,
        water,
        overall: (carbon + energy + water) / 3.0,
    })
}

/// Weighted blend of distance and carbon reductions, rounded to two decimals.
pub fn optimization_score(comparison: &RouteComparison) -> Result<f64, ComparisonError> {
    let _timing = logging::start_timing("optimization_score",
        OperationCategory::Comparison { subcategory: ComparisonType::Scoring });

    let distance = metric_reduction(
        Metric::Distance,
        comparison.original.distance_km,
        comparison.optimized.distance_km,
    )?;
    let emissions = metric_reduction(
        Metric::Carbon,
        comparison.original.emissions.carbon_kg,
        comparison.optimized.emissions.carbon_kg,
    )?;

    let score = distance * DISTANCE_IMPROVEMENT_WEIGHT + emissions * EMISSIONS_IMPROVEMENT_WEIGHT;
    Ok((score * 100.0).round() / 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImprovementRating {
    High,
    Moderate,
    Low,
}

impl ImprovementRating {
    pub fn from_percent(percent: f64) -> Self {
        if percent > HIGH_IMPROVEMENT_THRESHOLD {
            ImprovementRating::High
        } else if percent > MODERATE_IMPROVEMENT_THRESHOLD {
            ImprovementRating::Moderate
        } else {
            ImprovementRating::Low
        }
    }
}

impl fmt::Display for ImprovementRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImprovementRating::High => write!(f, "High"),
            ImprovementRating::Moderate => write!(f, "Moderate"),
            ImprovementRating::Low => write!(f, "Low"),
        }
    }
}
