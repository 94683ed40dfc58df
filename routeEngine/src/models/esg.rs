// ESG composite and company-level sustainability analytics
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::config::constants::*;
use crate::error::{ConfigError, DatasetError, ResourceMetric};
use crate::utils::logging::{self, FileIOType, OperationCategory};

/// One reporting year of a company's environmental figures.
///
/// Field names follow the column headers of the reporting dataset, so an
/// exported JSON array deserializes directly. Unknown columns are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalRecord {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Year of reporting")]
    pub year: i32,
    #[serde(rename = "Product's carbon footprint (PCF, kg CO2e)")]
    pub carbon_footprint_kg: f64,
    #[serde(rename = "Energy Consumption (kWh)")]
    pub energy_kwh: f64,
    #[serde(rename = "Waste Consumption (kg)")]
    pub waste_kg: f64,
}

impl EnvironmentalRecord {
    pub fn new(company: impl Into<String>, year: i32, carbon_footprint_kg: f64, energy_kwh: f64, waste_kg: f64) -> Self {
        Self {
            company: company.into(),
            year,
            carbon_footprint_kg,
            energy_kwh,
            waste_kg,
        }
    }

    pub fn figures(&self) -> ResourceFigures {
        ResourceFigures {
            emissions: self.carbon_footprint_kg,
            energy: self.energy_kwh,
            waste: self.waste_kg,
        }
    }
}

/// Emissions in kg CO2e, energy in kWh, waste in kg
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceFigures {
    pub emissions: f64,
    pub energy: f64,
    pub waste: f64,
}

impl ResourceFigures {
    pub fn get(&self, metric: ResourceMetric) -> f64 {
        match metric {
            ResourceMetric::Emissions => self.emissions,
            ResourceMetric::Energy => self.energy,
            ResourceMetric::Waste => self.waste,
        }
    }

    fn add(&mut self, other: &ResourceFigures) {
        self.emissions += other.emissions;
        self.energy += other.energy;
        self.waste += other.waste;
    }

    fn averaged(&self, count: usize) -> ResourceFigures {
        let n = count as f64;
        ResourceFigures {
            emissions: (self.emissions / n).round(),
            energy: (self.energy / n).round(),
            waste: (self.waste / n).round(),
        }
    }
}

pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<EnvironmentalRecord>, ConfigError> {
    let _timing = logging::start_timing("load_dataset",
        OperationCategory::FileIO { subcategory: FileIOType::DatasetLoad });

    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let records: Vec<EnvironmentalRecord> = serde_json::from_reader(reader)?;
    debug!("Loaded {} environmental records from {}", records.len(), path.display());
    Ok(records)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalMetrics {
    pub carbon_emissions_kg: f64,
    pub water_usage_liters: f64,
    pub waste_generated_kg: f64,
    pub renewable_energy_percent: f64,
    pub recycling_rate_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMetrics {
    pub employee_satisfaction_percent: f64,
    pub community_investment: f64,
    pub diversity_score_percent: f64,
    pub health_safety_incidents: f64,
    pub training_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernanceMetrics {
    pub board_diversity_percent: f64,
    pub ethics_violations: f64,
    pub transparency_score_percent: f64,
    pub risk_management_score_percent: f64,
    pub compliance_rate_percent: f64,
}

/// Organisation-level ESG inputs. Defaults to the reference reporting figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsgMetrics {
    pub environmental: EnvironmentalMetrics,
    pub social: SocialMetrics,
    pub governance: GovernanceMetrics,
}

impl Default for EsgMetrics {
    fn default() -> Self {
        Self {
            environmental: EnvironmentalMetrics {
                carbon_emissions_kg: 125_000.0,
                water_usage_liters: 850_000.0,
                waste_generated_kg: 75_000.0,
                renewable_energy_percent: 35.0,
                recycling_rate_percent: 68.0,
            },
            social: SocialMetrics {
                employee_satisfaction_percent: 85.0,
                community_investment: 2_500_000.0,
                diversity_score_percent: 78.0,
                health_safety_incidents: 12.0,
                training_hours: 45_000.0,
            },
            governance: GovernanceMetrics {
                board_diversity_percent: 42.0,
                ethics_violations: 3.0,
                transparency_score_percent: 89.0,
                risk_management_score_percent: 92.0,
                compliance_rate_percent: 98.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EsgScore {
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
    /// Weighted pillar scores, rounded
    pub overall: f64,
}

// Two minor components and one major, each a fraction of 1, scaled to 0-100
fn pillar_score(first: f64, second: f64, major: f64) -> f64 {
    (first * ESG_MINOR_COMPONENT_WEIGHT + second * ESG_MINOR_COMPONENT_WEIGHT + major * ESG_MAJOR_COMPONENT_WEIGHT) * 100.0
}

/// Pillar scores are not clamped: figures beyond the reference values
/// (e.g. emissions above 200 t) push a pillar below zero.
pub fn esg_score(metrics: &EsgMetrics) -> EsgScore {
    let env = &metrics.environmental;
    let environmental = pillar_score(
        env.renewable_energy_percent / 100.0,
        env.recycling_rate_percent / 100.0,
        1.0 - env.carbon_emissions_kg / ESG_CARBON_REFERENCE_KG,
    );

    let soc = &metrics.social;
    let social = pillar_score(
        soc.employee_satisfaction_percent / 100.0,
        soc.diversity_score_percent / 100.0,
        1.0 - soc.health_safety_incidents / ESG_INCIDENT_REFERENCE,
    );

    let gov = &metrics.governance;
    let governance = pillar_score(
        gov.board_diversity_percent / 100.0,
        gov.transparency_score_percent / 100.0,
        gov.compliance_rate_percent / 100.0,
    );

    let overall = (environmental * ESG_ENVIRONMENTAL_WEIGHT
        + social * ESG_SOCIAL_WEIGHT
        + governance * ESG_GOVERNANCE_WEIGHT)
        .round();

    EsgScore { environmental, social, governance, overall }
}

/// Per-metric maxima over the dataset, the normalization reference for
/// company scores.
pub fn dataset_maxima(records: &[EnvironmentalRecord]) -> Result<ResourceFigures, DatasetError> {
    if records.is_empty() {
        return Err(DatasetError::Empty);
    }

    let mut maxima = ResourceFigures {
        emissions: f64::NEG_INFINITY,
        energy: f64::NEG_INFINITY,
        waste: f64::NEG_INFINITY,
    };
    for record in records {
        maxima.emissions = maxima.emissions.max(record.carbon_footprint_kg);
        maxima.energy = maxima.energy.max(record.energy_kwh);
        maxima.waste = maxima.waste.max(record.waste_kg);
    }

    for metric in ResourceMetric::ALL {
        let value = maxima.get(metric);
        if !(value.is_finite() && value > 0.0) {
            return Err(DatasetError::UndefinedMaximum { metric, value });
        }
    }
    Ok(maxima)
}

fn company_weight(metric: ResourceMetric) -> f64 {
    match metric {
        ResourceMetric::Emissions => COMPANY_EMISSIONS_WEIGHT,
        ResourceMetric::Energy => COMPANY_ENERGY_WEIGHT,
        ResourceMetric::Waste => COMPANY_WASTE_WEIGHT,
    }
}

/// 0-100 score, higher for smaller figures relative to the dataset maxima
pub fn company_sustainability_score(record: &EnvironmentalRecord, maxima: &ResourceFigures) -> f64 {
    let figures = record.figures();
    let score: f64 = ResourceMetric::ALL
        .iter()
        .map(|&metric| (1.0 - figures.get(metric) / maxima.get(metric)) * company_weight(metric))
        .sum();
    (score * 100.0).round()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyScore {
    pub company: String,
    pub year: i32,
    pub score: f64,
}

/// Scores every record, in dataset order
pub fn company_scores(records: &[EnvironmentalRecord]) -> Result<Vec<CompanyScore>, DatasetError> {
    let _timing = logging::start_timing("company_scores", OperationCategory::Analytics);

    let maxima = dataset_maxima(records)?;
    Ok(records
        .iter()
        .map(|record| CompanyScore {
            company: record.company.clone(),
            year: record.year,
            score: company_sustainability_score(record, &maxima),
        })
        .collect())
}

/// Highest-scoring records first. Equal scores keep dataset order.
pub fn top_performers(records: &[EnvironmentalRecord], count: usize) -> Result<Vec<CompanyScore>, DatasetError> {
    let mut scores = company_scores(records)?;
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores.truncate(count);
    Ok(scores)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyAverage {
    pub year: i32,
    /// Rounded per-record averages
    pub averages: ResourceFigures,
    pub records: usize,
}

/// Ascending by year. An empty dataset gives no years.
pub fn yearly_averages(records: &[EnvironmentalRecord]) -> Vec<YearlyAverage> {
    let _timing = logging::start_timing("yearly_averages", OperationCategory::Analytics);

    let mut by_year: BTreeMap<i32, (ResourceFigures, usize)> = BTreeMap::new();
    for record in records {
        let entry = by_year.entry(record.year).or_default();
        entry.0.add(&record.figures());
        entry.1 += 1;
    }

    by_year
        .into_iter()
        .map(|(year, (sums, count))| YearlyAverage {
            year,
            averages: sums.averaged(count),
            records: count,
        })
        .collect()
}

/// Unrounded sums per company, keyed by company name
pub fn company_totals(records: &[EnvironmentalRecord]) -> BTreeMap<String, ResourceFigures> {
    let mut totals: BTreeMap<String, ResourceFigures> = BTreeMap::new();
    for record in records {
        totals.entry(record.company.clone()).or_default().add(&record.figures());
    }
    totals
}

/// Companies with the largest totals for one metric, largest first
pub fn top_companies_by(records: &[EnvironmentalRecord], metric: ResourceMetric, count: usize) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = company_totals(records)
        .into_iter()
        .map(|(company, totals)| (company, totals.get(metric)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(count);
    ranked
}

/// Rounded per-record averages across the whole dataset
pub fn dataset_averages(records: &[EnvironmentalRecord]) -> Result<ResourceFigures, DatasetError> {
    if records.is_empty() {
        return Err(DatasetError::Empty);
    }
    let mut sums = ResourceFigures::default();
    for record in records {
        sums.add(&record.figures());
    }
    Ok(sums.averaged(records.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Vec<EnvironmentalRecord> {
        vec![
            EnvironmentalRecord::new("Acme", 2021, 100.0, 1000.0, 50.0),
            EnvironmentalRecord::new("Globex", 2021, 50.0, 500.0, 25.0),
            EnvironmentalRecord::new("Acme", 2022, 80.0, 800.0, 40.0),
            EnvironmentalRecord::new("Initech", 2020, 10.0, 100.0, 5.0),
        ]
    }

    #[test]
    fn test_reference_esg_score() {
        let score = esg_score(&EsgMetrics::default());
        assert!((score.environmental - 45.9).abs() < 1e-9, "{}", score.environmental);
        assert!((score.social - 64.9).abs() < 1e-9, "{}", score.social);
        assert!((score.governance - 78.5).abs() < 1e-9, "{}", score.governance);
        assert_eq!(score.overall, 61.0);
    }

    #[test]
    fn test_esg_score_is_not_clamped() {
        let mut metrics = EsgMetrics::default();
        metrics.environmental.carbon_emissions_kg = 600_000.0;
        metrics.environmental.renewable_energy_percent = 0.0;
        metrics.environmental.recycling_rate_percent = 0.0;
        assert!(esg_score(&metrics).environmental < 0.0);
    }

    #[test]
    fn test_company_score_extremes() {
        let dataset = sample_dataset();
        let maxima = dataset_maxima(&dataset).unwrap();

        // The record holding every maximum scores zero
        assert_eq!(company_sustainability_score(&dataset[0], &maxima), 0.0);
        // Half of every maximum scores half
        assert_eq!(company_sustainability_score(&dataset[1], &maxima), 50.0);
        assert_eq!(company_sustainability_score(&dataset[3], &maxima), 90.0);
    }

    #[test]
    fn test_company_score_weights() {
        let maxima = ResourceFigures { emissions: 100.0, energy: 100.0, waste: 100.0 };
        let only_emissions = EnvironmentalRecord::new("A", 2021, 0.0, 100.0, 100.0);
        let only_energy = EnvironmentalRecord::new("B", 2021, 100.0, 0.0, 100.0);
        let only_waste = EnvironmentalRecord::new("C", 2021, 100.0, 100.0, 0.0);

        assert_eq!(company_sustainability_score(&only_emissions, &maxima), 40.0);
        assert_eq!(company_sustainability_score(&only_energy, &maxima), 35.0);
        assert_eq!(company_sustainability_score(&only_waste, &maxima), 25.0);
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        assert_eq!(dataset_maxima(&[]), Err(DatasetError::Empty));
        assert_eq!(company_scores(&[]), Err(DatasetError::Empty));
        assert_eq!(dataset_averages(&[]), Err(DatasetError::Empty));
        assert!(yearly_averages(&[]).is_empty());
        assert!(company_totals(&[]).is_empty());
    }

    #[test]
    fn test_zero_maximum_is_an_error() {
        let dataset = vec![
            EnvironmentalRecord::new("Acme", 2021, 100.0, 1000.0, 0.0),
            EnvironmentalRecord::new("Globex", 2021, 50.0, 500.0, 0.0),
        ];
        assert_eq!(
            company_scores(&dataset),
            Err(DatasetError::UndefinedMaximum { metric: ResourceMetric::Waste, value: 0.0 })
        );
    }

    #[test]
    fn test_top_performers() {
        let top = top_performers(&sample_dataset(), 2).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].company, "Initech");
        assert_eq!(top[1].company, "Globex");
        assert!(top[0].score >= top[1].score);
    }

    #[test]
    fn test_yearly_averages_sorted_by_year() {
        let years = yearly_averages(&sample_dataset());
        let order: Vec<i32> = years.iter().map(|y| y.year).collect();
        assert_eq!(order, vec![2020, 2021, 2022]);

        let y2021 = &years[1];
        assert_eq!(y2021.records, 2);
        assert_eq!(y2021.averages.emissions, 75.0);
        assert_eq!(y2021.averages.energy, 750.0);
        assert_eq!(y2021.averages.waste, 38.0); // 37.5 rounds half away from zero
    }

    #[test]
    fn test_company_totals_and_ranking() {
        let dataset = sample_dataset();
        let totals = company_totals(&dataset);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals["Acme"].emissions, 180.0);
        assert_eq!(totals["Acme"].waste, 90.0);

        let ranked = top_companies_by(&dataset, ResourceMetric::Energy, 2);
        assert_eq!(ranked, vec![("Acme".to_string(), 1800.0), ("Globex".to_string(), 500.0)]);
    }

    #[test]
    fn test_dataset_averages() {
        let averages = dataset_averages(&sample_dataset()).unwrap();
        assert_eq!(averages.emissions, 60.0);
        assert_eq!(averages.energy, 600.0);
        assert_eq!(averages.waste, 30.0);
    }

    #[test]
    fn test_record_uses_dataset_column_names() {
        let json = r#"[{
            "Company": "Acme",
            "Year of reporting": 2021,
            "Product's carbon footprint (PCF, kg CO2e)": 12.5,
            "Energy Consumption (kWh)": 300,
            "Waste Consumption (kg)": 4,
            "Country": "India"
        }]"#;
        let records: Vec<EnvironmentalRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0], EnvironmentalRecord::new("Acme", 2021, 12.5, 300.0, 4.0));
    }
}
