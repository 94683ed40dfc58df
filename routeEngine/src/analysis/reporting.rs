use crate::comparison::pipeline::RouteComparison;
use crate::comparison::scoring::SustainabilityScore;
use crate::error::ComparisonError;
use crate::estimator::metrics::RouteMetrics;
use crate::models::esg::{CompanyScore, EsgScore, ResourceFigures, YearlyAverage};

pub fn print_route_metrics(title: &str, metrics: &RouteMetrics) {
    let stops: Vec<&str> = metrics.path.iter().map(|point| point.label()).collect();

    println!("\n{} ({})", title, metrics.mode.display_name());
    println!("----------------------------------------");
    println!("Path: {}", stops.join(" -> "));
    println!("Distance: {:.0} km", metrics.distance_km);
    println!("Transit time: {:.1} hours ({} days)", metrics.transit_time_hours, metrics.transit_days());
    println!("Emissions:");
    println!("  Carbon: {:.0} kg CO2", metrics.emissions.carbon_kg);
    println!("  Energy: {:.0} kWh", metrics.emissions.energy_kwh);
    println!("  Water: {:.0} L", metrics.emissions.water_liters);
    println!("Fuel: {:.0} L", metrics.fuel_liters);
    println!("Cost: {:.0}", metrics.cost_currency);
    println!("Risk score: {:.0}/10", metrics.risk_score);
}

pub fn print_comparison(comparison: &RouteComparison, score: &Result<SustainabilityScore, ComparisonError>) {
    print_route_metrics("Original Route", &comparison.original);
    print_route_metrics("Optimized Route", &comparison.optimized);

    println!("\nSustainability Impact");
    println!("----------------------------------------");
    match score {
        Ok(score) => {
            println!("  Carbon reduction: {:.1}%", score.carbon);
            println!("  Energy reduction: {:.1}%", score.energy);
            println!("  Water reduction: {:.1}%", score.water);
            println!("  Overall: {:.1}% ({})", score.overall, score.rating());
        }
        Err(err) => println!("  {}", err),
    }
    if comparison.is_unchanged() {
        println!("  Waypoints were already ordered by distance from start");
    }
    println!("----------------------------------------");
}

pub fn print_dataset_summary(
    esg: &EsgScore,
    averages: &ResourceFigures,
    yearly: &[YearlyAverage],
    top: &[CompanyScore],
) {
    println!("\nESG Score: {:.0}/100", esg.overall);
    println!("----------------------------------------");
    println!("  Environmental: {:.1}", esg.environmental);
    println!("  Social: {:.1}", esg.social);
    println!("  Governance: {:.1}", esg.governance);

    println!("\nDataset Averages");
    println!("----------------------------------------");
    println!("  Emissions: {:.0} kg CO2e", averages.emissions);
    println!("  Energy: {:.0} kWh", averages.energy);
    println!("  Waste: {:.0} kg", averages.waste);

    println!("\nYearly Averages");
    println!("----------------------------------------");
    for year in yearly {
        println!(
            "  {} ({} records): {:.0} kg CO2e, {:.0} kWh, {:.0} kg waste",
            year.year, year.records, year.averages.emissions, year.averages.energy, year.averages.waste
        );
    }

    println!("\nTop Performers");
    println!("----------------------------------------");
    for (rank, company) in top.iter().enumerate() {
        println!("  {}. {} ({}): {:.0}/100", rank + 1, company.company, company.year, company.score);
    }
    println!("----------------------------------------");
}
