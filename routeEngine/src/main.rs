use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

use greenroute::analysis::reporting;
use greenroute::cli::cli::Args;
use greenroute::comparison::pipeline::{compare_with, RouteComparison};
use greenroute::comparison::scoring::{optimization_score, sustainability_score, SustainabilityScore};
use greenroute::config::estimator_config::EstimatorConfig;
use greenroute::data::hubs::{network_hubs, parse_point};
use greenroute::data::poi::{GeoPoint, POI};
use greenroute::estimator::impact::impact_from_metrics;
use greenroute::estimator::risk::assess_risk;
use greenroute::utils::logging::{self, FileIOType, OperationCategory};

#[derive(Serialize)]
struct ComparisonReport<'a> {
    comparison: &'a RouteComparison,
    score: Option<SustainabilityScore>,
    optimization_score: Option<f64>,
    conditional_risk: f64,
    environmental_impact: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.enable_timing(), args.debug_logging())
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))?;

    if args.list_hubs() {
        for hub in network_hubs() {
            let point = hub.get_point();
            println!("{:<12} {:>9.4} {:>9.4}  {}", hub.name(), point.latitude(), point.longitude(), hub.kind());
        }
        return Ok(());
    }

    let config = load_config(args.config())?;

    let start = resolve_point(args.start(), "start")?;
    let end = resolve_point(args.end(), "end")?;
    let waypoints = args
        .waypoints()
        .iter()
        .map(|w| parse_point(w).with_context(|| format!("invalid waypoint '{}'", w)))
        .collect::<Result<Vec<GeoPoint>>>()?;

    let comparison = compare_with(&start, &waypoints, &end, args.mode(), &config);
    let score = sustainability_score(&comparison);
    if let Err(err) = &score {
        warn!("{}", err);
    }

    let conditional_risk = assess_risk(&comparison.optimized.path, args.weather(), args.terrain());
    let environmental_impact = impact_from_metrics(&comparison.optimized);

    if args.json() {
        let report = ComparisonReport {
            comparison: &comparison,
            score: score.as_ref().ok().copied(),
            optimization_score: optimization_score(&comparison).ok(),
            conditional_risk,
            environmental_impact,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reporting::print_comparison(&comparison, &score);
        println!(
            "Conditions ({} weather, {} terrain): risk {:.0}/10, environmental score {:.0}/100",
            args.weather(), args.terrain(), conditional_risk, environmental_impact
        );
    }

    logging::print_timing_report();
    Ok(())
}

fn load_config(path: Option<&str>) -> Result<EstimatorConfig> {
    let _timing = logging::start_timing("load_config",
        OperationCategory::FileIO { subcategory: FileIOType::ConfigLoad });

    match path {
        Some(path) => {
            let config = EstimatorConfig::load_from_file(path)
                .with_context(|| format!("failed to load config from {}", path))?;
            info!("Using estimator config from {}", path);
            Ok(config)
        }
        None => Ok(EstimatorConfig::default()),
    }
}

fn resolve_point(input: Option<&str>, role: &str) -> Result<GeoPoint> {
    let input = input.ok_or_else(|| anyhow!("missing {} point", role))?;
    parse_point(input).with_context(|| format!("invalid {} point '{}'", role, input))
}
