use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;

use greenroute::analysis::reporting;
use greenroute::config::constants::DEFAULT_TOP_PERFORMERS;
use greenroute::models::esg::{
    dataset_averages, esg_score, load_dataset, top_performers, yearly_averages, CompanyScore, EsgMetrics,
    EsgScore, ResourceFigures, YearlyAverage,
};
use greenroute::utils::logging;

#[derive(Parser)]
#[command(author, version, about = "Score companies in an environmental reporting dataset", long_about = None)]
struct Args {
    #[arg(short, long, help = "JSON array of company reporting records")]
    dataset: String,

    #[arg(long, help = "JSON file with organisation ESG metrics")]
    esg_metrics: Option<String>,

    #[arg(short, long, default_value_t = DEFAULT_TOP_PERFORMERS)]
    top: usize,

    #[arg(long, default_value_t = false)]
    json: bool,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,
}

#[derive(Serialize)]
struct DatasetReport {
    esg: EsgScore,
    averages: ResourceFigures,
    yearly: Vec<YearlyAverage>,
    top_performers: Vec<CompanyScore>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.enable_timing, false)
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))?;

    let metrics: EsgMetrics = match &args.esg_metrics {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open {}", path))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse ESG metrics from {}", path))?
        }
        None => EsgMetrics::default(),
    };

    let records = load_dataset(&args.dataset)
        .with_context(|| format!("failed to load dataset from {}", args.dataset))?;

    let report = DatasetReport {
        esg: esg_score(&metrics),
        averages: dataset_averages(&records)?,
        yearly: yearly_averages(&records),
        top_performers: top_performers(&records, args.top)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reporting::print_dataset_summary(&report.esg, &report.averages, &report.yearly, &report.top_performers);
    }

    logging::print_timing_report();
    Ok(())
}
