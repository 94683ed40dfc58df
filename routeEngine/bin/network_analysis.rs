use anyhow::{anyhow, Context, Result};
use chrono::Local;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use greenroute::analysis::network::{analyze_network, hub_pairs};
use greenroute::config::estimator_config::EstimatorConfig;
use greenroute::config::transport_mode::TransportMode;
use greenroute::data::hubs::network_hubs;
use greenroute::utils::logging;

#[derive(Parser)]
#[command(author, version, about = "Estimate every direct route in the built-in hub network", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = TransportMode::Truck)]
    mode: TransportMode,

    #[arg(short, long, help = "JSON file with per-mode profiles")]
    config: Option<String>,

    #[arg(long, help = "Random seed for deterministic shipment volumes")]
    seed: Option<u64>,

    #[arg(short, long, default_value = "network_results")]
    output_dir: String,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.enable_timing, false)
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))?;

    let config = match &args.config {
        Some(path) => EstimatorConfig::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => EstimatorConfig::default(),
    };

    let hubs = network_hubs();
    let progress = ProgressBar::new(hub_pairs(&hubs).len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} arcs")
            .context("invalid progress template")?,
    );

    let analysis = analyze_network(&hubs, args.mode, &config, args.seed, || progress.inc(1));
    progress.finish_and_clear();

    analysis.print_summary();

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("failed to create {}", args.output_dir))?;
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let output_path = Path::new(&args.output_dir)
        .join(format!("network_{}_{}.json", args.mode, timestamp));

    println!("\nSaving network analysis to {}...", output_path.display());
    analysis.save_to_file(&output_path)?;

    logging::print_timing_report();
    Ok(())
}
