use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::config::constants::{MIN_SHIPMENT_VOLUME, SHIPMENT_VOLUME_SPAN};
use crate::config::estimator_config::EstimatorConfig;
use crate::config::transport_mode::TransportMode;
use crate::data::hubs::Hub;
use crate::data::poi::POI;
use crate::estimator::metrics::{estimate_with, RouteMetrics};
use crate::utils::logging::{self, FileIOType, OperationCategory};

/// Direct route between two hubs with its simulated shipment volume
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkArc {
    pub from: String,
    pub to: String,
    pub volume: u32,
    pub metrics: RouteMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkAnalysis {
    pub mode: TransportMode,
    pub arcs: Vec<NetworkArc>,
}

impl NetworkAnalysis {
    pub fn total_distance_km(&self) -> f64 {
        self.arcs.iter().map(|arc| arc.metrics.distance_km).sum()
    }

    pub fn total_carbon_kg(&self) -> f64 {
        self.arcs.iter().map(|arc| arc.metrics.emissions.carbon_kg).sum()
    }

    /// Carbon weighted by shipment volume
    pub fn volume_weighted_carbon_kg(&self) -> f64 {
        self.arcs
            .iter()
            .map(|arc| arc.metrics.emissions.carbon_kg * arc.volume as f64)
            .sum()
    }

    pub fn longest_arc(&self) -> Option<&NetworkArc> {
        self.arcs
            .iter()
            .max_by(|a, b| a.metrics.distance_km.total_cmp(&b.metrics.distance_km))
    }

    pub fn print_summary(&self) {
        println!("\nNetwork Analysis Summary ({})", self.mode.display_name());
        println!("----------------------------------------");
        println!("Arcs analysed: {}", self.arcs.len());
        println!("Total distance: {:.1} km", self.total_distance_km());
        println!("Total CO2: {:.1} kg", self.total_carbon_kg());
        println!("Volume-weighted CO2: {:.1} kg", self.volume_weighted_carbon_kg());
        if let Some(arc) = self.longest_arc() {
            println!("Longest arc: {} -> {} ({:.1} km)", arc.from, arc.to, arc.metrics.distance_km);
        }
        println!("----------------------------------------");
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let _timing = logging::start_timing("save_network_analysis",
            OperationCategory::FileIO { subcategory: FileIOType::ResultsSave });

        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path.as_ref())?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

/// Every unordered hub pair, in hub order
pub fn hub_pairs(hubs: &[Hub]) -> Vec<(&Hub, &Hub)> {
    hubs.iter()
        .enumerate()
        .flat_map(|(i, from)| hubs[i + 1..].iter().map(move |to| (from, to)))
        .collect()
}

/// Estimate every hub pair in parallel. Volumes are drawn up front in pair
/// order so a given seed always yields the same volumes.
pub fn analyze_network<F>(
    hubs: &[Hub],
    mode: TransportMode,
    config: &EstimatorConfig,
    seed: Option<u64>,
    on_arc_done: F,
) -> NetworkAnalysis
where
    F: Fn() + Sync,
{
    let _timing = logging::start_timing("analyze_network", OperationCategory::NetworkAnalysis);

    let pairs = hub_pairs(hubs);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let volumes: Vec<u32> = pairs
        .iter()
        .map(|_| MIN_SHIPMENT_VOLUME + rng.gen_range(0..SHIPMENT_VOLUME_SPAN))
        .collect();

    info!("Analysing {} hub pairs by {}", pairs.len(), mode);

    let arcs = pairs
        .par_iter()
        .zip(volumes.par_iter())
        .map(|((from, to), &volume)| {
            let path = [from.get_point().clone(), to.get_point().clone()];
            let arc = NetworkArc {
                from: from.get_id().to_string(),
                to: to.get_id().to_string(),
                volume,
                metrics: estimate_with(&path, mode, config),
            };
            on_arc_done();
            arc
        })
        .collect();

    NetworkAnalysis { mode, arcs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::hubs::network_hubs;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_pairs_cover_network() {
        let hubs = network_hubs();
        let pairs = hub_pairs(&hubs);
        assert_eq!(pairs.len(), 12 * 11 / 2);
        assert_eq!(pairs[0].0.name(), "Delhi");
        assert_eq!(pairs[0].1.name(), "Mumbai");
    }

    #[test]
    fn test_analysis_is_seeded() {
        let hubs = network_hubs();
        let config = EstimatorConfig::default();
        let first = analyze_network(&hubs, TransportMode::Truck, &config, Some(7), || {});
        let second = analyze_network(&hubs, TransportMode::Truck, &config, Some(7), || {});

        let volumes = |a: &NetworkAnalysis| a.arcs.iter().map(|arc| arc.volume).collect::<Vec<_>>();
        assert_eq!(volumes(&first), volumes(&second));
        assert!(first.arcs.iter().all(|arc| (500..1500).contains(&arc.volume)));
    }

    #[test]
    fn test_progress_callback_per_arc() {
        let hubs = network_hubs();
        let done = AtomicUsize::new(0);
        let analysis = analyze_network(&hubs[..4], TransportMode::Ship, &EstimatorConfig::default(), Some(1), || {
            done.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(analysis.arcs.len(), 6);
        assert_eq!(done.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_totals() {
        let hubs = network_hubs();
        let analysis = analyze_network(&hubs[..3], TransportMode::Truck, &EstimatorConfig::default(), Some(3), || {});
        let expected: f64 = analysis.arcs.iter().map(|arc| arc.metrics.distance_km).sum();
        assert!((analysis.total_distance_km() - expected).abs() < 1e-9);
        assert!(analysis.volume_weighted_carbon_kg() > analysis.total_carbon_kg());
        let longest = analysis.longest_arc().unwrap();
        assert_eq!((longest.from.as_str(), longest.to.as_str()), ("Delhi", "Chennai"));
    }
}
