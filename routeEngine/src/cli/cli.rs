use clap::Parser;

use crate::config::transport_mode::TransportMode;
use crate::estimator::risk::{Terrain, WeatherCondition};

#[derive(Parser)]
#[command(author, version, about = "Compare a supply-chain route against its start-distance reordering", long_about = None)]
pub struct Args {
    #[arg(short, long, help = "Start point as \"lat,lon[,label]\" or a hub name", required_unless_present = "list_hubs")]
    start: Option<String>,

    #[arg(short, long, help = "End point as \"lat,lon[,label]\" or a hub name", required_unless_present = "list_hubs")]
    end: Option<String>,

    #[arg(short = 'w', long = "via", help = "Waypoint, repeatable, in travel order")]
    waypoints: Vec<String>,

    #[arg(short, long, default_value_t = TransportMode::Truck)]
    mode: TransportMode,

    #[arg(short, long, help = "JSON file with per-mode profiles")]
    config: Option<String>,

    #[arg(long, default_value_t = WeatherCondition::Clear)]
    weather: WeatherCondition,

    #[arg(long, default_value_t = Terrain::Flat)]
    terrain: Terrain,

    #[arg(long, help = "Print the comparison as JSON instead of a report", default_value_t = false)]
    json: bool,

    #[arg(long, help = "List the built-in hubs and exit", default_value_t = false)]
    list_hubs: bool,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,
}

impl Args {
    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    pub fn waypoints(&self) -> &[String] {
        &self.waypoints
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn weather(&self) -> WeatherCondition {
        self.weather
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn list_hubs(&self) -> bool {
        self.list_hubs
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }
}
