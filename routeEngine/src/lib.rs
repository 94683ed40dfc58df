// Main module declarations for the route engine

// Distance, cost and emissions estimation
pub mod estimator {
    pub mod distance;
    pub mod metrics;
    pub mod risk;
    pub mod impact;
}

// Original vs optimized route comparison
pub mod comparison {
    pub mod pipeline;
    pub mod scoring;
}

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod transport_mode;
    pub mod estimator_config;
}

// Model definitions
pub mod models {
    pub mod container;
    pub mod footprint;
    pub mod esg;
}

// Points, built-in hub network and shared stores
pub mod data {
    pub mod poi;
    pub mod hubs;
    pub mod store;
}

// Analysis over the hub network
pub mod analysis {
    pub mod network;
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod logging;
}

// Error types
pub mod error;

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::comparison::pipeline::{compare, RouteComparison};
pub use crate::config::transport_mode::TransportMode;
pub use crate::data::poi::GeoPoint;
pub use crate::estimator::distance::{distance_between, route_distance};
pub use crate::estimator::metrics::{estimate, RouteMetrics};
