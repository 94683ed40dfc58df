use serde::{Deserialize, Serialize};

/// Inner dimensions of a shipping container, in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerDimensions {
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

impl Default for ContainerDimensions {
    // 40 ft high-cube, rounded
    fn default() -> Self {
        Self { length: 12.0, width: 2.4, height: 2.6 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageLine {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub quantity: u32,
}

impl PackageLine {
    pub fn total_volume(&self) -> f64 {
        self.length * self.width * self.height * self.quantity as f64
    }
}

/// Package volume as a percentage of container volume. Can exceed 100 when the
/// packages do not fit. `None` for an empty container.
pub fn loading_efficiency(container: &ContainerDimensions, packages: &[PackageLine]) -> Option<f64> {
    let container_volume = container.volume();
    if container_volume <= 0.0 || !container_volume.is_finite() {
        return None;
    }

    let package_volume: f64 = packages.iter().map(PackageLine::total_volume).sum();
    Some(package_volume / container_volume * 100.0)
}
