use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::poi::{GeoPoint, POI};
use crate::error::PointParseError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HubKind {
    MajorHub,
    RegionalHub,
    DistributionCenter,
    ManufacturingHub,
}

impl FromStr for HubKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Major Hub" => Ok(HubKind::MajorHub),
            "Regional Hub" => Ok(HubKind::RegionalHub),
            "Distribution Center" => Ok(HubKind::DistributionCenter),
            "Manufacturing Hub" => Ok(HubKind::ManufacturingHub),
            _ => Err(format!("Unknown hub kind: {}", s)),
        }
    }
}

impl fmt::Display for HubKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HubKind::MajorHub => write!(f, "Major Hub"),
            HubKind::RegionalHub => write!(f, "Regional Hub"),
            HubKind::DistributionCenter => write!(f, "Distribution Center"),
            HubKind::ManufacturingHub => write!(f, "Manufacturing Hub"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hub {
    point: GeoPoint,
    kind: HubKind,
}

impl Hub {
    pub fn new(point: GeoPoint, kind: HubKind) -> Self {
        Self { point, kind }
    }

    pub fn kind(&self) -> HubKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.point.label()
    }
}

impl POI for Hub {
    fn get_point(&self) -> &GeoPoint {
        &self.point
    }

    fn get_id(&self) -> &str {
        self.point.label()
    }
}

const NETWORK_HUBS: [(&str, f64, f64, HubKind); 12] = [
    ("Delhi", 28.6139, 77.2090, HubKind::MajorHub),
    ("Mumbai", 19.0760, 72.8777, HubKind::MajorHub),
    ("Chennai", 13.0827, 80.2707, HubKind::MajorHub),
    ("Kolkata", 22.5726, 88.3639, HubKind::MajorHub),
    ("Hyderabad", 17.3850, 78.4867, HubKind::RegionalHub),
    ("Bangalore", 12.9716, 77.5946, HubKind::RegionalHub),
    ("Ahmedabad", 23.0225, 72.5714, HubKind::RegionalHub),
    ("Lucknow", 26.8467, 80.9462, HubKind::RegionalHub),
    ("Bhubaneswar", 20.2961, 85.8245, HubKind::DistributionCenter),
    ("Nagpur", 21.1458, 79.0882, HubKind::DistributionCenter),
    ("Ludhiana", 30.9010, 75.8573, HubKind::ManufacturingHub),
    ("Vadodara", 22.3072, 73.1812, HubKind::ManufacturingHub),
];

/// The built-in Indian logistics hub network
pub fn network_hubs() -> Vec<Hub> {
    NETWORK_HUBS
        .iter()
        .map(|&(name, lat, lon, kind)| Hub::new(GeoPoint::new(lat, lon, name), kind))
        .collect()
}

pub fn find_hub(name: &str) -> Option<Hub> {
    let wanted = name.trim();
    network_hubs()
        .into_iter()
        .find(|hub| hub.name().eq_ignore_ascii_case(wanted))
}

/// Parse `"lat,lon[,label]"` or a hub name into a validated point.
pub fn parse_point(input: &str) -> Result<GeoPoint, PointParseError> {
    if !input.contains(',') {
        return find_hub(input)
            .map(|hub| hub.get_point().clone())
            .ok_or_else(|| PointParseError::UnknownHub(input.trim().to_string()));
    }

    let mut parts = input.splitn(3, ',').map(str::trim);
    let latitude = parse_number(parts.next(), input)?;
    let longitude = parse_number(parts.next(), input)?;
    let label = match parts.next() {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => format!("{:.4},{:.4}", latitude, longitude),
    };

    Ok(GeoPoint::try_new(latitude, longitude, label)?)
}

fn parse_number(field: Option<&str>, input: &str) -> Result<f64, PointParseError> {
    match field {
        None | Some("") => Err(PointParseError::MissingField(input.to_string())),
        Some(value) => value
            .parse::<f64>()
            .map_err(|_| PointParseError::InvalidNumber(value.to_string())),
    }
}
