use std::fmt;

/// Coordinate field a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateField {
    Latitude,
    Longitude,
}

impl fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateField::Latitude => write!(f, "latitude"),
            CoordinateField::Longitude => write!(f, "longitude"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NotFinite { field: CoordinateField },
    LatitudeOutOfRange { value: f64 },
    LongitudeOutOfRange { value: f64 },
}

impl ValidationError {
    pub fn field(&self) -> CoordinateField {
        match self {
            ValidationError::NotFinite { field } => *field,
            ValidationError::LatitudeOutOfRange { .. } => CoordinateField::Latitude,
            ValidationError::LongitudeOutOfRange { .. } => CoordinateField::Longitude,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotFinite { field } => write!(f, "{} is not a finite number", field),
            ValidationError::LatitudeOutOfRange { value } => {
                write!(f, "latitude {} outside [-90, 90]", value)
            }
            ValidationError::LongitudeOutOfRange { value } => {
                write!(f, "longitude {} outside [-180, 180]", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Metric whose reduction could not be computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Distance,
    Carbon,
    Energy,
    Water,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Distance => write!(f, "distance"),
            Metric::Carbon => write!(f, "carbon"),
            Metric::Energy => write!(f, "energy"),
            Metric::Water => write!(f, "water"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonError {
    UndefinedImprovement { metric: Option<Metric>, baseline: f64 },
}

impl fmt::Display for ComparisonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonError::UndefinedImprovement { metric: Some(metric), baseline } => write!(
                f,
                "improvement undefined for {}: baseline value is {}",
                metric, baseline
            ),
            ComparisonError::UndefinedImprovement { metric: None, baseline } => {
                write!(f, "improvement undefined: baseline value is {}", baseline)
            }
        }
    }
}

impl std::error::Error for ComparisonError {}

/// Resource figure reported per company and year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceMetric {
    Emissions,
    Energy,
    Waste,
}

impl ResourceMetric {
    pub const ALL: [ResourceMetric; 3] = [ResourceMetric::Emissions, ResourceMetric::Energy, ResourceMetric::Waste];
}

impl fmt::Display for ResourceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceMetric::Emissions => write!(f, "emissions"),
            ResourceMetric::Energy => write!(f, "energy"),
            ResourceMetric::Waste => write!(f, "waste"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    Empty,
    /// The dataset maximum must be positive and finite to normalize against
    UndefinedMaximum { metric: ResourceMetric, value: f64 },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Empty => write!(f, "dataset has no records"),
            DatasetError::UndefinedMaximum { metric, value } => write!(
                f,
                "cannot normalize {}: dataset maximum is {}",
                metric, value
            ),
        }
    }
}

impl std::error::Error for DatasetError {}

#[derive(Debug)]
pub enum PointParseError {
    MissingField(String),
    InvalidNumber(String),
    UnknownHub(String),
    Invalid(ValidationError),
}

impl From<ValidationError> for PointParseError {
    fn from(err: ValidationError) -> Self {
        PointParseError::Invalid(err)
    }
}

impl fmt::Display for PointParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointParseError::MissingField(s) => write!(f, "Missing coordinate in point: {}", s),
            PointParseError::InvalidNumber(s) => write!(f, "Invalid number in point: {}", s),
            PointParseError::UnknownHub(s) => write!(f, "Unknown hub: {}", s),
            PointParseError::Invalid(e) => write!(f, "Invalid point: {}", e),
        }
    }
}

impl std::error::Error for PointParseError {}

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    InvalidProfile(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::JsonError(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::JsonError(e) => write!(f, "JSON error: {}", e),
            ConfigError::InvalidProfile(s) => write!(f, "Invalid mode profile: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}
