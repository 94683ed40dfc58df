use serde::{Deserialize, Serialize};

use crate::config::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::error::{CoordinateField, ValidationError};

/// A labelled point in decimal degrees.
///
/// Fields are read-only once constructed. `new` accepts any value so that
/// malformed input propagates as NaN through the estimator; `try_new`
/// rejects it up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
    label: String,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64, label: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            label: label.into(),
        }
    }

    pub fn try_new(latitude: f64, longitude: f64, label: impl Into<String>) -> Result<Self, ValidationError> {
        let point = Self::new(latitude, longitude, label);
        point.validate()?;
        Ok(point)
    }

    /// Fails on the first invalid field, latitude before longitude.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.latitude.is_finite() {
            return Err(ValidationError::NotFinite { field: CoordinateField::Latitude });
        }
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude) {
            return Err(ValidationError::LatitudeOutOfRange { value: self.latitude });
        }
        if !self.longitude.is_finite() {
            return Err(ValidationError::NotFinite { field: CoordinateField::Longitude });
        }
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude) {
            return Err(ValidationError::LongitudeOutOfRange { value: self.longitude });
        }
        Ok(())
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

pub trait POI {
    fn get_point(&self) -> &GeoPoint;
    fn get_id(&self) -> &str;
}

/// Validate every point of a sequence, stopping at the first failure.
pub fn validate_all<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Result<(), ValidationError> {
    points.into_iter().try_for_each(GeoPoint::validate)
}
