use crate::constants::{FALLBACK_LAT, FALLBACK_LNG, FLIGHT_DURATION_MS, LANDED_CAPACITY, MARKER_LIMIT};
use crate::geo::GeoPoint;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("flight duration must be positive and finite, got {0} ms")]
    FlightDuration(f64),
    #[error("landed capacity must be at least 1")]
    ZeroCapacity,
    #[error("fallback location ({lat}, {lng}) is not a valid coordinate")]
    FallbackLocation { lat: f64, lng: f64 },
}

/// Tunables for a [`crate::NotesStore`].
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub flight_duration_ms: f64,
    pub landed_capacity: usize,
    pub marker_limit: usize,
    pub fallback_location: GeoPoint,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            flight_duration_ms: FLIGHT_DURATION_MS,
            landed_capacity: LANDED_CAPACITY,
            marker_limit: MARKER_LIMIT,
            fallback_location: GeoPoint::new(FALLBACK_LAT, FALLBACK_LNG),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.flight_duration_ms.is_finite() && self.flight_duration_ms > 0.0) {
            return Err(ConfigError::FlightDuration(self.flight_duration_ms));
        }
        if self.landed_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !self.fallback_location.is_valid() {
            return Err(ConfigError::FallbackLocation {
                lat: self.fallback_location.lat,
                lng: self.fallback_location.lng,
            });
        }
        Ok(())
    }
}
