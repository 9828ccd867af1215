use serde::{Deserialize, Serialize};

/// A geographic point in WGS84 degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, valid range [-90, 90]
    pub lat: f64,
    /// Longitude in degrees, valid range [-180, 180]
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check that both coordinates are finite and within range
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Coincidence check with a small tolerance for closing-point comparison
    pub fn coincides_with(&self, other: &GeoPoint) -> bool {
        (self.lat - other.lat).abs() < 1e-9 && (self.lon - other.lon).abs() < 1e-9
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}
