//! Point struct for coordinate pairs.

use serde::{Deserialize, Serialize};

/// A geographic coordinate pair
///
/// Latitude and longitude are nominally in degrees, but the codec
/// treats them as opaque reals and performs no range validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl Point {
    /// The delta reference every polyline starts from.
    pub const ORIGIN: Self = Self { lat: 0.0, lon: 0.0 };

    /// Create a point from latitude and longitude
    #[inline]
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}
