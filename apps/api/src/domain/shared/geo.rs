//! Pure geographic helpers shared by submissions, statistics and the map.
//!
//! All angles are decimal degrees (WGS84). Nothing here performs I/O; address
//! and IP resolution live in `infrastructure::geocoding`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Mean Earth radius used by [`haversine_distance`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Rendered by [`format_coordinates`] when either component is missing.
pub const NO_COORDINATES: &str = "No coordinates";

/// A complete, range-checked latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Returns `Some` only when both components are present and in range.
    ///
    /// A record carrying just one half of the pair has no usable location.
    pub fn from_pair(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) if validate_coordinates(latitude, longitude) => Some(Self {
                latitude: lat,
                longitude: lon,
            }),
            _ => None,
        }
    }

    /// Straight-line distance in degree units, treating lat/lon as a plane.
    pub fn planar_distance(&self, latitude: f64, longitude: f64) -> f64 {
        ((self.latitude - latitude).powi(2) + (self.longitude - longitude).powi(2)).sqrt()
    }
}

/// True iff both values are present and within [-90, 90] / [-180, 180].
///
/// NaN never validates.
pub fn validate_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> bool {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => {
            (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
        }
        _ => false,
    }
}

/// Formats a pair as `"12.345670°N, 77.654321°E"`.
pub fn format_coordinates(latitude: Option<f64>, longitude: Option<f64>, precision: usize) -> String {
    let (Some(lat), Some(lon)) = (latitude, longitude) else {
        return NO_COORDINATES.to_string();
    };

    let lat_dir = if lat >= 0.0 { 'N' } else { 'S' };
    let lon_dir = if lon >= 0.0 { 'E' } else { 'W' };

    format!(
        "{:.prec$}°{}, {:.prec$}°{}",
        lat.abs(),
        lat_dir,
        lon.abs(),
        lon_dir,
        prec = precision
    )
}

/// Great-circle distance between two points in kilometres.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // clamp guards asin against rounding just above 1.0 for antipodal points
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}
