//! Offline distance provider

use busfare_domain::model::Coordinates;
use busfare_domain::service::{haversine_km, DistanceProvider};
use busfare_types::{Error, Result};

/// Typical straight line to road distance ratio
pub const DEFAULT_ROAD_COEFFICIENT: f64 = 1.3;

/// Approximates road distance as great-circle distance times a coefficient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightLineDistanceProvider {
    road_coefficient: f64,
}

impl Default for StraightLineDistanceProvider {
    fn default() -> Self {
        Self {
            road_coefficient: DEFAULT_ROAD_COEFFICIENT,
        }
    }
}

impl StraightLineDistanceProvider {
    pub fn new(road_coefficient: f64) -> Self {
        Self { road_coefficient }
    }
}

impl DistanceProvider for StraightLineDistanceProvider {
    fn one_way_km(&self, origin: &Coordinates, destination: &Coordinates) -> Result<f64> {
        let valid = |c: &Coordinates| {
            c.lat.is_finite() && c.lon.is_finite() && c.lat.abs() <= 90.0 && c.lon.abs() <= 180.0
        };
        if !valid(origin) || !valid(destination) {
            return Err(Error::RouteNotFound(format!(
                "coordinates out of range: ({}, {}) -> ({}, {})",
                origin.lat, origin.lon, destination.lat, destination.lon
            )));
        }
        Ok(haversine_km(origin, destination) * self.road_coefficient)
    }
}
