//! One-way road distance sources for the hire estimator

use crate::model::Coordinates;
use busfare_types::{Error, Result};

/// Supplies the one-way driving distance between two points.
///
/// Implementations report a missing route as [`Error::RouteNotFound`].
pub trait DistanceProvider {
    fn one_way_km(&self, origin: &Coordinates, destination: &Coordinates) -> Result<f64>;
}

/// A distance already known to the operator, e.g. read off a highway chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDistance(pub f64);

impl DistanceProvider for FixedDistance {
    fn one_way_km(&self, _origin: &Coordinates, _destination: &Coordinates) -> Result<f64> {
        if self.0.is_finite() && self.0 >= 0.0 {
            Ok(self.0)
        } else {
            Err(Error::RouteNotFound(format!("invalid fixed distance {}", self.0)))
        }
    }
}
