//! Point-to-point hire fare estimation
//!
//! # Formula
//! ```text
//! single_km = one_way_km + padding       return_km = one_way_km + padding
//! total_km  = max(single_km + return_km, min_km_per_day × days)
//! total     = total_km × rate_per_km + days × driver_allowance + days × permit_charges
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{FareEstimate, RateCardEntry, TripDates};
use busfare_types::{Error, Result};

/// Local transfer distance added to each leg (depot to pickup, drop to depot)
pub const DEFAULT_TRANSFER_PADDING_KM: f64 = 20.0;

/// Tunables for the hire estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HireFarePolicy {
    pub transfer_padding_km: f64,
}

impl Default for HireFarePolicy {
    fn default() -> Self {
        Self {
            transfer_padding_km: DEFAULT_TRANSFER_PADDING_KM,
        }
    }
}

/// Quote a round-trip hire from a one-way road distance.
///
/// The caller is responsible for the date range; [`TripDates`] already
/// guarantees return >= journey.
pub fn estimate_hire_fare(
    one_way_distance_km: f64,
    rate: &RateCardEntry,
    dates: &TripDates,
    policy: &HireFarePolicy,
) -> Result<FareEstimate> {
    if !one_way_distance_km.is_finite() || one_way_distance_km < 0.0 {
        return Err(Error::InvalidDistance(one_way_distance_km));
    }

    let num_days = dates.num_days();
    let days = num_days as f64;

    let single_journey_km = one_way_distance_km + policy.transfer_padding_km;
    let return_journey_km = one_way_distance_km + policy.transfer_padding_km;
    let calculated_total_km = single_journey_km + return_journey_km;

    let min_km_for_trip = rate.min_km_per_day * days;
    let total_km = calculated_total_km.max(min_km_for_trip);

    let base_fare = total_km * rate.rate_per_km;
    let driver_allowance = days * rate.driver_allowance;
    let permit_charges = days * rate.permit_charges;
    let total_cost = base_fare + driver_allowance + permit_charges;

    debug!(
        vehicle = %rate.vehicle_type,
        num_days,
        calculated_total_km,
        min_km_for_trip,
        total_km,
        total_cost,
        "hire fare estimated"
    );

    Ok(FareEstimate {
        total_cost,
        base_fare,
        driver_allowance,
        permit_charges,
        num_days,
        total_km,
        single_journey_km,
        return_journey_km,
        min_km_for_trip,
    })
}
