//! Calculation outputs

use serde::{Deserialize, Serialize};

/// Point-to-point hire quote with every intermediate figure kept for audit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareEstimate {
    pub total_cost: f64,
    pub base_fare: f64,
    pub driver_allowance: f64,
    pub permit_charges: f64,
    pub num_days: u32,
    pub total_km: f64,
    pub single_journey_km: f64,
    pub return_journey_km: f64,
    /// Rate-card daily minimum times days; `total_km` never falls below it
    pub min_km_for_trip: f64,
}

/// Stage-based group fare between two depots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageFare {
    /// Great-circle distance rounded to the nearest km
    pub distance_km: u64,
    pub stages: u32,
    /// Payable fare after concession and any night levy, rounded up
    pub fare: u64,
    pub exact_distance_km: f64,
    pub fare_for_full: f64,
    pub fare_for_concession: f64,
    pub night_levy_applied: bool,
}
