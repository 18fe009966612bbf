//! Depot-to-depot stage fare calculation
//!
//! Straight-line distance stands in for the road-network staging that an
//! authoritative route table would provide.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::geo::haversine_km;
use super::night_levy::{ceil_fare, NightLevy};
use crate::model::{Depot, PartySize, StageFare, StageTable};
use busfare_types::Result;

/// Flat per-stage rate for the ordinary bus class
pub const DEFAULT_BASE_RATE_PER_STAGE: f64 = 10.0;
/// Share of the full fare a concession passenger pays
pub const DEFAULT_CONCESSION_FACTOR: f64 = 0.5;

/// Pricing knobs for stage fares
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageFarePolicy {
    pub base_rate_per_stage: f64,
    pub concession_factor: f64,
    pub night_levy: NightLevy,
}

impl Default for StageFarePolicy {
    fn default() -> Self {
        Self {
            base_rate_per_stage: DEFAULT_BASE_RATE_PER_STAGE,
            concession_factor: DEFAULT_CONCESSION_FACTOR,
            night_levy: NightLevy::default(),
        }
    }
}

/// One stage-fare calculation
#[derive(Debug, Clone, Copy)]
pub struct StageFareRequest<'a> {
    pub origin: &'a Depot,
    pub destination: &'a Depot,
    pub party: PartySize,
    /// Time the night window is checked against
    pub evaluated_at: NaiveTime,
    /// Levy applies regardless of `evaluated_at`
    pub night_service: bool,
}

/// Price a group between two depots
pub fn calculate_stage_fare(
    request: &StageFareRequest<'_>,
    table: &StageTable,
    policy: &StageFarePolicy,
) -> Result<StageFare> {
    let exact_distance_km = haversine_km(
        &request.origin.coordinates(),
        &request.destination.coordinates(),
    );
    let stages = table.stages_for(exact_distance_km);

    let per_passenger = stages as f64 * policy.base_rate_per_stage;
    let fare_for_full = request.party.full_fare() as f64 * per_passenger;
    let fare_for_concession =
        request.party.concession() as f64 * per_passenger * policy.concession_factor;
    let mut fare = ceil_fare(fare_for_full + fare_for_concession);

    let night_levy_applied =
        request.night_service || policy.night_levy.contains(request.evaluated_at);
    if night_levy_applied {
        fare = policy.night_levy.apply(fare);
    }

    debug!(
        origin = %request.origin.name,
        destination = %request.destination.name,
        exact_distance_km,
        stages,
        fare,
        night_levy_applied,
        "stage fare calculated"
    );

    Ok(StageFare {
        distance_km: exact_distance_km.round() as u64,
        stages,
        fare,
        exact_distance_km,
        fare_for_full,
        fare_for_concession,
        night_levy_applied,
    })
}
