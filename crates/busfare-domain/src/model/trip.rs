//! Trip request types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::depot::Coordinates;
use busfare_types::{Error, Result};

/// Journey and return dates of a hire, validated so that return >= journey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TripDates {
    journey_date: NaiveDate,
    return_date: NaiveDate,
}

impl TripDates {
    pub fn new(journey_date: NaiveDate, return_date: NaiveDate) -> Result<Self> {
        if return_date < journey_date {
            return Err(Error::InvalidDateRange {
                journey_date,
                return_date,
            });
        }
        Ok(Self {
            journey_date,
            return_date,
        })
    }

    pub fn journey_date(&self) -> NaiveDate {
        self.journey_date
    }

    pub fn return_date(&self) -> NaiveDate {
        self.return_date
    }

    /// Billable days, counting both ends: same-day return is one day
    pub fn num_days(&self) -> u32 {
        (self.return_date - self.journey_date).num_days() as u32 + 1
    }
}

/// Where a trip starts or ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TripEndpoint {
    Coordinates(Coordinates),
    Depot { name: String },
}

/// Passenger head-count split between full-fare and concession
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartySize {
    total: u32,
    concession: u32,
}

impl PartySize {
    pub fn new(total: u32, concession: u32) -> Result<Self> {
        if concession > total {
            return Err(Error::InvalidPassengerCount { total, concession });
        }
        Ok(Self { total, concession })
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn concession(&self) -> u32 {
        self.concession
    }

    pub fn full_fare(&self) -> u32 {
        self.total - self.concession
    }
}

/// Everything a booking form submits for a quote
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRequest {
    pub origin: TripEndpoint,
    pub destination: TripEndpoint,
    pub dates: TripDates,
    pub party: PartySize,
    pub is_night_service: bool,
}

impl TripRequest {
    pub fn num_days(&self) -> u32 {
        self.dates.num_days()
    }
}
