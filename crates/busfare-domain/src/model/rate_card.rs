//! Rate card type definitions

use serde::{Deserialize, Serialize};

use busfare_types::{Error, Result};

/// One row of the hire rate card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateCardEntry {
    /// Vehicle class shown to the customer (e.g., "Shivshahi")
    pub vehicle_type: String,
    /// Seats available
    pub seating_capacity: u32,
    /// Body/comfort class (e.g., "AC Seater", "Non-AC")
    pub bus_type: String,
    /// Charge per kilometre
    pub rate_per_km: f64,
    /// Billable kilometres per day regardless of actual distance
    pub min_km_per_day: f64,
    /// Driver allowance per day
    pub driver_allowance: f64,
    /// Inter-state/tourist permit charges per day
    pub permit_charges: f64,
}

/// Ordered rate card, addressed by position the same way a dropdown is
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateCard {
    entries: Vec<RateCardEntry>,
}

impl RateCard {
    pub fn new(entries: Vec<RateCardEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RateCardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its zero-based position
    pub fn get(&self, index: usize) -> Result<&RateCardEntry> {
        self.entries
            .get(index)
            .ok_or_else(|| Error::RateNotFound(format!("#{}", index)))
    }

    /// Look up an entry by vehicle type, ignoring case and surrounding whitespace
    pub fn find_by_vehicle_type(&self, vehicle_type: &str) -> Result<&RateCardEntry> {
        let wanted = vehicle_type.trim().to_lowercase();
        self.entries
            .iter()
            .find(|e| e.vehicle_type.trim().to_lowercase() == wanted)
            .ok_or_else(|| Error::RateNotFound(vehicle_type.to_string()))
    }

    /// Resolve a user selection: a bare integer is an index, anything else a vehicle type
    pub fn select(&self, selector: &str) -> Result<&RateCardEntry> {
        match selector.trim().parse::<usize>() {
            Ok(index) => self.get(index),
            Err(_) => self.find_by_vehicle_type(selector),
        }
    }
}
