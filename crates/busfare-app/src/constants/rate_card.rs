//! Default hire rate card for state-transport buses

use std::sync::LazyLock;

use busfare_domain::model::{RateCard, RateCardEntry};

fn entry(
    vehicle_type: &str,
    seating_capacity: u32,
    bus_type: &str,
    rate_per_km: f64,
    min_km_per_day: f64,
    driver_allowance: f64,
    permit_charges: f64,
) -> RateCardEntry {
    RateCardEntry {
        vehicle_type: vehicle_type.to_string(),
        seating_capacity,
        bus_type: bus_type.to_string(),
        rate_per_km,
        min_km_per_day,
        driver_allowance,
        permit_charges,
    }
}

/// Standard rate card, in dropdown order
pub static DEFAULT_RATE_CARD: LazyLock<RateCard> = LazyLock::new(|| {
    RateCard::new(vec![
        entry("Ordinary", 44, "Non-AC Seater", 50.0, 250.0, 500.0, 200.0),
        entry("Semi-Luxury", 41, "Non-AC Pushback", 56.0, 250.0, 500.0, 250.0),
        entry("Shivshahi", 45, "AC Seater", 68.0, 300.0, 600.0, 350.0),
        entry("Shivshahi Sleeper", 30, "AC Sleeper", 78.0, 300.0, 700.0, 400.0),
        entry("Shivneri", 43, "AC Volvo Seater", 90.0, 300.0, 750.0, 450.0),
        entry("Mini Bus", 26, "Non-AC Seater", 38.0, 200.0, 450.0, 150.0),
    ])
});

pub fn default_rate_card() -> &'static RateCard {
    &DEFAULT_RATE_CARD
}
