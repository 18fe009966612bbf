//! Rate card loader from TOML
//!
//! ```toml
//! [[rates]]
//! vehicle_type = "Shivshahi"
//! seating_capacity = 45
//! bus_type = "AC Seater"
//! rate_per_km = 68.0
//! min_km_per_day = 300.0
//! driver_allowance = 600.0
//! permit_charges = 350.0
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use busfare_domain::model::{RateCard, RateCardEntry};
use busfare_types::{ConfigError, Error, Result};

/// Container for parsing rates.toml
#[derive(Debug, Deserialize)]
struct RateCardFile {
    rates: Vec<RateCardEntry>,
}

/// Load a rate card from a TOML file
pub fn load_rate_card_from_file(path: &Path) -> Result<RateCard> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read rate card file: {}",
            e
        )))
    })?;
    let card = load_rate_card_from_str(&content)?;
    debug!(path = %path.display(), entries = card.len(), "rate card loaded");
    Ok(card)
}

/// Load a rate card from a TOML string, keeping file order
pub fn load_rate_card_from_str(toml_content: &str) -> Result<RateCard> {
    let file: RateCardFile = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse rate card TOML: {}",
            e
        )))
    })?;

    for entry in &file.rates {
        validate_entry(entry)?;
    }
    if file.rates.is_empty() {
        warn!("rate card has no entries");
    }

    Ok(RateCard::new(file.rates))
}

fn validate_entry(entry: &RateCardEntry) -> Result<()> {
    let amounts = [
        ("rate_per_km", entry.rate_per_km),
        ("min_km_per_day", entry.min_km_per_day),
        ("driver_allowance", entry.driver_allowance),
        ("permit_charges", entry.permit_charges),
    ];
    for (field, value) in amounts {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::Config(ConfigError::InvalidValue {
                field,
                reason: format!("{} has {} = {}", entry.vehicle_type, field, value),
            }));
        }
    }
    Ok(())
}
