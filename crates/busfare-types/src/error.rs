//! Error types for busfare

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No rate information found for vehicle {0}")]
    RateNotFound(String),

    #[error("Depot not found: {0}")]
    DepotNotFound(String),

    #[error("Return date {return_date} is before journey date {journey_date}")]
    InvalidDateRange {
        journey_date: chrono::NaiveDate,
        return_date: chrono::NaiveDate,
    },

    #[error("Invalid date value: {0}")]
    InvalidDate(String),

    #[error("Invalid time of day: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Invalid distance: {0} km")]
    InvalidDistance(f64),

    #[error("Concession passengers ({concession}) exceed total passengers ({total})")]
    InvalidPassengerCount { total: u32, concession: u32 },

    #[error("Invalid stage table: {0}")]
    InvalidStageTable(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
