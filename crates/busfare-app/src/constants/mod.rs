//! Built-in reference data used when no override file is configured

pub mod depots;
pub mod rate_card;

pub use depots::default_depots;
pub use rate_card::default_rate_card;
