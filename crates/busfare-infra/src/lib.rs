//! Infrastructure layer - loaders for reference data files and their repositories

pub mod depot_loader;
pub mod distance;
pub mod persistence;
pub mod rate_card_loader;
pub mod stage_table_loader;
pub mod trip_csv;
