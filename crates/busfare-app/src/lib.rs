//! Application service layer - quoting use cases, config, reference data, export

pub mod app;
pub mod config;
pub mod constants;
pub mod export;
pub mod repository;
