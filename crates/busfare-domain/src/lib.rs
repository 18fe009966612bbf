//! Domain layer for busfare: reference-data models and pure fare services

pub mod model;
pub mod repository;
pub mod service;
