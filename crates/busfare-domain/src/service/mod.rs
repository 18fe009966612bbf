//! Domain services

pub mod distance;
pub mod geo;
pub mod night_levy;
pub mod rate_estimator;
pub mod stage_calculator;

pub use distance::{DistanceProvider, FixedDistance};
pub use geo::haversine_km;
pub use night_levy::NightLevy;
pub use rate_estimator::{estimate_hire_fare, HireFarePolicy};
pub use stage_calculator::{calculate_stage_fare, StageFarePolicy, StageFareRequest};
