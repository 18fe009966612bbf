//! Domain model types

pub mod depot;
pub mod estimate;
pub mod rate_card;
pub mod stage_table;
pub mod trip;

pub use depot::{Coordinates, Depot, DepotDirectory};
pub use estimate::{FareEstimate, StageFare};
pub use rate_card::{RateCard, RateCardEntry};
pub use stage_table::{StageBand, StageTable};
pub use trip::{PartySize, TripDates, TripEndpoint, TripRequest};
