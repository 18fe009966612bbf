//! Repository trait definitions for reference data

use crate::model::{DepotDirectory, RateCard, StageTable};
use busfare_types::Error;

/// Source of the hire rate card
pub trait RateCardRepository {
    /// Load the full ordered rate card
    fn load(&self) -> Result<RateCard, Error>;
}

/// Source of the depot list
pub trait DepotRepository {
    /// Load all depots, indexed by name
    fn load(&self) -> Result<DepotDirectory, Error>;
}

/// Source of the regulatory stage table
pub trait StageTableRepository {
    fn load(&self) -> Result<StageTable, Error>;
}
