//! Persistence implementations
//!
//! File-based implementations of the reference-data repository traits.

mod file_depot_repo;
mod file_rate_card_repo;
mod file_stage_table_repo;

pub use file_depot_repo::FileDepotRepository;
pub use file_rate_card_repo::FileRateCardRepository;
pub use file_stage_table_repo::FileStageTableRepository;
