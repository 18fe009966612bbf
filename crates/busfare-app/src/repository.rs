//! Repository adapters for reference data

use std::path::PathBuf;

use tracing::info;

use busfare_domain::model::{DepotDirectory, RateCard, StageTable};
use busfare_domain::repository::{DepotRepository, RateCardRepository, StageTableRepository};
use busfare_infra::persistence::{
    FileDepotRepository, FileRateCardRepository, FileStageTableRepository,
};
use busfare_types::Result;

use crate::config::Config;
use crate::constants::{default_depots, default_rate_card};

/// Everything the fare services read, loaded once per session
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub rate_card: RateCard,
    pub depots: DepotDirectory,
    pub stage_table: StageTable,
}

/// Open rate card repository from TOML
pub fn open_rate_card_repo(toml_path: PathBuf) -> FileRateCardRepository {
    FileRateCardRepository::new(toml_path)
}

/// Open depot repository from CSV or JSON
pub fn open_depot_repo(path: PathBuf) -> FileDepotRepository {
    FileDepotRepository::new(path)
}

/// Open stage table repository from TOML
pub fn open_stage_table_repo(
    toml_path: PathBuf,
    default_km_per_stage: f64,
) -> FileStageTableRepository {
    FileStageTableRepository::new(toml_path, default_km_per_stage)
}

/// Load the rate card configured in `config`, falling back to the built-in card
pub fn load_rate_card(config: &Config) -> Result<RateCard> {
    match &config.rate_card_path {
        Some(path) => {
            info!(path = %path.display(), "loading rate card");
            open_rate_card_repo(path.clone()).load()
        }
        None => Ok(default_rate_card().clone()),
    }
}

/// Load the configured depot list, falling back to the built-in list
pub fn load_depots(config: &Config) -> Result<DepotDirectory> {
    match &config.depot_path {
        Some(path) => {
            info!(path = %path.display(), "loading depots");
            open_depot_repo(path.clone()).load()
        }
        None => Ok(default_depots().clone()),
    }
}

/// Load the configured stage table, falling back to uniform `km_per_stage` bands.
///
/// `config.km_per_stage` also applies to a table file that leaves it out.
pub fn load_stage_table(config: &Config) -> Result<StageTable> {
    match &config.stage_table_path {
        Some(path) => {
            info!(path = %path.display(), "loading stage table");
            open_stage_table_repo(path.clone(), config.km_per_stage).load()
        }
        None => {
            let table = StageTable::uniform(config.km_per_stage);
            table.validate()?;
            Ok(table)
        }
    }
}

pub fn load_reference_data(config: &Config) -> Result<ReferenceData> {
    Ok(ReferenceData {
        rate_card: load_rate_card(config)?,
        depots: load_depots(config)?,
        stage_table: load_stage_table(config)?,
    })
}
