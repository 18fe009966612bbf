//! File-based implementation of RateCardRepository

use std::path::{Path, PathBuf};

use busfare_domain::model::RateCard;
use busfare_domain::repository::RateCardRepository;
use busfare_types::Error;

use crate::rate_card_loader::load_rate_card_from_file;

/// Rate card read from a TOML file on every load
pub struct FileRateCardRepository {
    toml_path: PathBuf,
}

impl FileRateCardRepository {
    pub fn new(toml_path: PathBuf) -> Self {
        Self { toml_path }
    }

    pub fn toml_path(&self) -> &Path {
        &self.toml_path
    }
}

impl RateCardRepository for FileRateCardRepository {
    fn load(&self) -> Result<RateCard, Error> {
        load_rate_card_from_file(&self.toml_path)
    }
}
