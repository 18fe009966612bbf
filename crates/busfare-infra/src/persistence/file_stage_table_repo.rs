//! File-based implementation of StageTableRepository

use std::path::PathBuf;

use busfare_domain::model::StageTable;
use busfare_domain::repository::StageTableRepository;
use busfare_types::Error;

use crate::stage_table_loader::load_stage_table_from_file;

/// Stage table read from TOML. Files without `km_per_stage` use `default_km_per_stage`.
pub struct FileStageTableRepository {
    toml_path: PathBuf,
    default_km_per_stage: f64,
}

impl FileStageTableRepository {
    pub fn new(toml_path: PathBuf, default_km_per_stage: f64) -> Self {
        Self {
            toml_path,
            default_km_per_stage,
        }
    }
}

impl StageTableRepository for FileStageTableRepository {
    fn load(&self) -> Result<StageTable, Error> {
        load_stage_table_from_file(&self.toml_path, self.default_km_per_stage)
    }
}
