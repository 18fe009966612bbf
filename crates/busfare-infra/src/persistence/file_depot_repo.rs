//! File-based implementation of DepotRepository

use std::path::{Path, PathBuf};

use busfare_domain::model::DepotDirectory;
use busfare_domain::repository::DepotRepository;
use busfare_types::Error;

use crate::depot_loader::load_depots;

/// Depot list read from a CSV or JSON file
pub struct FileDepotRepository {
    path: PathBuf,
}

impl FileDepotRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DepotRepository for FileDepotRepository {
    fn load(&self) -> Result<DepotDirectory, Error> {
        load_depots(&self.path)
    }
}
