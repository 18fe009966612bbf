//! Stage table loader from TOML
//!
//! ```toml
//! km_per_stage = 6.0   # optional, falls back to the caller's default
//!
//! [[bands]]
//! up_to_km = 6.0
//! stages = 1
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use busfare_domain::model::{StageBand, StageTable};
use busfare_types::{Error, Result};

/// Container for parsing stages.toml
#[derive(Debug, Deserialize)]
struct StageTableFile {
    #[serde(default)]
    bands: Vec<StageBand>,
    km_per_stage: Option<f64>,
}

/// Load a stage table; `default_km_per_stage` applies when the file has none
pub fn load_stage_table_from_file(path: &Path, default_km_per_stage: f64) -> Result<StageTable> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let table = load_stage_table_from_str(&fs::read_to_string(path)?, default_km_per_stage)?;
    debug!(
        path = %path.display(),
        bands = table.bands().len(),
        km_per_stage = table.km_per_stage(),
        "stage table loaded"
    );
    Ok(table)
}

pub fn load_stage_table_from_str(
    toml_content: &str,
    default_km_per_stage: f64,
) -> Result<StageTable> {
    let file: StageTableFile = toml::from_str(toml_content)?;
    StageTable::new(
        file.bands,
        file.km_per_stage.unwrap_or(default_km_per_stage),
    )
}
