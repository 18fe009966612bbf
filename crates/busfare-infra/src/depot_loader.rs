//! Depot list loader
//!
//! Accepts either a CSV file with header `id,name,lat,lon` (column order is
//! free) or a JSON array of `{ "name", "lat", "lon", "id" }` objects. The
//! file extension decides which.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use busfare_domain::model::{Depot, DepotDirectory};
use busfare_types::{Error, Result};

/// Load depots from a `.csv` or `.json` file
pub fn load_depots<P: AsRef<Path>>(path: P) -> Result<DepotDirectory> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let depots = match extension.as_str() {
        "csv" => read_depots_csv(File::open(path)?)?,
        "json" => serde_json::from_reader(File::open(path)?)?,
        other => return Err(Error::UnsupportedFormat(format!("depot file .{}", other))),
    };

    let directory = DepotDirectory::new(depots);
    debug!(path = %path.display(), depots = directory.len(), "depot list loaded");
    Ok(directory)
}

/// Parse depots from CSV text
pub fn read_depots_csv<R: std::io::Read>(reader: R) -> Result<Vec<Depot>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut depots = Vec::new();
    for record in reader.deserialize() {
        let depot: Depot = record?;
        depots.push(depot);
    }
    Ok(depots)
}
