//! CSV loader for batch quoting
//!
//! Two layouts are recognised from the header row:
//!
//! - hire: `reference,vehicle,one_way_km,journey_date,return_date`
//! - stage: `reference,from,to,passengers,concession[,departure]`

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use busfare_types::{Error, Result};

/// One point-to-point hire request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HireTripRow {
    pub reference: String,
    /// Rate-card index or vehicle type
    pub vehicle: String,
    pub one_way_km: f64,
    pub journey_date: String,
    pub return_date: String,
}

/// One depot-to-depot group request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageTripRow {
    pub reference: String,
    pub from: String,
    pub to: String,
    pub passengers: u32,
    #[serde(default)]
    pub concession: Option<u32>,
    /// Scheduled departure `HH:MM`; the night levy is checked against it when present
    #[serde(default)]
    pub departure: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TripBatch {
    Hire(Vec<HireTripRow>),
    Stage(Vec<StageTripRow>),
}

impl TripBatch {
    pub fn len(&self) -> usize {
        match self {
            TripBatch::Hire(rows) => rows.len(),
            TripBatch::Stage(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Load a batch file, picking the layout from its header
pub fn load_trip_batch<P: AsRef<Path>>(path: P) -> Result<TripBatch> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let batch = read_trip_batch(File::open(path)?)?;
    debug!(path = %path.display(), rows = batch.len(), "trip batch loaded");
    Ok(batch)
}

pub fn read_trip_batch<R: std::io::Read>(reader: R) -> Result<TripBatch> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let has = |name: &str| headers.iter().any(|h| h.eq_ignore_ascii_case(name));

    if has("vehicle") {
        let rows = reader
            .deserialize()
            .collect::<std::result::Result<Vec<HireTripRow>, _>>()?;
        Ok(TripBatch::Hire(rows))
    } else if has("from") && has("to") {
        let rows = reader
            .deserialize()
            .collect::<std::result::Result<Vec<StageTripRow>, _>>()?;
        Ok(TripBatch::Stage(rows))
    } else {
        Err(Error::UnsupportedFormat(format!(
            "trip CSV header not recognised: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hire_layout() {
        let csv = "\
reference,vehicle,one_way_km,journey_date,return_date
Q-1,0,100,2025-01-01,2025-01-02
Q-2,Shivshahi,250.5,2025-02-10,2025-02-10
";
        let batch = read_trip_batch(csv.as_bytes()).unwrap();
        match batch {
            TripBatch::Hire(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[1].vehicle, "Shivshahi");
                assert!((rows[1].one_way_km - 250.5).abs() < 1e-9);
            }
            other => panic!("expected hire batch, got {:?}", other),
        }
    }

    #[test]
    fn test_stage_layout_optional_columns() {
        let csv = "\
reference,from,to,passengers,concession,departure
G-1,Pune (Swargate),Kolhapur,40,10,23:15
G-2,Pune (Swargate),Satara,12,,
";
        let batch = read_trip_batch(csv.as_bytes()).unwrap();
        match batch {
            TripBatch::Stage(rows) => {
                assert_eq!(rows[0].departure.as_deref(), Some("23:15"));
                assert_eq!(rows[1].concession, None);
                assert_eq!(rows[0].concession, Some(10));
                assert!(rows[1].departure.is_none());
            }
            other => panic!("expected stage batch, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_header() {
        let csv = "a,b,c\n1,2,3\n";
        assert!(matches!(
            read_trip_batch(csv.as_bytes()),
            Err(Error::UnsupportedFormat(_))
        ));
    }
}
