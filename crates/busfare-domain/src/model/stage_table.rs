//! Regulatory stage table: distance bands mapped to stage counts

use serde::{Deserialize, Serialize};

use busfare_types::{Error, Result};

/// Default stage length used when no table is supplied
pub const DEFAULT_KM_PER_STAGE: f64 = 6.0;

/// Distances up to and including `up_to_km` cost `stages` stages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageBand {
    pub up_to_km: f64,
    pub stages: u32,
}

/// Monotonic step function from kilometres to stages.
///
/// Bands are searched in order. Past the last band (or with no bands at all)
/// every further `km_per_stage` kilometres, or part thereof, adds a stage.
/// Any trip costs at least one stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageTable {
    bands: Vec<StageBand>,
    km_per_stage: f64,
}

impl Default for StageTable {
    fn default() -> Self {
        Self::uniform(DEFAULT_KM_PER_STAGE)
    }
}

impl StageTable {
    /// Build a table, rejecting bands that are unordered or not monotonic
    pub fn new(bands: Vec<StageBand>, km_per_stage: f64) -> Result<Self> {
        let table = Self {
            bands,
            km_per_stage,
        };
        table.validate()?;
        Ok(table)
    }

    /// A table without bands: one stage per `km_per_stage`
    pub fn uniform(km_per_stage: f64) -> Self {
        Self {
            bands: Vec::new(),
            km_per_stage,
        }
    }

    pub fn bands(&self) -> &[StageBand] {
        &self.bands
    }

    pub fn km_per_stage(&self) -> f64 {
        self.km_per_stage
    }

    /// Check ordering and monotonicity
    pub fn validate(&self) -> Result<()> {
        if !(self.km_per_stage.is_finite() && self.km_per_stage > 0.0) {
            return Err(Error::InvalidStageTable(format!(
                "km_per_stage must be positive, got {}",
                self.km_per_stage
            )));
        }
        let mut prev: Option<&StageBand> = None;
        for band in &self.bands {
            if !(band.up_to_km.is_finite() && band.up_to_km > 0.0) {
                return Err(Error::InvalidStageTable(format!(
                    "band limit must be positive, got {}",
                    band.up_to_km
                )));
            }
            if let Some(p) = prev {
                if band.up_to_km <= p.up_to_km {
                    return Err(Error::InvalidStageTable(format!(
                        "band limits must increase: {} after {}",
                        band.up_to_km, p.up_to_km
                    )));
                }
                if band.stages < p.stages {
                    return Err(Error::InvalidStageTable(format!(
                        "stages must not decrease: {} after {}",
                        band.stages, p.stages
                    )));
                }
            }
            prev = Some(band);
        }
        Ok(())
    }

    /// Stage count for a distance
    pub fn stages_for(&self, distance_km: f64) -> u32 {
        let distance_km = distance_km.max(0.0);
        if let Some(band) = self.bands.iter().find(|b| distance_km <= b.up_to_km) {
            return band.stages.max(1);
        }
        let (base_km, base_stages) = match self.bands.last() {
            Some(last) => (last.up_to_km, last.stages),
            None => (0.0, 0),
        };
        // `as u32` saturates, so a tiny stage length caps at u32::MAX
        let extra = ((distance_km - base_km) / self.km_per_stage).ceil() as u32;
        base_stages.saturating_add(extra).max(1)
    }
}
