//! Configuration management for busfare
//!
//! Config stored at: ~/.config/busfare/config.json

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use busfare_domain::model::stage_table::DEFAULT_KM_PER_STAGE;
use busfare_domain::service::night_levy::{
    NightLevy, DEFAULT_NIGHT_END_HOUR, DEFAULT_NIGHT_START_HOUR, DEFAULT_NIGHT_SURCHARGE_FACTOR,
};
use busfare_domain::service::rate_estimator::DEFAULT_TRANSFER_PADDING_KM;
use busfare_domain::service::stage_calculator::{
    DEFAULT_BASE_RATE_PER_STAGE, DEFAULT_CONCESSION_FACTOR,
};
use busfare_domain::service::{HireFarePolicy, StageFarePolicy};
use busfare_infra::distance::DEFAULT_ROAD_COEFFICIENT;
use busfare_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Currency units charged per stage
    #[serde(default = "default_base_rate_per_stage")]
    pub base_rate_per_stage: f64,

    /// Fraction of the full fare paid by a concession passenger
    #[serde(default = "default_concession_factor")]
    pub concession_factor: f64,

    /// Multiplier applied inside the night window
    #[serde(default = "default_night_surcharge_factor")]
    pub night_surcharge_factor: f64,

    /// First hour of the night window (inclusive)
    #[serde(default = "default_night_start_hour")]
    pub night_start_hour: u32,

    /// Hour the night window ends (exclusive)
    #[serde(default = "default_night_end_hour")]
    pub night_end_hour: u32,

    /// Stage length for distances without a stage table file, and past the last
    /// band of a table file that does not set its own `km_per_stage`
    #[serde(default = "default_km_per_stage")]
    pub km_per_stage: f64,

    /// Local transfer km added to each leg of a hire
    #[serde(default = "default_transfer_padding_km")]
    pub transfer_padding_km: f64,

    /// Straight line to road distance ratio
    #[serde(default = "default_road_coefficient")]
    pub road_coefficient: f64,

    /// Rate card TOML override
    #[serde(default)]
    pub rate_card_path: Option<PathBuf>,

    /// Depot CSV/JSON override
    #[serde(default)]
    pub depot_path: Option<PathBuf>,

    /// Stage table TOML override
    #[serde(default)]
    pub stage_table_path: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_base_rate_per_stage() -> f64 {
    DEFAULT_BASE_RATE_PER_STAGE
}

fn default_concession_factor() -> f64 {
    DEFAULT_CONCESSION_FACTOR
}

fn default_night_surcharge_factor() -> f64 {
    DEFAULT_NIGHT_SURCHARGE_FACTOR
}

fn default_night_start_hour() -> u32 {
    DEFAULT_NIGHT_START_HOUR
}

fn default_night_end_hour() -> u32 {
    DEFAULT_NIGHT_END_HOUR
}

fn default_km_per_stage() -> f64 {
    DEFAULT_KM_PER_STAGE
}

fn default_transfer_padding_km() -> f64 {
    DEFAULT_TRANSFER_PADDING_KM
}

fn default_road_coefficient() -> f64 {
    DEFAULT_ROAD_COEFFICIENT
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_rate_per_stage: default_base_rate_per_stage(),
            concession_factor: default_concession_factor(),
            night_surcharge_factor: default_night_surcharge_factor(),
            night_start_hour: default_night_start_hour(),
            night_end_hour: default_night_end_hour(),
            km_per_stage: default_km_per_stage(),
            transfer_padding_km: default_transfer_padding_km(),
            road_coefficient: default_road_coefficient(),
            rate_card_path: None,
            depot_path: None,
            stage_table_path: None,
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("busfare");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            config.validate()?;
            debug!(path = %path.display(), "config loaded");
            Ok(config)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values no fare could be computed from
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("base_rate_per_stage", self.base_rate_per_stage),
            ("night_surcharge_factor", self.night_surcharge_factor),
            ("km_per_stage", self.km_per_stage),
            ("road_coefficient", self.road_coefficient),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be positive, got {}", value),
                }
                .into());
            }
        }
        if !(0.0..=1.0).contains(&self.concession_factor) {
            return Err(ConfigError::InvalidValue {
                field: "concession_factor",
                reason: format!("must be within 0..=1, got {}", self.concession_factor),
            }
            .into());
        }
        if !self.transfer_padding_km.is_finite() || self.transfer_padding_km < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "transfer_padding_km",
                reason: format!("must not be negative, got {}", self.transfer_padding_km),
            }
            .into());
        }
        for (field, hour) in [
            ("night_start_hour", self.night_start_hour),
            ("night_end_hour", self.night_end_hour),
        ] {
            if hour > 23 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("hour must be 0-23, got {}", hour),
                }
                .into());
            }
        }
        Ok(())
    }

    pub fn hire_policy(&self) -> HireFarePolicy {
        HireFarePolicy {
            transfer_padding_km: self.transfer_padding_km,
        }
    }

    pub fn stage_policy(&self) -> StageFarePolicy {
        StageFarePolicy {
            base_rate_per_stage: self.base_rate_per_stage,
            concession_factor: self.concession_factor,
            night_levy: NightLevy {
                start_hour: self.night_start_hour,
                end_hour: self.night_end_hour,
                factor: self.night_surcharge_factor,
            },
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(built-in)".to_string())
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Busfare Configuration")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(f, "Base rate / stage:   {}", self.base_rate_per_stage)?;
        writeln!(f, "Concession factor:   {}", self.concession_factor)?;
        writeln!(
            f,
            "Night levy:          x{} from {:02}:00 to {:02}:00",
            self.night_surcharge_factor, self.night_start_hour, self.night_end_hour
        )?;
        writeln!(f, "Km per stage:        {}", self.km_per_stage)?;
        writeln!(f, "Transfer padding:    {} km", self.transfer_padding_km)?;
        writeln!(f, "Road coefficient:    {}", self.road_coefficient)?;
        writeln!(f, "Rate card:           {}", display_path(&self.rate_card_path))?;
        writeln!(f, "Depots:              {}", display_path(&self.depot_path))?;
        writeln!(f, "Stage table:         {}", display_path(&self.stage_table_path))?;
        writeln!(f, "Output format:       {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:         {}", path.display())?;
        }

        Ok(())
    }
}
