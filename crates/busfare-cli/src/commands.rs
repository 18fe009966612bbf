//! Command handlers

use std::path::PathBuf;

use chrono::Local;
use tracing::{debug, info};

use busfare_app::app::QuoteService;
use busfare_app::config::Config;
use busfare_app::export::export_to_excel;
use busfare_app::repository::{load_depots, load_rate_card};
use busfare_domain::model::{Coordinates, PartySize, TripDates, TripEndpoint, TripRequest};
use busfare_infra::distance::StraightLineDistanceProvider;
use busfare_infra::trip_csv::load_trip_batch;
use busfare_types::{parse_time_of_day, DateValue, Error, Result};

use crate::cli::{Cli, Commands, OutputFormat};
use crate::output::{output_batch, output_depots, output_hire, output_rates, output_stage};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Hire {
            vehicle,
            km,
            from_depot,
            to_depot,
            from_lat,
            from_lon,
            to_lat,
            to_lon,
            journey,
            return_date,
        } => {
            let origin = endpoint(from_depot, from_lat, from_lon);
            let destination = endpoint(to_depot, to_lat, to_lon);
            cmd_hire(
                &config,
                &vehicle,
                km,
                origin,
                destination,
                &journey,
                &return_date,
                output_format,
            )
        }

        Commands::Stage {
            from,
            to,
            passengers,
            concession,
            at,
            night,
        } => cmd_stage(
            &config,
            &from,
            &to,
            passengers,
            concession,
            at.as_deref(),
            night,
            output_format,
        ),

        Commands::Rates => {
            let card = load_rate_card(&config)?;
            output_rates(output_format, &card)
        }

        Commands::Depots { search } => {
            let depots = load_depots(&config)?;
            let listed = match &search {
                Some(prefix) => depots.search(prefix),
                None => depots.all().iter().collect(),
            };
            output_depots(output_format, &listed)
        }

        Commands::Batch { file, output } => cmd_batch(&config, file, output, output_format),

        Commands::Config {
            show,
            set_base_rate,
            set_concession_factor,
            set_night_factor,
            set_km_per_stage,
            set_rate_card,
            set_depots,
            set_stage_table,
            set_output,
            reset,
        } => cmd_config(
            show,
            ConfigUpdate {
                base_rate: set_base_rate,
                concession_factor: set_concession_factor,
                night_factor: set_night_factor,
                km_per_stage: set_km_per_stage,
                rate_card: set_rate_card,
                depots: set_depots,
                stage_table: set_stage_table,
                output: set_output,
            },
            reset,
        ),
    }
}

fn endpoint(depot: Option<String>, lat: Option<f64>, lon: Option<f64>) -> Option<TripEndpoint> {
    match (depot, lat, lon) {
        (Some(name), _, _) => Some(TripEndpoint::Depot { name }),
        (None, Some(lat), Some(lon)) => Some(TripEndpoint::Coordinates(Coordinates::new(lat, lon))),
        _ => None,
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_hire(
    config: &Config,
    vehicle: &str,
    km: Option<f64>,
    origin: Option<TripEndpoint>,
    destination: Option<TripEndpoint>,
    journey: &str,
    return_date: &str,
    output_format: OutputFormat,
) -> Result<()> {
    let journey_date = DateValue::parse(journey).to_date()?;
    let return_date = DateValue::parse(return_date).to_date()?;
    let dates = TripDates::new(journey_date, return_date)?;

    let service = QuoteService::from_config(config)?;

    let quote = match (km, origin, destination) {
        (Some(km), _, _) => service.quote_hire(vehicle, km, dates)?,
        (None, Some(origin), Some(destination)) => {
            let trip = TripRequest {
                origin,
                destination,
                dates,
                party: PartySize::new(0, 0)?,
                is_night_service: false,
            };
            let provider = StraightLineDistanceProvider::new(config.road_coefficient);
            debug!(road_coefficient = config.road_coefficient, "estimating road distance");
            service.quote_hire_trip(vehicle, &trip, &provider)?
        }
        _ => {
            return Err(Error::RouteNotFound(
                "give --km, or both an origin and a destination".to_string(),
            ))
        }
    };

    output_hire(output_format, &quote)
}

#[allow(clippy::too_many_arguments)]
fn cmd_stage(
    config: &Config,
    from: &str,
    to: &str,
    passengers: u32,
    concession: u32,
    at: Option<&str>,
    night: bool,
    output_format: OutputFormat,
) -> Result<()> {
    let party = PartySize::new(passengers, concession)?;
    let evaluated_at = match at {
        Some(s) => parse_time_of_day(s)?,
        None => Local::now().time(),
    };

    let service = QuoteService::from_config(config)?;
    let quote = service.quote_stage(from, to, party, evaluated_at, night)?;
    output_stage(output_format, &quote)
}

fn cmd_batch(
    config: &Config,
    file: PathBuf,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let batch = load_trip_batch(&file)?;
    info!(file = %file.display(), rows = batch.len(), "quoting batch");

    let service = QuoteService::from_config(config)?;
    let quotes = service.quote_batch(&batch, Local::now().time());

    match output {
        Some(path) => {
            let extension = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_ascii_lowercase());
            match extension.as_deref() {
                Some("xlsx") => export_to_excel(&quotes, &path)?,
                Some("json") => std::fs::write(&path, serde_json::to_string_pretty(&quotes)?)?,
                _ => {
                    return Err(Error::UnsupportedFormat(format!(
                        "output file {} (use .xlsx or .json)",
                        path.display()
                    )))
                }
            }
            println!(
                "Quoted {} of {} trips -> {}",
                quotes.successful,
                quotes.entries.len(),
                path.display()
            );
            if quotes.failed > 0 {
                eprintln!("Warning: {} trips could not be quoted", quotes.failed);
            }
            Ok(())
        }
        None => output_batch(output_format, &quotes),
    }
}

struct ConfigUpdate {
    base_rate: Option<f64>,
    concession_factor: Option<f64>,
    night_factor: Option<f64>,
    km_per_stage: Option<f64>,
    rate_card: Option<PathBuf>,
    depots: Option<PathBuf>,
    stage_table: Option<PathBuf>,
    output: Option<OutputFormat>,
}

impl ConfigUpdate {
    /// Apply set values; returns whether anything changed
    fn apply(self, config: &mut Config) -> bool {
        let mut modified = false;

        if let Some(v) = self.base_rate {
            config.base_rate_per_stage = v;
            modified = true;
        }
        if let Some(v) = self.concession_factor {
            config.concession_factor = v;
            modified = true;
        }
        if let Some(v) = self.night_factor {
            config.night_surcharge_factor = v;
            modified = true;
        }
        if let Some(v) = self.km_per_stage {
            config.km_per_stage = v;
            modified = true;
        }
        if let Some(p) = self.rate_card {
            config.rate_card_path = Some(p);
            modified = true;
        }
        if let Some(p) = self.depots {
            config.depot_path = Some(p);
            modified = true;
        }
        if let Some(p) = self.stage_table {
            config.stage_table_path = Some(p);
            modified = true;
        }
        if let Some(f) = self.output {
            config.output_format = f;
            modified = true;
        }

        modified
    }
}

fn cmd_config(show: bool, update: ConfigUpdate, reset: bool) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let modified = update.apply(&mut config);

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
