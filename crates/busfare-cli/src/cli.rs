//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use busfare_types::OutputFormat;

#[derive(Parser)]
#[command(name = "busfare")]
#[command(version)]
#[command(about = "Bus hire and stage-based group fare quoting")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quote a round-trip bus hire from the rate card
    Hire {
        /// Rate card index (see `rates`) or vehicle type
        #[arg(long)]
        vehicle: String,

        /// One-way road distance in km (skips the distance estimate)
        #[arg(long, conflicts_with_all = ["from_depot", "from_lat"])]
        km: Option<f64>,

        /// Origin depot name
        #[arg(long, conflicts_with = "from_lat")]
        from_depot: Option<String>,

        /// Destination depot name
        #[arg(long, conflicts_with = "to_lat")]
        to_depot: Option<String>,

        /// Origin latitude
        #[arg(long, requires = "from_lon", allow_negative_numbers = true)]
        from_lat: Option<f64>,

        /// Origin longitude
        #[arg(long, allow_negative_numbers = true)]
        from_lon: Option<f64>,

        /// Destination latitude
        #[arg(long, requires = "to_lon", allow_negative_numbers = true)]
        to_lat: Option<f64>,

        /// Destination longitude
        #[arg(long, allow_negative_numbers = true)]
        to_lon: Option<f64>,

        /// Journey date (YYYY-MM-DD, RFC 3339, or epoch seconds)
        #[arg(long)]
        journey: String,

        /// Return date (YYYY-MM-DD, RFC 3339, or epoch seconds)
        #[arg(long = "return")]
        return_date: String,
    },

    /// Quote a group fare between two depots by stage count
    Stage {
        /// Origin depot name
        #[arg(long)]
        from: String,

        /// Destination depot name
        #[arg(long)]
        to: String,

        /// Total passengers
        #[arg(long, short = 'p')]
        passengers: u32,

        /// Concession passengers among the total
        #[arg(long, short = 'c', default_value = "0")]
        concession: u32,

        /// Check the night window against this time (HH:MM) instead of now
        #[arg(long)]
        at: Option<String>,

        /// Night service: apply the night levy regardless of time
        #[arg(long)]
        night: bool,
    },

    /// List the rate card
    Rates,

    /// List depots
    Depots {
        /// Only depots whose name starts with this
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Quote every trip in a CSV file
    Batch {
        /// Trip CSV (hire or group layout)
        file: PathBuf,

        /// Output file (.xlsx or .json). Prints to stdout if omitted.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set currency units per stage
        #[arg(long)]
        set_base_rate: Option<f64>,

        /// Set concession fare factor (0-1)
        #[arg(long)]
        set_concession_factor: Option<f64>,

        /// Set night levy multiplier
        #[arg(long)]
        set_night_factor: Option<f64>,

        /// Set km per stage (used unless the stage table file sets its own)
        #[arg(long)]
        set_km_per_stage: Option<f64>,

        /// Set rate card TOML path
        #[arg(long)]
        set_rate_card: Option<PathBuf>,

        /// Set depot CSV/JSON path
        #[arg(long)]
        set_depots: Option<PathBuf>,

        /// Set stage table TOML path
        #[arg(long)]
        set_stage_table: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_stage() {
        let cli = Cli::try_parse_from([
            "busfare", "stage", "--from", "Pune (Swargate)", "--to", "Kolhapur", "-p", "20", "-c",
            "5", "--at", "23:00",
        ])
        .unwrap();
        match cli.command {
            Commands::Stage {
                passengers,
                concession,
                at,
                night,
                ..
            } => {
                assert_eq!(passengers, 20);
                assert_eq!(concession, 5);
                assert_eq!(at.as_deref(), Some("23:00"));
                assert!(!night);
            }
            _ => panic!("expected stage command"),
        }
    }

    #[test]
    fn test_parse_hire_with_km() {
        let cli = Cli::try_parse_from([
            "busfare", "hire", "--vehicle", "0", "--km", "100", "--journey", "2025-01-01",
            "--return", "2025-01-02", "-f", "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Hire { km: Some(k), .. } if k == 100.0));
    }

    #[test]
    fn test_km_conflicts_with_depot() {
        let result = Cli::try_parse_from([
            "busfare", "hire", "--vehicle", "0", "--km", "100", "--from-depot", "Satara",
            "--journey", "2025-01-01", "--return", "2025-01-02",
        ]);
        assert!(result.is_err());
    }
}
