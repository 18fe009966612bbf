//! End-to-end quoting scenarios over file-backed reference data

use std::path::Path;

use busfare_app::app::{BatchOutcome, QuoteService};
use busfare_app::config::Config;
use busfare_domain::model::{PartySize, TripDates};
use busfare_domain::service::haversine_km;
use busfare_infra::trip_csv::load_trip_batch;
use busfare_types::Error;
use chrono::{NaiveDate, NaiveTime};

const RATES_TOML: &str = r#"
[[rates]]
vehicle_type = "Ordinary"
seating_capacity = 44
bus_type = "Non-AC"
rate_per_km = 50.0
min_km_per_day = 250.0
driver_allowance = 500.0
permit_charges = 200.0
"#;

const STAGES_TOML: &str = r#"
km_per_stage = 7.5

[[bands]]
up_to_km = 300.5
stages = 40
"#;

/// Depot B sits 300 km due north of depot A (one degree = R·π/180 km)
fn depots_csv() -> String {
    let km_per_degree = 6371.0 * std::f64::consts::PI / 180.0;
    format!(
        "id,name,lat,lon\n1,Depot A,17.0,75.0\n2,Depot B,{},75.0\n",
        17.0 + 300.0 / km_per_degree
    )
}

fn write_fixtures(dir: &Path) -> Config {
    let rates = dir.join("rates.toml");
    let stages = dir.join("stages.toml");
    let depots = dir.join("depots.csv");
    std::fs::write(&rates, RATES_TOML).unwrap();
    std::fs::write(&stages, STAGES_TOML).unwrap();
    std::fs::write(&depots, depots_csv()).unwrap();
    Config {
        rate_card_path: Some(rates),
        stage_table_path: Some(stages),
        depot_path: Some(depots),
        ..Config::default()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn hire_scenario_floor_applies() {
    let dir = tempfile::tempdir().unwrap();
    let service = QuoteService::from_config(&write_fixtures(dir.path())).unwrap();

    let dates = TripDates::new(date(2025, 1, 1), date(2025, 1, 2)).unwrap();
    let quote = service.quote_hire("0", 100.0, dates).unwrap();
    let est = &quote.estimate;

    assert_eq!(est.num_days, 2);
    assert!((est.single_journey_km + est.return_journey_km - 240.0).abs() < 1e-9);
    assert!((est.min_km_for_trip - 500.0).abs() < 1e-9);
    assert!((est.total_km - 500.0).abs() < 1e-9);
    assert!((est.base_fare - 25000.0).abs() < 1e-9);
    assert!((est.driver_allowance - 1000.0).abs() < 1e-9);
    assert!((est.permit_charges - 400.0).abs() < 1e-9);
    assert!((est.total_cost - 26400.0).abs() < 1e-9);
}

#[test]
fn stage_scenario_day_and_night() {
    let dir = tempfile::tempdir().unwrap();
    let service = QuoteService::from_config(&write_fixtures(dir.path())).unwrap();
    let party = PartySize::new(20, 5).unwrap();

    let day = service
        .quote_stage("depot a", "DEPOT B", party, NaiveTime::from_hms_opt(14, 0, 0).unwrap(), false)
        .unwrap();
    assert_eq!(day.fare.distance_km, 300);
    assert_eq!(day.fare.stages, 40);
    assert_eq!(day.fare.fare, 7000);

    let night = service
        .quote_stage("Depot A", "Depot B", party, NaiveTime::from_hms_opt(23, 0, 0).unwrap(), false)
        .unwrap();
    assert_eq!(night.fare.fare, 8260);
}

#[test]
fn stage_all_concession_is_half() {
    let dir = tempfile::tempdir().unwrap();
    let service = QuoteService::from_config(&write_fixtures(dir.path())).unwrap();
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

    let full = service
        .quote_stage("Depot A", "Depot B", PartySize::new(9, 0).unwrap(), noon, false)
        .unwrap();
    let concession = service
        .quote_stage("Depot A", "Depot B", PartySize::new(9, 9).unwrap(), noon, false)
        .unwrap();
    assert_eq!(concession.fare.fare * 2, full.fare.fare);
}

#[test]
fn custom_base_rate_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        base_rate_per_stage: 12.0,
        ..write_fixtures(dir.path())
    };
    let service = QuoteService::from_config(&config).unwrap();
    let quote = service
        .quote_stage(
            "Depot A",
            "Depot B",
            PartySize::new(1, 0).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            false,
        )
        .unwrap();
    assert_eq!(quote.fare.fare, 480);
}

#[test]
fn config_stage_length_applies_past_table_bands() {
    let dir = tempfile::tempdir().unwrap();
    let stages = dir.path().join("short_stages.toml");
    std::fs::write(&stages, "[[bands]]\nup_to_km = 6.0\nstages = 1\n").unwrap();
    let config = Config {
        km_per_stage: 50.0,
        stage_table_path: Some(stages),
        ..write_fixtures(dir.path())
    };
    let service = QuoteService::from_config(&config).unwrap();
    let quote = service
        .quote_stage(
            "Depot A",
            "Depot B",
            PartySize::new(1, 0).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            false,
        )
        .unwrap();
    // 1 + ceil((300 - 6) / 50)
    assert_eq!(quote.fare.stages, 7);
    assert_eq!(quote.fare.fare, 70);
}

#[test]
fn unknown_depot_and_rate() {
    let dir = tempfile::tempdir().unwrap();
    let service = QuoteService::from_config(&write_fixtures(dir.path())).unwrap();
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

    let err = service
        .quote_stage("Depot A", "Depot Z", PartySize::new(1, 0).unwrap(), noon, false)
        .unwrap_err();
    assert!(matches!(err, Error::DepotNotFound(_)));

    let dates = TripDates::new(date(2025, 1, 1), date(2025, 1, 1)).unwrap();
    let err = service.quote_hire("3", 10.0, dates).unwrap_err();
    assert_eq!(err.to_string(), "No rate information found for vehicle #3");
}

#[test]
fn batch_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let service = QuoteService::from_config(&write_fixtures(dir.path())).unwrap();

    let trips = dir.path().join("groups.csv");
    std::fs::write(
        &trips,
        "reference,from,to,passengers,concession,departure\n\
         G-1,Depot A,Depot B,20,5,08:00\n\
         G-2,Depot A,Depot B,20,5,22:30\n\
         G-3,Depot A,Depot B,2,5,08:00\n",
    )
    .unwrap();

    let batch = load_trip_batch(&trips).unwrap();
    let quotes = service.quote_batch(&batch, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    assert_eq!(quotes.successful, 2);
    assert_eq!(quotes.failed, 1);

    let fares: Vec<Option<u64>> = quotes
        .entries
        .iter()
        .map(|e| match &e.outcome {
            BatchOutcome::Stage(q) => Some(q.fare.fare),
            _ => None,
        })
        .collect();
    assert_eq!(fares, vec![Some(7000), Some(8260), None]);

    let xlsx = dir.path().join("groups.xlsx");
    busfare_app::export::export_to_excel(&quotes, &xlsx).unwrap();
    assert!(xlsx.exists());
}

#[test]
fn fixture_depots_are_300_km_apart() {
    let csv = depots_csv();
    let depots = busfare_infra::depot_loader::read_depots_csv(csv.as_bytes()).unwrap();
    let d = haversine_km(&depots[0].coordinates(), &depots[1].coordinates());
    assert!((d - 300.0).abs() < 1e-6);
}
