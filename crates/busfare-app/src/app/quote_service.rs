//! Quote Service - fare quoting use cases
//!
//! Resolves user selections against the loaded reference data, runs the pure
//! fare services and wraps the result in a quote envelope (id + timestamp).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use busfare_domain::model::{
    Coordinates, Depot, FareEstimate, PartySize, RateCardEntry, StageFare, TripDates,
    TripEndpoint, TripRequest,
};
use busfare_domain::service::{
    calculate_stage_fare, estimate_hire_fare, DistanceProvider, HireFarePolicy, StageFarePolicy,
    StageFareRequest,
};
use busfare_infra::trip_csv::{HireTripRow, StageTripRow, TripBatch};
use busfare_types::{parse_time_of_day, DateValue, Error, Result};

use crate::config::Config;
use crate::repository::{load_reference_data, ReferenceData};

/// Quoted point-to-point hire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HireQuote {
    pub quote_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub vehicle: RateCardEntry,
    pub journey_date: NaiveDate,
    pub return_date: NaiveDate,
    pub one_way_km: f64,
    pub estimate: FareEstimate,
}

/// Quoted depot-to-depot group fare
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageQuote {
    pub quote_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub origin: Depot,
    pub destination: Depot,
    pub passengers: u32,
    pub concession_passengers: u32,
    /// Time the night window was checked against
    pub evaluated_at: NaiveTime,
    pub fare: StageFare,
}

/// Result for one row of a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    Hire(HireQuote),
    Stage(StageQuote),
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    pub reference: String,
    pub outcome: BatchOutcome,
}

/// Results of quoting a whole trip file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchQuotes {
    pub generated_at: DateTime<Utc>,
    pub successful: usize,
    pub failed: usize,
    pub entries: Vec<BatchEntry>,
}

/// Quoting entry point shared by the CLI and batch jobs
#[derive(Debug, Clone)]
pub struct QuoteService {
    data: ReferenceData,
    hire_policy: HireFarePolicy,
    stage_policy: StageFarePolicy,
}

impl QuoteService {
    pub fn new(
        data: ReferenceData,
        hire_policy: HireFarePolicy,
        stage_policy: StageFarePolicy,
    ) -> Self {
        Self {
            data,
            hire_policy,
            stage_policy,
        }
    }

    /// Load reference data and policies from `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let data = load_reference_data(config)?;
        info!(
            rates = data.rate_card.len(),
            depots = data.depots.len(),
            "reference data ready"
        );
        Ok(Self::new(data, config.hire_policy(), config.stage_policy()))
    }

    pub fn reference_data(&self) -> &ReferenceData {
        &self.data
    }

    /// Quote a hire from a known one-way distance
    pub fn quote_hire(
        &self,
        vehicle: &str,
        one_way_km: f64,
        dates: TripDates,
    ) -> Result<HireQuote> {
        let rate = self.data.rate_card.select(vehicle)?;
        let estimate = estimate_hire_fare(one_way_km, rate, &dates, &self.hire_policy)?;
        Ok(HireQuote {
            quote_id: Uuid::new_v4(),
            issued_at: Utc::now(),
            vehicle: rate.clone(),
            journey_date: dates.journey_date(),
            return_date: dates.return_date(),
            one_way_km,
            estimate,
        })
    }

    /// Quote a hire, asking `provider` for the one-way distance
    pub fn quote_hire_trip(
        &self,
        vehicle: &str,
        trip: &TripRequest,
        provider: &dyn DistanceProvider,
    ) -> Result<HireQuote> {
        // Fail on the rate before spending a distance lookup
        self.data.rate_card.select(vehicle)?;
        let origin = self.resolve_endpoint(&trip.origin)?;
        let destination = self.resolve_endpoint(&trip.destination)?;
        let one_way_km = provider.one_way_km(&origin, &destination)?;
        self.quote_hire(vehicle, one_way_km, trip.dates)
    }

    /// Quote a group between two named depots
    pub fn quote_stage(
        &self,
        from: &str,
        to: &str,
        party: PartySize,
        evaluated_at: NaiveTime,
        night_service: bool,
    ) -> Result<StageQuote> {
        let origin = self.data.depots.resolve(from)?;
        let destination = self.data.depots.resolve(to)?;
        let request = StageFareRequest {
            origin,
            destination,
            party,
            evaluated_at,
            night_service,
        };
        let fare = calculate_stage_fare(&request, &self.data.stage_table, &self.stage_policy)?;
        Ok(StageQuote {
            quote_id: Uuid::new_v4(),
            issued_at: Utc::now(),
            origin: origin.clone(),
            destination: destination.clone(),
            passengers: party.total(),
            concession_passengers: party.concession(),
            evaluated_at,
            fare,
        })
    }

    /// Quote a group trip whose endpoints are both depots
    pub fn quote_group_trip(
        &self,
        trip: &TripRequest,
        evaluated_at: NaiveTime,
    ) -> Result<StageQuote> {
        let from = depot_name(&trip.origin)?;
        let to = depot_name(&trip.destination)?;
        self.quote_stage(from, to, trip.party, evaluated_at, trip.is_night_service)
    }

    /// Quote every row of a batch. Row failures are recorded, not propagated.
    ///
    /// Stage rows without a departure time are checked against `now`.
    pub fn quote_batch(&self, batch: &TripBatch, now: NaiveTime) -> BatchQuotes {
        let entries: Vec<BatchEntry> = match batch {
            TripBatch::Hire(rows) => rows
                .iter()
                .map(|row| BatchEntry {
                    reference: row.reference.clone(),
                    outcome: outcome(
                        self.quote_hire_row(row).map(BatchOutcome::Hire),
                        &row.reference,
                    ),
                })
                .collect(),
            TripBatch::Stage(rows) => rows
                .iter()
                .map(|row| BatchEntry {
                    reference: row.reference.clone(),
                    outcome: outcome(
                        self.quote_stage_row(row, now).map(BatchOutcome::Stage),
                        &row.reference,
                    ),
                })
                .collect(),
        };

        let failed = entries
            .iter()
            .filter(|e| matches!(e.outcome, BatchOutcome::Failed { .. }))
            .count();
        info!(total = entries.len(), failed, "batch quoted");

        BatchQuotes {
            generated_at: Utc::now(),
            successful: entries.len() - failed,
            failed,
            entries,
        }
    }

    fn quote_hire_row(&self, row: &HireTripRow) -> Result<HireQuote> {
        let journey = DateValue::parse(&row.journey_date).to_date()?;
        let ret = DateValue::parse(&row.return_date).to_date()?;
        self.quote_hire(&row.vehicle, row.one_way_km, TripDates::new(journey, ret)?)
    }

    fn quote_stage_row(&self, row: &StageTripRow, now: NaiveTime) -> Result<StageQuote> {
        let party = PartySize::new(row.passengers, row.concession.unwrap_or(0))?;
        let evaluated_at = match &row.departure {
            Some(s) => parse_time_of_day(s)?,
            None => now,
        };
        self.quote_stage(&row.from, &row.to, party, evaluated_at, false)
    }

    fn resolve_endpoint(&self, endpoint: &TripEndpoint) -> Result<Coordinates> {
        match endpoint {
            TripEndpoint::Coordinates(c) => Ok(*c),
            TripEndpoint::Depot { name } => Ok(self.data.depots.resolve(name)?.coordinates()),
        }
    }
}

fn depot_name(endpoint: &TripEndpoint) -> Result<&str> {
    match endpoint {
        TripEndpoint::Depot { name } => Ok(name.as_str()),
        TripEndpoint::Coordinates(c) => Err(Error::DepotNotFound(format!(
            "({}, {}) is not a depot",
            c.lat, c.lon
        ))),
    }
}

fn outcome(result: Result<BatchOutcome>, reference: &str) -> BatchOutcome {
    result.unwrap_or_else(|e| {
        warn!(reference, error = %e, "batch row failed");
        BatchOutcome::Failed {
            error: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use busfare_domain::model::{DepotDirectory, RateCard, StageBand, StageTable};
    use busfare_domain::service::FixedDistance;

    fn service() -> QuoteService {
        let data = ReferenceData {
            rate_card: RateCard::new(vec![RateCardEntry {
                vehicle_type: "Ordinary".to_string(),
                seating_capacity: 44,
                bus_type: "Non-AC".to_string(),
                rate_per_km: 50.0,
                min_km_per_day: 250.0,
                driver_allowance: 500.0,
                permit_charges: 200.0,
            }]),
            depots: DepotDirectory::new(vec![
                Depot {
                    name: "Pune (Swargate)".to_string(),
                    lat: 18.5018,
                    lon: 73.8636,
                    id: 2,
                },
                Depot {
                    name: "Kolhapur".to_string(),
                    lat: 16.7050,
                    lon: 74.2433,
                    id: 7,
                },
            ]),
            stage_table: StageTable::new(
                vec![StageBand {
                    up_to_km: 6.0,
                    stages: 1,
                }],
                6.0,
            )
            .unwrap(),
        };
        QuoteService::new(data, HireFarePolicy::default(), StageFarePolicy::default())
    }

    fn dates() -> TripDates {
        TripDates::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        )
        .unwrap()
    }

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_quote_hire() {
        let quote = service().quote_hire("0", 100.0, dates()).unwrap();
        assert_eq!(quote.vehicle.vehicle_type, "Ordinary");
        assert!((quote.estimate.total_cost - 26400.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_vehicle() {
        let result = service().quote_hire("Volvo", 100.0, dates());
        assert!(matches!(result, Err(Error::RateNotFound(_))));
    }

    #[test]
    fn test_hire_trip_resolves_depots() {
        let trip = TripRequest {
            origin: TripEndpoint::Depot {
                name: "pune (swargate)".to_string(),
            },
            destination: TripEndpoint::Coordinates(Coordinates::new(16.7050, 74.2433)),
            dates: dates(),
            party: PartySize::new(40, 0).unwrap(),
            is_night_service: false,
        };
        let quote = service()
            .quote_hire_trip("ordinary", &trip, &FixedDistance(100.0))
            .unwrap();
        assert!((quote.one_way_km - 100.0).abs() < 1e-9);
        assert!((quote.estimate.total_cost - 26400.0).abs() < 1e-9);
    }

    #[test]
    fn test_route_failure_propagates() {
        let trip = TripRequest {
            origin: TripEndpoint::Depot {
                name: "Kolhapur".to_string(),
            },
            destination: TripEndpoint::Depot {
                name: "Kolhapur".to_string(),
            },
            dates: dates(),
            party: PartySize::new(1, 0).unwrap(),
            is_night_service: false,
        };
        let result = service().quote_hire_trip("0", &trip, &FixedDistance(f64::NAN));
        assert!(matches!(result, Err(Error::RouteNotFound(_))));
    }

    #[test]
    fn test_quote_stage_unknown_depot() {
        let party = PartySize::new(10, 0).unwrap();
        let result = service().quote_stage("Kolhapur", "Goa", party, noon(), false);
        assert!(matches!(result, Err(Error::DepotNotFound(name)) if name == "Goa"));
    }

    #[test]
    fn test_group_trip_requires_depots() {
        let trip = TripRequest {
            origin: TripEndpoint::Coordinates(Coordinates::new(18.0, 73.0)),
            destination: TripEndpoint::Depot {
                name: "Kolhapur".to_string(),
            },
            dates: dates(),
            party: PartySize::new(10, 0).unwrap(),
            is_night_service: false,
        };
        assert!(matches!(
            service().quote_group_trip(&trip, noon()),
            Err(Error::DepotNotFound(_))
        ));
    }

    #[test]
    fn test_batch_records_failures() {
        let batch = TripBatch::Stage(vec![
            StageTripRow {
                reference: "G-1".to_string(),
                from: "Pune (Swargate)".to_string(),
                to: "Kolhapur".to_string(),
                passengers: 10,
                concession: Some(2),
                departure: Some("23:30".to_string()),
            },
            StageTripRow {
                reference: "G-2".to_string(),
                from: "Pune (Swargate)".to_string(),
                to: "Goa".to_string(),
                passengers: 10,
                concession: None,
                departure: None,
            },
        ]);
        let result = service().quote_batch(&batch, noon());
        assert_eq!(result.successful, 1);
        assert_eq!(result.failed, 1);
        match &result.entries[0].outcome {
            BatchOutcome::Stage(q) => assert!(q.fare.night_levy_applied),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_batch_departure_formats() {
        let row = |reference: &str, departure: &str| StageTripRow {
            reference: reference.to_string(),
            from: "Pune (Swargate)".to_string(),
            to: "Kolhapur".to_string(),
            passengers: 4,
            concession: None,
            departure: Some(departure.to_string()),
        };
        let batch = TripBatch::Stage(vec![row("G-1", "04:59:30"), row("G-2", "late")]);
        let result = service().quote_batch(&batch, noon());
        match &result.entries[0].outcome {
            BatchOutcome::Stage(q) => {
                assert_eq!(q.evaluated_at, NaiveTime::from_hms_opt(4, 59, 30).unwrap());
                assert!(q.fare.night_levy_applied);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(matches!(
            &result.entries[1].outcome,
            BatchOutcome::Failed { error } if error.starts_with("Invalid time of day: late")
        ));
    }

    #[test]
    fn test_batch_hire_bad_dates() {
        let batch = TripBatch::Hire(vec![HireTripRow {
            reference: "Q-1".to_string(),
            vehicle: "0".to_string(),
            one_way_km: 100.0,
            journey_date: "2025-01-05".to_string(),
            return_date: "2025-01-01".to_string(),
        }]);
        let result = service().quote_batch(&batch, noon());
        assert_eq!(result.failed, 1);
        assert!(matches!(
            &result.entries[0].outcome,
            BatchOutcome::Failed { error } if error.contains("before journey date")
        ));
    }
}
