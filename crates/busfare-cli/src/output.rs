//! Output formatting module

use busfare_app::app::{BatchOutcome, BatchQuotes, HireQuote, StageQuote};
use busfare_domain::model::{Depot, RateCard};
use busfare_types::Result;

use crate::cli::OutputFormat;

pub fn output_hire(output_format: OutputFormat, quote: &HireQuote) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(quote)?);
        return Ok(());
    }

    let e = &quote.estimate;
    println!("\nHire Quote");
    println!("==========");
    println!("Quote ID:         {}", quote.quote_id);
    println!(
        "Vehicle:          {} ({}, {} seats)",
        quote.vehicle.vehicle_type, quote.vehicle.bus_type, quote.vehicle.seating_capacity
    );
    println!(
        "Dates:            {} to {} ({} days)",
        quote.journey_date, quote.return_date, e.num_days
    );

    println!("\n--- Distance ---");
    println!("One way:          {:.1} km", quote.one_way_km);
    println!("Outbound leg:     {:.1} km", e.single_journey_km);
    println!("Return leg:       {:.1} km", e.return_journey_km);
    println!("Trip minimum:     {:.1} km", e.min_km_for_trip);
    println!("Charged:          {:.1} km", e.total_km);
    println!("----------------");

    println!("Base fare:        {:.2}", e.base_fare);
    println!("Driver allowance: {:.2}", e.driver_allowance);
    println!("Permit charges:   {:.2}", e.permit_charges);
    println!("Total:            {:.2}", e.total_cost);

    Ok(())
}

pub fn output_stage(output_format: OutputFormat, quote: &StageQuote) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(quote)?);
        return Ok(());
    }

    let f = &quote.fare;
    println!("\nGroup Fare");
    println!("==========");
    println!("Quote ID:         {}", quote.quote_id);
    println!(
        "Route:            {} -> {}",
        quote.origin.name, quote.destination.name
    );
    println!(
        "Distance:         {} km ({:.2} km great-circle)",
        f.distance_km, f.exact_distance_km
    );
    println!("Stages:           {}", f.stages);
    println!(
        "Passengers:       {} ({} concession)",
        quote.passengers, quote.concession_passengers
    );
    println!("Full fares:       {:.2}", f.fare_for_full);
    println!("Concession fares: {:.2}", f.fare_for_concession);
    println!(
        "Night levy:       {} (checked at {})",
        if f.night_levy_applied { "Yes" } else { "No" },
        quote.evaluated_at.format("%H:%M")
    );
    println!("Fare:             {}", f.fare);

    Ok(())
}

pub fn output_rates(output_format: OutputFormat, card: &RateCard) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(card.entries())?);
        return Ok(());
    }

    println!(
        "{:<4} {:<20} {:<10} {:>6} {:>8} {:>8} {:>10} {:>8}",
        "#", "Vehicle", "Type", "Seats", "Rate/km", "Min km", "Allowance", "Permit"
    );
    println!("{}", "-".repeat(80));
    for (i, r) in card.entries().iter().enumerate() {
        println!(
            "{:<4} {:<20} {:<10} {:>6} {:>8.2} {:>8.0} {:>10.2} {:>8.2}",
            i,
            r.vehicle_type,
            r.bus_type,
            r.seating_capacity,
            r.rate_per_km,
            r.min_km_per_day,
            r.driver_allowance,
            r.permit_charges
        );
    }

    Ok(())
}

pub fn output_depots(output_format: OutputFormat, depots: &[&Depot]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(depots)?);
        return Ok(());
    }

    if depots.is_empty() {
        println!("No depots found.");
        return Ok(());
    }

    println!("{:<4} {:<28} {:>10} {:>10}", "ID", "Name", "Lat", "Lon");
    println!("{}", "-".repeat(55));
    for d in depots {
        println!("{:<4} {:<28} {:>10.4} {:>10.4}", d.id, d.name, d.lat, d.lon);
    }
    println!("\nTotal: {} depots", depots.len());

    Ok(())
}

pub fn output_batch(output_format: OutputFormat, quotes: &BatchQuotes) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(quotes)?);
        return Ok(());
    }

    println!("{:<12} {:<8} {:>12}  {}", "Reference", "Kind", "Amount", "Detail");
    println!("{}", "-".repeat(70));
    for entry in &quotes.entries {
        match &entry.outcome {
            BatchOutcome::Hire(q) => println!(
                "{:<12} {:<8} {:>12.2}  {} / {:.0} km",
                entry.reference,
                "hire",
                q.estimate.total_cost,
                q.vehicle.vehicle_type,
                q.estimate.total_km
            ),
            BatchOutcome::Stage(q) => println!(
                "{:<12} {:<8} {:>12}  {} -> {}{}",
                entry.reference,
                "group",
                q.fare.fare,
                q.origin.name,
                q.destination.name,
                if q.fare.night_levy_applied { " (night)" } else { "" }
            ),
            BatchOutcome::Failed { error } => println!(
                "{:<12} {:<8} {:>12}  {}",
                entry.reference, "failed", "-", error
            ),
        }
    }
    println!("\nQuoted: {}  Failed: {}", quotes.successful, quotes.failed);

    Ok(())
}
