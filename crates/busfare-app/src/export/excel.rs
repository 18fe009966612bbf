//! Excel export of batch quotes

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use busfare_types::{Error, Result};

use crate::app::{BatchOutcome, BatchQuotes};

fn xlsx<T>(result: std::result::Result<T, rust_xlsxwriter::XlsxError>) -> Result<T> {
    result.map_err(|e| Error::Excel(e.to_string()))
}

/// Export batch quotes to an Excel file with Summary and Details sheets
pub fn export_to_excel(quotes: &BatchQuotes, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, quotes)?;

    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, quotes)?;

    xlsx(workbook.save(output_path))?;
    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, quotes: &BatchQuotes) -> Result<()> {
    xlsx(sheet.set_name("Summary"))?;
    let header_format = Format::new().set_bold();

    xlsx(sheet.write_string_with_format(0, 0, "Bus Fare Quotation Report", &header_format))?;

    xlsx(sheet.write_string(2, 0, "Generated:"))?;
    xlsx(sheet.write_string(2, 1, quotes.generated_at.to_rfc3339()))?;
    xlsx(sheet.write_string(3, 0, "Total requests:"))?;
    xlsx(sheet.write_number(3, 1, quotes.entries.len() as f64))?;
    xlsx(sheet.write_string(4, 0, "Quoted:"))?;
    xlsx(sheet.write_number(4, 1, quotes.successful as f64))?;
    xlsx(sheet.write_string(5, 0, "Failed:"))?;
    xlsx(sheet.write_number(5, 1, quotes.failed as f64))?;

    let total: f64 = quotes
        .entries
        .iter()
        .map(|e| match &e.outcome {
            BatchOutcome::Hire(q) => q.estimate.total_cost,
            BatchOutcome::Stage(q) => q.fare.fare as f64,
            BatchOutcome::Failed { .. } => 0.0,
        })
        .sum();
    xlsx(sheet.write_string(6, 0, "Total quoted amount:"))?;
    xlsx(sheet.write_number(6, 1, total))?;

    xlsx(sheet.set_column_width(0, 22))?;
    xlsx(sheet.set_column_width(1, 30))?;
    Ok(())
}

const DETAIL_HEADERS: [&str; 11] = [
    "Reference",
    "Quote ID",
    "Route / Vehicle",
    "Distance (km)",
    "Billable km / Stages",
    "Days / Passengers",
    "Base fare",
    "Allowances + Permits",
    "Night levy",
    "Total",
    "Error",
];

fn write_details_sheet(sheet: &mut Worksheet, quotes: &BatchQuotes) -> Result<()> {
    xlsx(sheet.set_name("Details"))?;
    let header_format = Format::new().set_bold();

    for (col, header) in DETAIL_HEADERS.iter().enumerate() {
        xlsx(sheet.write_string_with_format(0, col as u16, *header, &header_format))?;
    }

    for (row_idx, entry) in quotes.entries.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        xlsx(sheet.write_string(row, 0, &entry.reference))?;

        match &entry.outcome {
            BatchOutcome::Hire(q) => {
                let est = &q.estimate;
                xlsx(sheet.write_string(row, 1, q.quote_id.to_string()))?;
                xlsx(sheet.write_string(
                    row,
                    2,
                    format!("{} ({})", q.vehicle.vehicle_type, q.vehicle.bus_type),
                ))?;
                xlsx(sheet.write_number(row, 3, q.one_way_km))?;
                xlsx(sheet.write_number(row, 4, est.total_km))?;
                xlsx(sheet.write_number(row, 5, est.num_days as f64))?;
                xlsx(sheet.write_number(row, 6, est.base_fare))?;
                xlsx(sheet.write_number(row, 7, est.driver_allowance + est.permit_charges))?;
                xlsx(sheet.write_string(row, 8, "-"))?;
                xlsx(sheet.write_number(row, 9, est.total_cost))?;
            }
            BatchOutcome::Stage(q) => {
                let fare = &q.fare;
                xlsx(sheet.write_string(row, 1, q.quote_id.to_string()))?;
                xlsx(sheet.write_string(
                    row,
                    2,
                    format!("{} -> {}", q.origin.name, q.destination.name),
                ))?;
                xlsx(sheet.write_number(row, 3, fare.distance_km as f64))?;
                xlsx(sheet.write_number(row, 4, fare.stages as f64))?;
                xlsx(sheet.write_string(
                    row,
                    5,
                    format!("{} ({} concession)", q.passengers, q.concession_passengers),
                ))?;
                xlsx(sheet.write_number(row, 6, fare.fare_for_full + fare.fare_for_concession))?;
                xlsx(sheet.write_number(row, 7, 0.0))?;
                xlsx(sheet.write_string(
                    row,
                    8,
                    if fare.night_levy_applied { "Yes" } else { "No" },
                ))?;
                xlsx(sheet.write_number(row, 9, fare.fare as f64))?;
            }
            BatchOutcome::Failed { error } => {
                xlsx(sheet.write_string(row, 10, error))?;
            }
        }
    }

    xlsx(sheet.set_column_width(0, 14))?;
    xlsx(sheet.set_column_width(1, 38))?;
    xlsx(sheet.set_column_width(2, 36))?;
    xlsx(sheet.set_column_width(10, 50))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::app::BatchEntry;

    #[test]
    fn test_export_writes_file() {
        let quotes = BatchQuotes {
            generated_at: Utc::now(),
            successful: 0,
            failed: 1,
            entries: vec![BatchEntry {
                reference: "G-9".to_string(),
                outcome: BatchOutcome::Failed {
                    error: "Depot not found: Goa".to_string(),
                },
            }],
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.xlsx");
        export_to_excel(&quotes, &path).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }
}
